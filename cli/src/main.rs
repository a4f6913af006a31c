//! `profile-cli`: terminal front-end for the profile account API.
//!
//! Shares validation, flows and the session layout with the browser client;
//! the session lives in a JSON file instead of `localStorage`.

mod api;
mod storage;

use std::path::PathBuf;
use std::process::ExitCode;

use account::flows::{self, SubmitError};
use account::graphql::DEFAULT_ENDPOINT;
use account::validate::{ProfileForm, SignInForm, SignUpForm};
use account::{Notification, SessionStore, StorageError};
use clap::{Parser, Subcommand};

use api::{AvatarFile, HttpApi};
use storage::FileStorage;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Submit(#[from] SubmitError),
    #[error("session storage: {0}")]
    Storage(#[from] StorageError),
    #[error("cannot read avatar {path}: {source}")]
    Avatar { path: PathBuf, source: std::io::Error },
    #[error("not signed in; run `profile-cli signin` first")]
    NotSignedIn,
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "profile-cli", about = "Sign up, sign in and edit your profile")]
struct Cli {
    #[arg(long, env = "PROFILE_API_URL", default_value = DEFAULT_ENDPOINT)]
    api_url: String,

    #[arg(long, env = "PROFILE_SESSION_FILE", default_value = ".profile-session.json")]
    session_file: PathBuf,

    /// Log request progress to stderr.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Register a new account.
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Sign in and store the session.
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Print the signed-in user.
    Whoami,
    /// Update the signed-in user's profile. Omitted fields keep their value.
    Update {
        #[arg(long)]
        description: Option<String>,
        /// `YYYY-MM-DD`, or an empty string to clear.
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// Forget the stored session.
    Logout,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose { tracing::Level::INFO } else { tracing::Level::WARN };
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(level).init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Submit(err)) => {
            let mut notification = Notification::default();
            flows::apply_failure(&mut notification, &err);
            match (err.field_error(), notification.message()) {
                (Some(field), _) => eprintln!("{field}"),
                (None, Some(message)) => eprintln!("{message}"),
                (None, None) => eprintln!("{err}"),
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let mut store = SessionStore::load(FileStorage::open(&cli.session_file)?);
    let mut notification = Notification::default();

    match cli.command {
        Command::Signup { email, password, confirm_password } => {
            let form = SignUpForm { email, password, confirm_password };
            flows::sign_up(&HttpApi::new(&cli.api_url, None), &form).await?;
            flows::apply_sign_up(&mut notification);
        }
        Command::Signin { email, password } => {
            let form = SignInForm { email, password };
            let payload = flows::sign_in(&HttpApi::new(&cli.api_url, None), &form).await?;
            flows::apply_sign_in(&mut store, &mut notification, payload);
        }
        Command::Whoami => {
            let user = store.user().ok_or(CliError::NotSignedIn)?;
            println!("{}", serde_json::to_string_pretty(&api::user_json(user))?);
        }
        Command::Update { description, date_of_birth, avatar } => {
            let user = store.user().ok_or(CliError::NotSignedIn)?;
            let form = merge_profile(ProfileForm::from_user(user), description, date_of_birth);
            let avatar = avatar
                .map(|path| AvatarFile::read(&path).map_err(|source| CliError::Avatar { path, source }))
                .transpose()?;
            let api = HttpApi::new(&cli.api_url, store.token().map(str::to_owned));
            let updated = flows::update_profile(&api, &form, avatar).await?;
            flows::apply_profile_update(&mut store, &mut notification, updated);
        }
        Command::Logout => {
            store.log_out();
            tracing::info!(path = %store.storage().path().display(), "session cleared");
            println!("Signed out");
        }
    }

    if let Some(message) = notification.message() {
        println!("{message}");
    }
    Ok(())
}

/// Apply command-line overrides on top of the current profile.
fn merge_profile(mut form: ProfileForm, description: Option<String>, date_of_birth: Option<String>) -> ProfileForm {
    if let Some(description) = description {
        form.description = description;
    }
    if let Some(date) = date_of_birth {
        form.date_of_birth = Some(date).filter(|d| !d.is_empty());
    }
    form
}
