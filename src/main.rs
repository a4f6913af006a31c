//! Profile portal host: serves the server-rendered Leptos client and its
//! static WASM/CSS bundle. Accounts live behind the remote GraphQL API the
//! browser talks to directly, so this process holds no state.

#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }
    let config = ServerConfig::from_env()?;

    let app = routes::leptos_app()?;
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;

    tracing::info!(addr = %config.socket_addr(), "profile-portal listening");
    axum::serve(listener, app).await?;
    Ok(())
}
