//! Sign-up page: email, password and confirmation.

use account::flows;
use account::validate::{Field, FieldError, SignUpForm};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::{TextField, field_message};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::{SIGN_IN_PATH, install_auth_redirect};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();
    install_auth_redirect(auth, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<FieldError>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignUpForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        if let Err(e) = form.validate() {
            error.set(Some(e));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let api = crate::net::api::GraphqlApi::new(crate::config::api_endpoint(), None);
            leptos::task::spawn_local(async move {
                let result = flows::sign_up(&api, &form).await;
                busy.set(false);
                match result {
                    Ok(_) => {
                        ui.update(|u| flows::apply_sign_up(&mut u.notification));
                        navigate(SIGN_IN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        error.set(err.field_error().cloned());
                        ui.update(|u| flows::apply_failure(&mut u.notification, &err));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, ui, &navigate);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign up"</h1>
                <TextField label="Email" value=email error=field_message(error, Field::Email) input_type="email"/>
                <TextField
                    label="Password"
                    value=password
                    error=field_message(error, Field::Password)
                    input_type="password"
                />
                <TextField
                    label="Confirm password"
                    value=confirm_password
                    error=field_message(error, Field::ConfirmPassword)
                    input_type="password"
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign up"
                </button>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=SIGN_IN_PATH>"Sign in"</a>
                </p>
            </form>
        </div>
    }
}
