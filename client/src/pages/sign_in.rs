//! Sign-in page. A successful sign-in stores the session; the route guard
//! then moves the user to their profile.

use account::flows;
use account::validate::{Field, FieldError, SignInForm};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::{TextField, field_message};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::{SIGN_UP_PATH, install_auth_redirect};

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_auth_redirect(auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<FieldError>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let form = SignInForm { email: email.get_untracked(), password: password.get_untracked() };
        if let Err(e) = form.validate() {
            error.set(Some(e));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = crate::net::api::GraphqlApi::new(crate::config::api_endpoint(), None);
            leptos::task::spawn_local(async move {
                let result = flows::sign_in(&api, &form).await;
                busy.set(false);
                match result {
                    Ok(payload) => {
                        auth.update(|a| {
                            ui.update(|u| flows::apply_sign_in(&mut a.session, &mut u.notification, payload));
                        });
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
            let _ = (form, ui);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Sign in"</h1>
                <TextField label="Email" value=email error=field_message(error, Field::Email) input_type="email"/>
                <TextField
                    label="Password"
                    value=password
                    error=field_message(error, Field::Password)
                    input_type="password"
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href=SIGN_UP_PATH>"Sign up"</a>
                </p>
            </form>
        </div>
    }
}
