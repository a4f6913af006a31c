//! Shared auth route guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! The profile route requires a session; the sign-up and sign-in routes are
//! only for signed-out visitors. Guards wait until the session has been
//! restored before redirecting.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const PROFILE_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/signin";
pub const SIGN_UP_PATH: &str = "/signup";

/// Whether a signed-out visitor should leave a protected route.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated()
}

/// Whether a signed-in user should leave a signed-out-only route.
pub fn should_redirect_auth(state: &AuthState) -> bool {
    !state.loading && state.is_authenticated()
}

/// Redirect to `/signin` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_unauth) {
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever auth has loaded and a user is present.
pub fn install_auth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.with(should_redirect_auth) {
            navigate(PROFILE_PATH, NavigateOptions::default());
        }
    });
}
