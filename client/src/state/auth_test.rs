#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user().is_none());
}

#[test]
fn restore_without_browser_storage_is_signed_out() {
    let state = AuthState::restore();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(state.session.token().is_none());
}

#[test]
fn sign_in_then_log_out_in_memory() {
    let mut state = AuthState::restore();
    let user = User {
        id: "1".to_owned(),
        email: "a@example.com".to_owned(),
        description: None,
        avatar: None,
        date_of_birth: None,
    };
    state.session.set_user_and_token(user, "tok".to_owned());
    assert!(state.is_authenticated());
    assert_eq!(state.session.token(), Some("tok"));

    state.session.log_out();
    assert!(!state.is_authenticated());
}
