#![cfg(not(feature = "hydrate"))]

use account::User;

use super::*;

fn signed_in(loading: bool) -> AuthState {
    let mut state = AuthState { loading, ..AuthState::default() };
    state.session.set_user_and_token(
        User {
            id: "u1".to_owned(),
            email: "alice@example.com".to_owned(),
            description: None,
            avatar: None,
            date_of_birth: None,
        },
        "tok".to_owned(),
    );
    state
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { loading: false, ..AuthState::default() };
    assert!(should_redirect_unauth(&state));
    assert!(!should_redirect_auth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::default();
    assert!(!should_redirect_unauth(&state));
    assert!(!should_redirect_auth(&signed_in(true)));
}

#[test]
fn should_redirect_auth_when_user_exists() {
    let state = signed_in(false);
    assert!(!should_redirect_unauth(&state));
    assert!(should_redirect_auth(&state));
}
