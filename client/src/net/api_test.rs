use super::*;

#[test]
fn authorization_is_bearer_when_token_present() {
    let api = GraphqlApi::new("http://api.test/graphql", Some("tok".to_owned()));
    assert_eq!(api.authorization(), "Bearer tok");
    assert_eq!(api.endpoint(), "http://api.test/graphql");
}

#[test]
fn authorization_is_empty_when_signed_out() {
    assert_eq!(GraphqlApi::new("x", None).authorization(), "");
    assert_eq!(GraphqlApi::new("x", Some(String::new())).authorization(), "");
}

#[cfg(not(feature = "hydrate"))]
mod server {
    use account::graphql::SignInInput;
    use account::{AccountApi, ApiError, KeyValueStorage, User};

    use crate::net::api::GraphqlApi;
    use crate::state::auth::SessionState;
    use crate::util::storage::BrowserStorage;

    #[test]
    fn for_session_uses_configured_endpoint_and_session_token() {
        let mut session = SessionState::new(BrowserStorage);
        session.set_user_and_token(
            User {
                id: "1".to_owned(),
                email: "a@example.com".to_owned(),
                description: None,
                avatar: None,
                date_of_birth: None,
            },
            "tok".to_owned(),
        );
        let api = GraphqlApi::for_session(&session);
        assert_eq!(api.endpoint(), crate::config::api_endpoint());
        assert_eq!(api.authorization(), "Bearer tok");
        assert_eq!(BrowserStorage.get("token"), None);
    }

    #[tokio::test]
    async fn calls_are_unavailable_during_ssr() {
        let api = GraphqlApi::new("x", None);
        let input = SignInInput { email: "a@example.com".to_owned(), password: "abcde".to_owned() };
        let err = api.sign_in(&input).await.unwrap_err();
        assert_eq!(err, ApiError::Unavailable("not available on server"));
    }
}
