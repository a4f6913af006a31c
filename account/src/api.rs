//! Remote account API seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client implements [`AccountApi`] over `gloo-net`, the CLI over
//! `reqwest`. Flows and tests depend only on this trait. Futures are not
//! required to be `Send` because browser fetch futures are not.

use async_trait::async_trait;

use crate::User;
use crate::graphql::{AuthPayload, SignInInput, SignUpInput, UpdateUserInput};

/// Failure of a remote call.
///
/// `Display` is the text shown to the user in the notification slot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Network(String),
    /// Non-2xx response without GraphQL errors in the body.
    #[error("Response not successful: Received status code {0}")]
    Status(u16),
    /// The server answered with GraphQL errors (messages joined by newline).
    #[error("{0}")]
    Graphql(String),
    /// The response had neither `data` nor `errors`.
    #[error("response contained no data")]
    MissingData,
    /// The response body could not be decoded.
    #[error("invalid response: {0}")]
    Decode(String),
    /// The transport cannot run in this environment (e.g. during SSR).
    #[error("{0}")]
    Unavailable(&'static str),
}

/// The three mutations the application consumes.
#[async_trait(?Send)]
pub trait AccountApi {
    /// Platform file handle accepted as an avatar upload.
    type Avatar;

    /// Register a new account.
    async fn sign_up(&self, input: &SignUpInput) -> Result<AuthPayload, ApiError>;

    /// Exchange credentials for a user and access token.
    async fn sign_in(&self, input: &SignInInput) -> Result<AuthPayload, ApiError>;

    /// Update the signed-in user's profile, optionally uploading an avatar.
    async fn update_user(
        &self,
        input: &UpdateUserInput,
        avatar: Option<Self::Avatar>,
    ) -> Result<User, ApiError>;
}
