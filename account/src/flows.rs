//! Form submission flows shared by the browser client and the CLI.
//!
//! Each flow validates its form, returns early on the first field error, and
//! otherwise issues exactly one remote call. The `apply_*` helpers perform
//! the local side effects of a finished flow: session mutation and the
//! notification message.

#[cfg(test)]
#[path = "flows_test.rs"]
mod flows_test;

use crate::api::{AccountApi, ApiError};
use crate::graphql::{AuthPayload, SignInInput, SignUpInput, UpdateUserInput};
use crate::notification::{Notification, SIGN_IN_SUCCESS, SIGN_UP_SUCCESS, UPDATE_SUCCESS};
use crate::session::SessionStore;
use crate::storage::KeyValueStorage;
use crate::user::User;
use crate::validate::{FieldError, ProfileForm, SignInForm, SignUpForm};

/// Why a submit did not complete.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Local validation failed; no remote call was made.
    #[error(transparent)]
    Invalid(#[from] FieldError),
    /// The remote call failed.
    #[error(transparent)]
    Remote(#[from] ApiError),
}

impl SubmitError {
    /// Field error to show inline, if this was a validation failure.
    #[must_use]
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Remote(_) => None,
        }
    }
}

/// Validate and register a new account.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] before any remote call when the form is
/// invalid, or [`SubmitError::Remote`] when the API call fails.
pub async fn sign_up<A: AccountApi + ?Sized>(api: &A, form: &SignUpForm) -> Result<AuthPayload, SubmitError> {
    form.validate()?;
    let payload = api.sign_up(&SignUpInput::from(form)).await?;
    log::info!("signed up user {}", payload.user.id);
    Ok(payload)
}

/// Validate and sign in.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] before any remote call when the form is
/// invalid, or [`SubmitError::Remote`] when the API call fails.
pub async fn sign_in<A: AccountApi + ?Sized>(api: &A, form: &SignInForm) -> Result<AuthPayload, SubmitError> {
    form.validate()?;
    let payload = api.sign_in(&SignInInput::from(form)).await?;
    log::info!("signed in user {}", payload.user.id);
    Ok(payload)
}

/// Validate and update the signed-in user's profile.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] before any remote call when the
/// description is too long, or [`SubmitError::Remote`] when the call fails.
pub async fn update_profile<A: AccountApi + ?Sized>(
    api: &A,
    form: &ProfileForm,
    avatar: Option<A::Avatar>,
) -> Result<User, SubmitError> {
    form.validate()?;
    let user = api.update_user(&UpdateUserInput::from(form), avatar).await?;
    log::info!("updated profile of user {}", user.id);
    Ok(user)
}

/// Sign-up does not start a session; the user signs in next.
pub fn apply_sign_up(notification: &mut Notification) {
    notification.set(SIGN_UP_SUCCESS);
}

pub fn apply_sign_in<S: KeyValueStorage>(
    store: &mut SessionStore<S>,
    notification: &mut Notification,
    payload: AuthPayload,
) {
    store.set_user_and_token(payload.user, payload.access_token);
    notification.set(SIGN_IN_SUCCESS);
}

pub fn apply_profile_update<S: KeyValueStorage>(
    store: &mut SessionStore<S>,
    notification: &mut Notification,
    user: User,
) {
    store.set_user(user);
    notification.set(UPDATE_SUCCESS);
}

/// Surface a remote failure in the notification slot.
///
/// Validation failures are shown inline by the form and leave the
/// notification untouched.
pub fn apply_failure(notification: &mut Notification, err: &SubmitError) {
    if let SubmitError::Remote(e) = err {
        log::warn!("remote call failed: {e}");
        notification.set(e.to_string());
    }
}
