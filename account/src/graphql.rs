//! GraphQL wire schema for the account API.
//!
//! DESIGN
//! ======
//! Operation documents, variables and response payloads are typed here so the
//! browser and CLI transports only move bytes. Response decoding is shared
//! through [`decode_response`], which both transports call with the HTTP
//! status and body text.
//!
//! Avatar uploads follow the GraphQL multipart request convention: an
//! `operations` part holding the request with `variables.avatar = null`, a
//! `map` part pointing file part `"0"` at that variable, and the file itself.

#[cfg(test)]
#[path = "graphql_test.rs"]
mod graphql_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::User;
use crate::api::ApiError;
use crate::validate::{ProfileForm, SignInForm, SignUpForm};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

/// Header that lets the API accept multipart requests from browsers.
pub const PREFLIGHT_HEADER: &str = "apollo-require-preflight";

/// Multipart part name of the uploaded avatar file.
pub const AVATAR_PART: &str = "0";

pub const SIGN_UP: &str = "mutation Signup($signUpInput: SignUpInput!) {
  signup(signUpInput: $signUpInput) {
    user {
      email
      id
    }
    accessToken
  }
}";

pub const SIGN_IN: &str = "mutation Signin($signInInput: SignInInput!) {
  signin(signInInput: $signInInput) {
    user {
      email
      id
      description
      avatar
      dateOfBirth
    }
    accessToken
  }
}";

pub const UPDATE_USER: &str = "mutation UpdateUser($updateUserInput: UpdateUserInput!, $avatar: Upload) {
  updateUser(updateUserInput: $updateUserInput, avatar: $avatar) {
    user {
      email
      id
      description
      avatar
      dateOfBirth
    }
  }
}";

// =============================================================================
// INPUTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<&SignUpForm> for SignUpInput {
    fn from(form: &SignUpForm) -> Self {
        Self {
            email: form.email.clone(),
            password: form.password.clone(),
            confirm_password: form.confirm_password.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

impl From<&SignInForm> for SignInInput {
    fn from(form: &SignInForm) -> Self {
        Self { email: form.email.clone(), password: form.password.clone() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub description: String,
    pub date_of_birth: Option<String>,
}

impl From<&ProfileForm> for UpdateUserInput {
    fn from(form: &ProfileForm) -> Self {
        Self {
            description: form.description.clone(),
            date_of_birth: form.date_of_birth.clone().filter(|d| !d.is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpVariables<'a> {
    pub sign_up_input: &'a SignUpInput,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInVariables<'a> {
    pub sign_in_input: &'a SignInInput,
}

/// Variables for `UpdateUser`. `avatar` is always null in the JSON body; the
/// file travels as a separate multipart part.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserVariables<'a> {
    pub update_user_input: &'a UpdateUserInput,
    pub avatar: Option<()>,
}

/// A GraphQL request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<V> {
    pub query: &'static str,
    pub operation_name: &'static str,
    pub variables: V,
}

#[must_use]
pub fn sign_up_request(input: &SignUpInput) -> GraphqlRequest<SignUpVariables<'_>> {
    GraphqlRequest { query: SIGN_UP, operation_name: "Signup", variables: SignUpVariables { sign_up_input: input } }
}

#[must_use]
pub fn sign_in_request(input: &SignInInput) -> GraphqlRequest<SignInVariables<'_>> {
    GraphqlRequest { query: SIGN_IN, operation_name: "Signin", variables: SignInVariables { sign_in_input: input } }
}

#[must_use]
pub fn update_user_request(input: &UpdateUserInput) -> GraphqlRequest<UpdateUserVariables<'_>> {
    GraphqlRequest {
        query: UPDATE_USER,
        operation_name: "UpdateUser",
        variables: UpdateUserVariables { update_user_input: input, avatar: None },
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// User and access token returned by `signup` and `signin`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthPayload {
    pub user: User,
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct SignUpData {
    pub signup: AuthPayload,
}

#[derive(Debug, Deserialize)]
pub struct SignInData {
    pub signin: AuthPayload,
}

#[derive(Debug, Deserialize)]
pub struct UserPayload {
    pub user: User,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserData {
    pub update_user: UserPayload,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

impl<T> GraphqlResponse<T> {
    /// # Errors
    ///
    /// Returns [`ApiError::Graphql`] when the server reported errors and
    /// [`ApiError::MissingData`] when `data` is absent.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.errors.is_empty() {
            let joined = self
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            return Err(ApiError::Graphql(joined));
        }
        self.data.ok_or(ApiError::MissingData)
    }
}

/// Decode an HTTP response carrying a GraphQL envelope.
///
/// The envelope is read with untyped `data` first, so GraphQL errors win
/// over both the HTTP status and a `data` payload that does not fit `T`
/// (servers return `{"signin": null}` next to the error).
///
/// # Errors
///
/// See [`ApiError`] variants; the error text is user-facing.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let ok = (200..300).contains(&status);
    let envelope = match serde_json::from_str::<GraphqlResponse<serde_json::Value>>(body) {
        Ok(envelope) => envelope,
        Err(_) if !ok => return Err(ApiError::Status(status)),
        Err(e) => return Err(ApiError::Decode(e.to_string())),
    };
    if envelope.errors.is_empty() && !ok {
        return Err(ApiError::Status(status));
    }
    let data = envelope.into_data()?;
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// HEADERS + MULTIPART
// =============================================================================

/// `Authorization` header value: `Bearer <token>`, or empty when signed out.
#[must_use]
pub fn authorization_value(token: Option<&str>) -> String {
    token
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
        .unwrap_or_default()
}

/// JSON for the multipart `operations` part of an `UpdateUser` upload.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the request cannot be serialized.
pub fn upload_operations(input: &UpdateUserInput) -> Result<String, ApiError> {
    serde_json::to_string(&update_user_request(input)).map_err(|e| ApiError::Decode(e.to_string()))
}

/// JSON for the multipart `map` part binding file part `"0"` to `$avatar`.
#[must_use]
pub fn upload_map() -> String {
    format!(r#"{{"{AVATAR_PART}":["variables.avatar"]}}"#)
}
