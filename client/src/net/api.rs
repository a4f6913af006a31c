//! GraphQL transport for the browser.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, JSON for plain
//! mutations and a multipart form when an avatar file is attached.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! the mutations are only issued from event handlers in the browser.
//!
//! ERROR HANDLING
//! ==============
//! All failures become [`ApiError`] values whose `Display` text goes straight
//! into the notification slot, so nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use account::graphql::{AuthPayload, SignInInput, SignUpInput, UpdateUserInput};
use account::{AccountApi, ApiError, User};
use async_trait::async_trait;

use crate::state::auth::SessionState;

/// File handle accepted as an avatar upload.
#[cfg(feature = "hydrate")]
pub type AvatarFile = web_sys::File;
#[cfg(not(feature = "hydrate"))]
pub type AvatarFile = ();

const SERVER_UNAVAILABLE: &str = "not available on server";

/// Account API bound to one endpoint and, optionally, one bearer token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphqlApi {
    endpoint: String,
    token: Option<String>,
}

impl GraphqlApi {
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self { endpoint: endpoint.into(), token }
    }

    /// Client for the configured endpoint carrying the session's token.
    pub fn for_session(session: &SessionState) -> Self {
        Self::new(crate::config::api_endpoint(), session.token().map(str::to_owned))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `Authorization` header value; empty when signed out.
    #[cfg(any(test, feature = "hydrate"))]
    fn authorization(&self) -> String {
        account::graphql::authorization_value(self.token.as_deref())
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
impl GraphqlApi {
    fn request(&self) -> gloo_net::http::RequestBuilder {
        gloo_net::http::Request::post(&self.endpoint)
            .header(account::graphql::PREFLIGHT_HEADER, "true")
            .header("Authorization", &self.authorization())
    }

    async fn send<T: serde::de::DeserializeOwned>(
        request: gloo_net::http::Request,
    ) -> Result<T, ApiError> {
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        account::graphql::decode_response(status, &body)
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        body: &B,
    ) -> Result<T, ApiError> {
        let request = self
            .request()
            .json(body)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Self::send(request).await
    }

    async fn post_upload<T: serde::de::DeserializeOwned>(
        &self,
        input: &UpdateUserInput,
        avatar: &web_sys::File,
    ) -> Result<T, ApiError> {
        let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
        form.append_with_str("operations", &account::graphql::upload_operations(input)?)
            .map_err(|e| js_error(&e))?;
        form.append_with_str("map", &account::graphql::upload_map())
            .map_err(|e| js_error(&e))?;
        form.append_with_blob_and_filename(account::graphql::AVATAR_PART, avatar, &avatar.name())
            .map_err(|e| js_error(&e))?;
        let request = self
            .request()
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::send(request).await
    }
}

#[async_trait(?Send)]
impl AccountApi for GraphqlApi {
    type Avatar = AvatarFile;

    async fn sign_up(&self, input: &SignUpInput) -> Result<AuthPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let data: account::graphql::SignUpData =
                self.post_json(&account::graphql::sign_up_request(input)).await?;
            Ok(data.signup)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            Err(ApiError::Unavailable(SERVER_UNAVAILABLE))
        }
    }

    async fn sign_in(&self, input: &SignInInput) -> Result<AuthPayload, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let data: account::graphql::SignInData =
                self.post_json(&account::graphql::sign_in_request(input)).await?;
            Ok(data.signin)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = input;
            Err(ApiError::Unavailable(SERVER_UNAVAILABLE))
        }
    }

    async fn update_user(
        &self,
        input: &UpdateUserInput,
        avatar: Option<AvatarFile>,
    ) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let data: account::graphql::UpdateUserData = match avatar {
                Some(file) => self.post_upload(input, &file).await?,
                None => self.post_json(&account::graphql::update_user_request(input)).await?,
            };
            Ok(data.update_user.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (input, avatar);
            Err(ApiError::Unavailable(SERVER_UNAVAILABLE))
        }
    }
}
