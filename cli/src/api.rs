//! GraphQL transport over `reqwest`.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::path::Path;

use account::graphql::{
    self, AuthPayload, SignInData, SignInInput, SignUpData, SignUpInput, UpdateUserData, UpdateUserInput,
};
use account::{AccountApi, ApiError, User};
use async_trait::async_trait;
use reqwest::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use reqwest::multipart::{Form, Part};
use serde_json::Value;

/// Avatar image read from disk for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl AvatarFile {
    /// # Errors
    ///
    /// Returns the I/O error if `path` cannot be read.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        let file_name = path
            .file_name()
            .map_or_else(|| "avatar".to_owned(), |n| n.to_string_lossy().into_owned());
        Ok(Self { file_name, bytes: std::fs::read(path)? })
    }
}

#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(endpoint: impl Into<String>, token: Option<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint: endpoint.into(), token }
    }

    fn request(&self) -> RequestBuilder {
        self.client
            .post(&self.endpoint)
            .header(graphql::PREFLIGHT_HEADER, "true")
            .header(AUTHORIZATION, graphql::authorization_value(self.token.as_deref()))
    }

    async fn send<T: serde::de::DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        tracing::debug!(status, "graphql response");
        graphql::decode_response(status, &body)
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(&self, body: &B) -> Result<T, ApiError> {
        Self::send(self.request().json(body)).await
    }
}

/// Multipart body for an `UpdateUser` call carrying an avatar.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the operations JSON cannot be built.
pub fn upload_form(input: &UpdateUserInput, avatar: AvatarFile) -> Result<Form, ApiError> {
    let file = Part::bytes(avatar.bytes).file_name(avatar.file_name);
    Ok(Form::new()
        .text("operations", graphql::upload_operations(input)?)
        .text("map", graphql::upload_map())
        .part(graphql::AVATAR_PART, file))
}

#[async_trait(?Send)]
impl AccountApi for HttpApi {
    type Avatar = AvatarFile;

    async fn sign_up(&self, input: &SignUpInput) -> Result<AuthPayload, ApiError> {
        let data: SignUpData = self.post_json(&graphql::sign_up_request(input)).await?;
        Ok(data.signup)
    }

    async fn sign_in(&self, input: &SignInInput) -> Result<AuthPayload, ApiError> {
        let data: SignInData = self.post_json(&graphql::sign_in_request(input)).await?;
        Ok(data.signin)
    }

    async fn update_user(&self, input: &UpdateUserInput, avatar: Option<AvatarFile>) -> Result<User, ApiError> {
        let data: UpdateUserData = match avatar {
            Some(file) => Self::send(self.request().multipart(upload_form(input, file)?)).await?,
            None => self.post_json(&graphql::update_user_request(input)).await?,
        };
        Ok(data.update_user.user)
    }
}

/// Pretty JSON for `whoami` output.
pub fn user_json(user: &User) -> Value {
    let mut json = serde_json::to_value(user).unwrap_or(Value::Null);
    if let (Some(raw), Value::Object(map)) = (user.date_of_birth(), &mut json) {
        map.insert(
            "dateOfBirthDisplay".to_owned(),
            Value::String(account::user::format_date_of_birth(raw)),
        );
    }
    json
}
