//! # HTTP gateway to the NotesShare API
//!
//! [`ApiClient`] is the single place requests are built. It joins endpoint paths onto
//! the configured API URL, attaches `Authorization: Bearer <token>` whenever a token
//! is present, and turns responses into typed results:
//!
//! - 2xx → body decoded as JSON into the requested type ([`ApiError::Decode`] if it
//!   does not fit);
//! - anything else → [`ApiError::Server`] carrying the status and the `message`
//!   field of the `{ "message": ... }` error body, when there is one.
//!
//! No retries, no backoff, no cancellation. Each endpoint group lives in its own
//! module as an `impl ApiClient` block.

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::ClientConfig;

use crate::error::ApiError;

/// Error body shape used by the server.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A file picked by the user, ready to be sent as a multipart part.
#[derive(Clone, Debug, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub bytes: Vec<u8>,
    pub content_type: Option<String>,
}

impl FileUpload {
    pub(crate) fn into_part(self) -> Result<Part, ApiError> {
        let part = Part::bytes(self.bytes).file_name(self.name);
        match self.content_type {
            Some(mime) if !mime.is_empty() => Ok(part.mime_str(&mime)?),
            _ => Ok(part),
        }
    }
}

/// Bearer-authenticated client for the NotesShare API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Builder method to set (or clear) the bearer token.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.config.endpoint(path);
        tracing::debug!("{} {}", method, url);
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send and decode a JSON response.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.send_raw(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send and discard the response body.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        self.send_raw(builder).await.map(|_| ())
    }

    async fn send_raw(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("Request failed: {}", e);
            ApiError::from(e)
        })?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<MessageBody>(&body)
                .ok()
                .and_then(|b| b.message);
            tracing::warn!(
                "Server returned {}: {}",
                status.as_u16(),
                message.as_deref().unwrap_or("<no message>")
            );
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(body)
    }

    /// Multipart form with the common title/description/category fields.
    pub(crate) fn metadata_form(
        title: &str,
        description: &str,
        category: &str,
        file: FileUpload,
    ) -> Result<Form, ApiError> {
        Ok(Form::new()
            .text("title", title.to_string())
            .text("description", description.to_string())
            .text("category", category.to_string())
            .part("file", file.into_part()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_is_treated_as_anonymous() {
        let client = ApiClient::new(ClientConfig::default()).with_token(Some(String::new()));
        assert!(!client.is_authenticated());

        let client = client.with_token(Some("tok".to_string()));
        assert!(client.is_authenticated());

        let client = client.with_token(None);
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_request_targets_configured_api() {
        let client = ApiClient::new(ClientConfig::new("https://notes.example.com", None))
            .with_token(Some("tok".to_string()));
        let request = client.request(Method::GET, "/notes").build().unwrap();
        assert_eq!(request.url().as_str(), "https://notes.example.com/api/notes");
        assert_eq!(
            request
                .headers()
                .get(reqwest::header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok()),
            Some("Bearer tok")
        );
    }

    #[test]
    fn test_anonymous_request_has_no_authorization() {
        let client = ApiClient::new(ClientConfig::default());
        let request = client.request(Method::GET, "/notes").build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }

    #[test]
    fn test_error_body_parsing() {
        let body: MessageBody = serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
        let body: MessageBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
    }
}
