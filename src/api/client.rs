//! HTTP client for the scraping backend
//!
//! All outbound calls go through [`ApiClient::post`], which applies the
//! shared timeout and normalizes every failure into an [`ApiError`] so the
//! operation bindings see one uniform error shape.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Fixed message for failures where no response was received at all
/// (network, DNS, or timeout).
pub const UNREACHABLE_MESSAGE: &str = "Cannot reach the server.";

/// Per-request timeout. The backend's AI-assisted operations can take well
/// over a minute on large pages.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Error type for scraping API operations
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received at all.
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,

    /// The backend responded with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The backend responded 2xx but reported `success: false`.
    #[error("{0}")]
    Backend(String),

    /// Any other transport failure (e.g. request construction).
    #[error("Request error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client for the scraping API
#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a new client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to construct HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            auth_token: None,
        }
    }

    /// Create a client with an authorization token attached to every request
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Create a client from environment configuration (server-side)
    #[cfg(feature = "server")]
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        let client = Self::new(base_url);

        // Auth is not wired up yet; the token only arrives via env.
        match std::env::var("API_TOKEN") {
            Ok(token) if !token.is_empty() => client.with_token(token),
            _ => client,
        }
    }

    /// POST a JSON body and decode a JSON response
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);

        let mut request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body);

        if let Some(token) = &self.auth_token {
            request = request.header(reqwest::header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = request.send().await.map_err(normalize_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = status_error_message(status, &body);
            tracing::warn!(status = status.as_u16(), %message, "scraping API returned an error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await.map_err(normalize_send_error)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Map send failures: anything where no response arrived collapses into the
/// fixed unreachable message; everything else propagates as-is.
fn normalize_send_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() || err.is_connect() || err.is_request() {
        ApiError::Unreachable
    } else {
        ApiError::Http(err)
    }
}

/// Message for a non-2xx response: the body's `detail` field when present,
/// else a generic status-derived message.
fn status_error_message(status: StatusCode, body: &Value) -> String {
    body.get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn status_message_prefers_the_detail_field() {
        let body = json!({ "detail": "URL is not allowed" });
        let message = status_error_message(StatusCode::UNPROCESSABLE_ENTITY, &body);
        assert_eq!(message, "URL is not allowed");
    }

    #[test]
    fn status_message_falls_back_when_detail_is_missing_or_blank() {
        let message = status_error_message(StatusCode::INTERNAL_SERVER_ERROR, &Value::Null);
        assert_eq!(message, "Request failed with status 500 Internal Server Error");

        let blank = json!({ "detail": "  " });
        let message = status_error_message(StatusCode::BAD_GATEWAY, &blank);
        assert!(message.starts_with("Request failed with status 502"));
    }

    #[test]
    fn status_message_ignores_non_string_detail() {
        let body = json!({ "detail": { "code": 42 } });
        let message = status_error_message(StatusCode::BAD_REQUEST, &body);
        assert!(message.starts_with("Request failed with status 400"));
    }

    #[test]
    fn unreachable_error_displays_the_fixed_message() {
        assert_eq!(ApiError::Unreachable.to_string(), UNREACHABLE_MESSAGE);
    }
}
