//! `reqwest` transport for JSON APIs with consistent timeouts and error handling.
//! Feature clients go through this transport so request setup, the response
//! envelope, and the timeout policy live in one place. The bearer token is kept
//! in a `SecretString` and is never logged.

use super::{envelope, ApiError, GetRequest, Transport};
use crate::APP_USER_AGENT;
use reqwest::{header, Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};
use ulid::Ulid;

/// Time allowed to establish a connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Default request timeout applied when the caller does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub token: Option<SecretString>,
    pub timeout: Duration,
}

impl HttpConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    token: Option<SecretString>,
}

impl HttpTransport {
    /// Build a transport from the given configuration.
    ///
    /// # Errors
    /// Returns `ApiError::Config` if the HTTP client cannot be constructed.
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::Config(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self {
            client,
            base_url: config.base_url,
            token: config.token,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self, request), fields(url = request.url))]
    async fn send<P>(&self, request: GetRequest<'_, P>) -> Result<Value, ApiError>
    where
        P: Serialize + Sync + ?Sized,
    {
        let url = build_url(&self.base_url, request.url);
        let request_id = Ulid::new().to_string();

        let mut builder = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .header("X-Request-Id", request_id.as_str());

        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token.expose_secret());
        }

        if let Some(params) = request.params {
            builder = builder.query(params);
        }

        let built = builder
            .build()
            .map_err(|err| ApiError::Serialization(format!("Failed to build request: {err}")))?;

        debug!("GET {} request_id={}", built.url(), request_id);

        let response = self
            .client
            .execute(built)
            .await
            .map_err(map_request_error)?;

        handle_json_response(response).await
    }
}

impl Transport for HttpTransport {
    async fn get<T, P>(&self, request: GetRequest<'_, P>) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
        P: Serialize + Sync + ?Sized,
    {
        let body = self.send(request).await?;
        let payload = envelope::unwrap(body)?;

        serde_json::from_value(payload)
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    }
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps `reqwest` failures into `ApiError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        ApiError::Serialization(format!("Failed to build request: {err}"))
    } else {
        ApiError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Parses JSON responses and surfaces HTTP errors with sanitized bodies.
/// The body is read before decoding so a timeout while reading it stays a timeout.
async fn handle_json_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status();
    if status.is_success() {
        let bytes = response.bytes().await.map_err(map_request_error)?;
        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::Parse(format!("Failed to decode response: {err}")))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status: status.as_u16(),
            message: sanitize_body(&body),
        })
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
