//! HTTP client adapter.
//!
//! Wraps outbound calls to the backend: attaches the static `api-key`
//! header and the bearer token when one is present, unwraps the transport
//! envelope so callers receive the payload body, and reacts to
//! unauthorized responses centrally. All other failures propagate upward
//! untouched - no retries, no backoff.

use crate::config::ConsoleConfig;
use crate::error::ApiError;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use std::sync::{Arc, RwLock};

/// The transport envelope every endpoint answers with.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiEnvelope {
    /// Human-readable status message; on failures this is the text shown
    /// to the user.
    #[serde(default)]
    pub message: Option<String>,

    /// Endpoint-specific payload.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Shared cell holding the current bearer token.
///
/// Written on login, cleared on logout and on unauthorized responses. The
/// adapter reads it on every request, so all in-flight code paths agree on
/// the credential without threading it through call sites.
#[derive(Debug, Clone, Default)]
pub struct BearerCell(Arc<RwLock<Option<String>>>);

impl BearerCell {
    /// Create an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current token, if any.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.0
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Replace the token.
    pub fn set(&self, token: impl Into<String>) {
        *self
            .0
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token.into());
    }

    /// Drop the token.
    pub fn clear(&self) {
        *self
            .0
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
    }
}

/// Hook invoked when the backend answers 401.
///
/// The composition root registers a closure here that clears the persisted
/// session and feeds a session-reset action into the store; the reducer
/// then forces navigation to the login entry point. This is the one side
/// effect that bypasses the normal call/return path.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client adapter for the backend API.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    bearer: BearerCell,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl HttpClient {
    /// Create an adapter from configuration.
    #[must_use]
    pub fn new(config: &ConsoleConfig, bearer: BearerCell) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            bearer,
            on_unauthorized: None,
        }
    }

    /// Register the unauthorized hook.
    #[must_use]
    pub fn with_unauthorized_hook(mut self, hook: UnauthorizedHook) -> Self {
        self.on_unauthorized = Some(hook);
        self
    }

    /// The bearer cell this adapter reads.
    #[must_use]
    pub fn bearer(&self) -> &BearerCell {
        &self.bearer
    }

    /// GET with query parameters.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ApiEnvelope, ApiError> {
        let request = self.request(Method::GET, path).query(query);
        self.execute(request).await
    }

    /// POST with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub async fn post<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope, ApiError> {
        let request = self.request(Method::POST, path).json(body);
        self.execute(request).await
    }

    /// PATCH with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub async fn patch<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope, ApiError> {
        let request = self.request(Method::PATCH, path).json(body);
        self.execute(request).await
    }

    /// PATCH with a multipart form (the user-edit endpoint, which carries
    /// an optional image attachment).
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub async fn patch_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<ApiEnvelope, ApiError> {
        let request = self.request(Method::PATCH, path).multipart(form);
        self.execute(request).await
    }

    /// DELETE with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`HttpClient::execute`].
    pub async fn delete<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope, ApiError> {
        let request = self.request(Method::DELETE, path).json(body);
        self.execute(request).await
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self
            .client
            .request(method, url)
            .header("api-key", &self.api_key);

        if let Some(token) = self.bearer.get() {
            builder = builder.bearer_auth(token);
        }

        builder
    }

    /// Send a request and unwrap the transport envelope.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Transport`] when no response arrives
    /// - [`ApiError::Unauthorized`] on 401, after the central session reset
    /// - [`ApiError::Api`] on any other non-success status, with the
    ///   server's message extracted from the body when present
    /// - [`ApiError::Decode`] when a success body is not a valid envelope
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<ApiEnvelope, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized();
            return Err(ApiError::Unauthorized);
        }

        if status.is_success() {
            return response
                .json::<ApiEnvelope>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()));
        }

        // Failure status: pull the server's message out of the body if the
        // body is an envelope; otherwise report the status alone.
        let message = response
            .json::<ApiEnvelope>()
            .await
            .ok()
            .and_then(|envelope| envelope.message);

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn handle_unauthorized(&self) {
        tracing::warn!("Unauthorized response, resetting session");
        self.bearer.clear();

        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("has_unauthorized_hook", &self.on_unauthorized.is_some())
            .finish_non_exhaustive()
    }
}
