//! Error types for the console client.

use thiserror::Error;

/// Fallback message shown when no better error text is available.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Errors produced by the HTTP client adapter and the REST API layer.
///
/// The taxonomy mirrors the system's error policy: unauthorized responses
/// are handled centrally by the adapter, everything else is converted to a
/// user-facing message at the service boundary and surfaced as a transient
/// notification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the bearer token (HTTP 401).
    ///
    /// The adapter has already reset the session by the time this error is
    /// observed; callers should not attempt recovery.
    #[error("Unauthorized")]
    Unauthorized,

    /// The backend answered with a non-success status.
    #[error("API error (status {status})")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message extracted from the response body, if any
        message: Option<String>,
    },

    /// The request never produced a response (connection refused, DNS,
    /// timeout).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("Response parsing failed: {0}")]
    Decode(String),

    /// Configuration is missing or invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// Best-effort user-facing message.
    ///
    /// Preference order: server-provided message from the response body,
    /// else the transport error text, else a generic fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Transport(text) => text.clone(),
            Self::Unauthorized => "Session expired. Please sign in again.".to_string(),
            Self::Api { message: None, .. } | Self::Decode(_) | Self::InvalidConfig(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            },
        }
    }

    /// Returns `true` for the unauthorized circuit-breaker case.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

/// Errors from the persisted session storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the session file failed.
    #[error("Session storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted session document could not be (de)serialized.
    #[error("Session storage serialization failed: {0}")]
    Serde(#[from] serde_json::Error),
}
