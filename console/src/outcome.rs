//! The uniform request outcome contract.
//!
//! Every domain service function resolves to a [`RequestOutcome`]: success
//! with a payload, or failure with a user-facing message. Callers branch
//! once on the variant instead of wrapping every call in error plumbing;
//! only a string message survives the boundary, never a structured error
//! code.

use crate::error::ApiError;

/// Tagged result of a domain service call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome<T> {
    /// The call succeeded.
    Success {
        /// Decoded response payload.
        data: T,
    },

    /// The call failed.
    Failure {
        /// User-facing message: server-provided if available, else the
        /// transport error text, else a generic fallback. Never empty.
        error: String,
    },
}

impl<T> RequestOutcome<T> {
    /// True for the success variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Extract the payload, discarding a failure.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Success { data } => Some(data),
            Self::Failure { .. } => None,
        }
    }

    /// Extract the failure message, discarding a success.
    #[must_use]
    pub fn into_error(self) -> Option<String> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error),
        }
    }
}

/// The single error-shaping wrapper applied to every backend call.
///
/// The only place where an [`ApiError`] becomes a user-facing string;
/// individual service functions never shape errors themselves.
pub fn outcome<T>(result: Result<T, ApiError>) -> RequestOutcome<T> {
    match result {
        Ok(data) => RequestOutcome::Success { data },
        Err(error) => {
            tracing::debug!(error = %error, "Service call failed");
            RequestOutcome::Failure {
                error: error.user_message(),
            }
        },
    }
}
