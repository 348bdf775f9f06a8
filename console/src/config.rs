//! Console configuration.
//!
//! Configuration is supplied by the environment at startup and is not a
//! runtime-reloadable concern.

use crate::error::ApiError;
use std::path::PathBuf;
use std::time::Duration;

/// Default search debounce interval.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Default page size requested from the list endpoint.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Console client configuration.
///
/// # Examples
///
/// ```
/// use admin_console::config::ConsoleConfig;
/// use std::time::Duration;
///
/// let config = ConsoleConfig::new("https://api.example.com/v1/admin", "secret-key")
///     .with_debounce(Duration::from_millis(300));
/// assert_eq!(config.default_page_size, 10);
/// ```
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL of the backend API (e.g. `https://api.example.com/v1/admin`).
    pub api_base_url: String,

    /// Static API key sent with every request.
    pub api_key: String,

    /// Path of the persisted session document.
    pub session_file: PathBuf,

    /// Trailing-edge debounce applied to search input.
    pub debounce: Duration,

    /// Page size used until the server echoes its own.
    pub default_page_size: u64,
}

impl ConsoleConfig {
    /// Create a configuration with defaults for everything but the API
    /// coordinates.
    #[must_use]
    pub fn new(api_base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            api_key: api_key.into(),
            session_file: PathBuf::from("session.json"),
            debounce: DEFAULT_DEBOUNCE,
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Build a configuration from environment variables.
    ///
    /// - `ADMIN_API_BASE_URL` (required)
    /// - `ADMIN_API_KEY` (default: `default-dev-key`)
    /// - `ADMIN_SESSION_FILE` (default: `session.json`)
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] if `ADMIN_API_BASE_URL` is not
    /// set.
    pub fn from_env() -> Result<Self, ApiError> {
        let api_base_url = std::env::var("ADMIN_API_BASE_URL")
            .map_err(|_| ApiError::InvalidConfig("ADMIN_API_BASE_URL is not set".to_string()))?;
        let api_key =
            std::env::var("ADMIN_API_KEY").unwrap_or_else(|_| "default-dev-key".to_string());

        let mut config = Self::new(api_base_url, api_key);
        if let Ok(path) = std::env::var("ADMIN_SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }
        Ok(config)
    }

    /// Set the session file path.
    #[must_use]
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_file = path.into();
        self
    }

    /// Set the search debounce interval.
    #[must_use]
    pub const fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Set the default page size.
    #[must_use]
    pub const fn with_default_page_size(mut self, page_size: u64) -> Self {
        self.default_page_size = page_size;
        self
    }
}
