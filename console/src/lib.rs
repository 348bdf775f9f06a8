//! # Admin Console
//!
//! Client-side engine for a single-page admin console: the session/auth
//! lifecycle and the list-data synchronization pipeline, built on the
//! store/reducer/effect architecture.
//!
//! ## Architecture
//!
//! ```text
//! View → Action → Reducer → (State, Effects) → Effect Execution → More Actions
//! ```
//!
//! - Views send [`ConsoleAction`]s into a single shared store and read
//!   [`ConsoleState`] snapshots back
//! - The session reducer owns login/logout/profile flows and the
//!   token+user pair
//! - The user-list reducer owns the debounced, sequence-stamped,
//!   fire-and-refetch list pipeline
//! - The HTTP adapter attaches credentials and handles unauthorized
//!   responses centrally
//! - The route guard decides, per navigation, whether a route renders or
//!   redirects to login
//!
//! ## Example
//!
//! ```rust,ignore
//! use admin_console::{ConsoleAction, ConsoleConfig, build_store};
//! use admin_console::providers::LoginCredentials;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = build_store(ConsoleConfig::from_env()?);
//!
//! store
//!     .send(ConsoleAction::LoginSubmitted {
//!         credentials: LoginCredentials {
//!             email: "admin@example.com".into(),
//!             password: "secret".into(),
//!         },
//!     })
//!     .await?;
//!
//! let signed_in = store.state(|s| s.session.is_authenticated()).await;
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod actions;
pub mod api;
pub mod bootstrap;
pub mod config;
pub mod environment;
pub mod error;
pub mod guard;
pub mod http;
pub mod outcome;
pub mod providers;
pub mod reducers;
pub mod services;
pub mod state;

/// Mock providers for testing.
#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use actions::ConsoleAction;
pub use bootstrap::{ConsoleStore, build_store};
pub use config::ConsoleConfig;
pub use environment::ConsoleEnvironment;
pub use error::{ApiError, StorageError};
pub use guard::{Route, RouteDecision, decide};
pub use outcome::RequestOutcome;
pub use reducers::{ConsoleReducer, SessionReducer, UserListReducer};
pub use state::{ConsoleState, ListPage, ListQuery, SessionState, UserId, UserProfile};
