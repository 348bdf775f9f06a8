//! Console environment.
//!
//! This module defines the environment type for dependency injection in
//! console reducers.

use crate::config::ConsoleConfig;
use crate::http::BearerCell;
use crate::providers::{AdminApi, Navigator, Notifier, SessionStorage};
use admin_console_core::environment::Clock;
use std::sync::Arc;

/// Console environment.
///
/// Contains all external dependencies needed by the console reducers.
///
/// # Type Parameters
///
/// - `A`: backend API
/// - `P`: persisted session storage
/// - `N`: transient notification surface
/// - `V`: routing surface
#[derive(Clone)]
pub struct ConsoleEnvironment<A, P, N, V>
where
    A: AdminApi + Clone,
    P: SessionStorage + Clone,
    N: Notifier + Clone,
    V: Navigator + Clone,
{
    /// Backend API.
    pub api: A,

    /// Persisted session storage (session file).
    pub storage: P,

    /// Transient notification surface (toast rail).
    pub notifier: N,

    /// Routing surface.
    pub navigator: V,

    /// Shared bearer-token cell read by the HTTP adapter.
    pub bearer: BearerCell,

    /// Clock for sync timestamps.
    pub clock: Arc<dyn Clock>,

    /// Static configuration (debounce interval, page size, ...).
    pub config: ConsoleConfig,
}

impl<A, P, N, V> ConsoleEnvironment<A, P, N, V>
where
    A: AdminApi + Clone,
    P: SessionStorage + Clone,
    N: Notifier + Clone,
    V: Navigator + Clone,
{
    /// Create a new console environment.
    #[must_use]
    pub fn new(
        api: A,
        storage: P,
        notifier: N,
        navigator: V,
        bearer: BearerCell,
        clock: Arc<dyn Clock>,
        config: ConsoleConfig,
    ) -> Self {
        Self {
            api,
            storage,
            notifier,
            navigator,
            bearer,
            clock,
            config,
        }
    }
}
