//! Routing surface.

use crate::guard::Route;
use std::future::Future;

/// The navigation collaborator.
///
/// The console engine decides *where* to go (route guard, post-login and
/// post-mutation transitions); the embedding UI decides *how*. `replace`
/// swaps the current history entry so back-navigation cannot return to the
/// abandoned location - the guard uses it for its login redirect.
pub trait Navigator: Send + Sync {
    /// Navigate to a route, pushing a history entry.
    fn navigate(&self, route: Route) -> impl Future<Output = ()> + Send;

    /// Navigate to a route, replacing the current history entry.
    fn replace(&self, route: Route) -> impl Future<Output = ()> + Send;
}

/// Navigator that records transitions as `tracing` events.
///
/// Used when the console engine runs without a UI surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: Route) -> impl Future<Output = ()> + Send {
        async move {
            tracing::info!(path = %route.path(), "Navigating");
        }
    }

    fn replace(&self, route: Route) -> impl Future<Output = ()> + Send {
        async move {
            tracing::info!(path = %route.path(), "Navigating (replace)");
        }
    }
}
