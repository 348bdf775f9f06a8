//! Recording navigator for testing.

use crate::guard::Route;
use crate::providers::Navigator;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// One recorded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRecord {
    /// Destination route.
    pub route: Route,
    /// Whether the history entry was replaced.
    pub replace: bool,
}

/// Navigator that records every transition for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    records: Arc<Mutex<Vec<NavigationRecord>>>,
}

impl RecordingNavigator {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All navigations recorded so far, in order.
    #[must_use]
    pub fn records(&self) -> Vec<NavigationRecord> {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// The most recent navigation, if any.
    #[must_use]
    pub fn last(&self) -> Option<NavigationRecord> {
        self.records().pop()
    }

    fn record(&self, route: Route, replace: bool) {
        self.records
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(NavigationRecord { route, replace });
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) -> impl Future<Output = ()> + Send {
        self.record(route, false);
        async {}
    }

    fn replace(&self, route: Route) -> impl Future<Output = ()> + Send {
        self.record(route, true);
        async {}
    }
}
