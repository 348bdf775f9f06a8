//! Transient user notifications.

use std::future::Future;

/// Transient notification surface (the UI's toast rail).
///
/// Notifications are fire-and-forget: no identifier comes back and nothing
/// is awaited beyond delivery to the surface.
pub trait Notifier: Send + Sync {
    /// Show a success notification.
    fn success(&self, message: &str) -> impl Future<Output = ()> + Send;

    /// Show an error notification.
    fn error(&self, message: &str) -> impl Future<Output = ()> + Send;

    /// Show a neutral informational notification.
    fn info(&self, message: &str) -> impl Future<Output = ()> + Send;
}

/// Notifier that emits notifications as `tracing` events.
///
/// Used when the console engine runs without a UI surface (smoke tooling,
/// integration environments).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) -> impl Future<Output = ()> + Send {
        let message = message.to_string();
        async move {
            tracing::info!(kind = "success", "{message}");
        }
    }

    fn error(&self, message: &str) -> impl Future<Output = ()> + Send {
        let message = message.to_string();
        async move {
            tracing::warn!(kind = "error", "{message}");
        }
    }

    fn info(&self, message: &str) -> impl Future<Output = ()> + Send {
        let message = message.to_string();
        async move {
            tracing::info!(kind = "info", "{message}");
        }
    }
}
