//! Recording notifier for testing.

use crate::providers::Notifier;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
    /// Informational toast.
    Info,
}

/// One recorded notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity.
    pub kind: NoticeKind,
    /// Message text.
    pub message: String,
}

/// Notifier that records every notification for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications recorded so far, in order.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Messages of the recorded error notifications, in order.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.kind == NoticeKind::Error)
            .map(|n| n.message)
            .collect()
    }

    /// Messages of the recorded success notifications, in order.
    #[must_use]
    pub fn successes(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter(|n| n.kind == NoticeKind::Success)
            .map(|n| n.message)
            .collect()
    }

    fn record(&self, kind: NoticeKind, message: &str) {
        self.notices
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(Notice {
                kind,
                message: message.to_string(),
            });
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) -> impl Future<Output = ()> + Send {
        self.record(NoticeKind::Success, message);
        async {}
    }

    fn error(&self, message: &str) -> impl Future<Output = ()> + Send {
        self.record(NoticeKind::Error, message);
        async {}
    }

    fn info(&self, message: &str) -> impl Future<Output = ()> + Send {
        self.record(NoticeKind::Info, message);
        async {}
    }
}
