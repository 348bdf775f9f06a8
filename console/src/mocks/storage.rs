//! Mock session storage for testing.

use crate::error::StorageError;
use crate::providers::SessionStorage;
use crate::state::PersistedSession;
use std::future::Future;
use std::sync::{Arc, Mutex};

/// In-memory session storage.
#[derive(Debug, Clone, Default)]
pub struct MockSessionStorage {
    document: Arc<Mutex<Option<PersistedSession>>>,
}

impl MockSessionStorage {
    /// Create empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create storage pre-seeded with a session document.
    #[must_use]
    pub fn with_session(session: PersistedSession) -> Self {
        Self {
            document: Arc::new(Mutex::new(Some(session))),
        }
    }

    /// Current stored document, if any (for assertions).
    #[must_use]
    pub fn stored(&self) -> Option<PersistedSession> {
        self.document
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl SessionStorage for MockSessionStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        Ok(self.stored())
    }

    fn persist(
        &self,
        session: &PersistedSession,
    ) -> impl Future<Output = Result<(), StorageError>> + Send {
        let document = Arc::clone(&self.document);
        let session = session.clone();

        async move {
            *document
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(session);
            Ok(())
        }
    }

    fn clear(&self) -> impl Future<Output = Result<(), StorageError>> + Send {
        let document = Arc::clone(&self.document);

        async move {
            *document
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
            Ok(())
        }
    }
}
