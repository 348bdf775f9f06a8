//! Persisted session storage.

use crate::error::StorageError;
use crate::state::PersistedSession;
use std::future::Future;
use std::path::PathBuf;

/// Durable client-side session storage.
///
/// Holds the auth token and the serialized current-user record so a
/// process restart restores the session without re-authentication.
///
/// `load` is synchronous: hydration happens at process start, before the
/// store (and any async runtime plumbing around it) exists. Writes happen
/// inside effects and are async.
pub trait SessionStorage: Send + Sync {
    /// Read the persisted session, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage is unreadable or the document is
    /// corrupt.
    fn load(&self) -> Result<Option<PersistedSession>, StorageError>;

    /// Write the session document (login, profile update).
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be written.
    fn persist(
        &self,
        session: &PersistedSession,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Delete the session document (logout, unauthorized).
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be deleted.
    fn clear(&self) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Session storage backed by a single JSON file.
///
/// The document is small (a token and one user record), so plain
/// whole-file reads and writes are sufficient.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Create storage at the given path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn remove_file(path: &std::path::Path) -> Result<(), StorageError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let session = serde_json::from_str(&raw)?;
        Ok(Some(session))
    }

    fn persist(
        &self,
        session: &PersistedSession,
    ) -> impl Future<Output = Result<(), StorageError>> + Send {
        let path = self.path.clone();
        let session = session.clone();

        async move {
            let raw = serde_json::to_string_pretty(&session)?;
            std::fs::write(&path, raw)?;
            tracing::debug!(path = %path.display(), "Session persisted");
            Ok(())
        }
    }

    fn clear(&self) -> impl Future<Output = Result<(), StorageError>> + Send {
        let path = self.path.clone();

        async move {
            Self::remove_file(&path)?;
            tracing::debug!(path = %path.display(), "Session cleared");
            Ok(())
        }
    }
}
