//! Storage-specific error type for the in-memory store.

use polystat_domain::error::PolystatError;

/// Errors originating from the in-memory storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A writer panicked while holding the store lock.
    #[error("polygon store lock poisoned")]
    Poisoned,
}

impl From<StorageError> for PolystatError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
