use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use study_core::model::Record;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for the persisted favorites set.
///
/// The set is stored as one serialized sequence under a single fixed key:
/// every save replaces the stored value, and a load returns the last saved
/// sequence. A missing or unreadable stored value loads as an empty sequence
/// rather than an error, so a corrupt store can never take the app down.
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    /// Read the persisted favorites sequence.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` only for connection-level failures; absent or
    /// corrupt values yield `Ok(Vec::new())`.
    async fn load_favorites(&self) -> Result<Vec<Record>, StorageError>;

    /// Replace the persisted favorites sequence.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be written.
    async fn save_favorites(&self, records: &[Record]) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    favorites: Arc<Mutex<Vec<Record>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoritesRepository for InMemoryRepository {
    async fn load_favorites(&self) -> Result<Vec<Record>, StorageError> {
        let guard = self
            .favorites
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.clone())
    }

    async fn save_favorites(&self, records: &[Record]) -> Result<(), StorageError> {
        let mut guard = self
            .favorites
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        *guard = records.to_vec();
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub favorites: Arc<dyn FavoritesRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let favorites: Arc<dyn FavoritesRepository> = Arc::new(repo);
        Self { favorites }
    }
}
