use std::sync::{Arc, Mutex};

use storage::repository::{FavoritesRepository, StorageError};
use study_core::model::{FavoriteChange, Favorites, Record, RecordName};

use crate::error::FavoritesError;

/// Owns the in-memory favorites set and mirrors every mutation to the
/// persistence layer before the mutating call returns, so the stored value
/// never reflects an older state than memory. Actions are dispatched one at
/// a time by the UI; the lock exists to make the service `Send + Sync`, not
/// to order writers.
pub struct FavoritesService {
    repo: Arc<dyn FavoritesRepository>,
    favorites: Mutex<Favorites>,
}

impl FavoritesService {
    #[must_use]
    pub fn new(repo: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            repo,
            favorites: Mutex::new(Favorites::new()),
        }
    }

    /// Read the persisted set once at startup. Absent and corrupt stored
    /// values both come back as an empty set from the repository.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError` on connection-level storage failures.
    pub async fn load(&self) -> Result<usize, FavoritesError> {
        let records = self.repo.load_favorites().await?;
        let loaded = Favorites::from_records(records);
        let count = loaded.len();

        let mut guard = self.lock()?;
        *guard = loaded;
        drop(guard);

        tracing::info!(count, "favorites loaded");
        Ok(count)
    }

    #[must_use]
    pub fn is_favorite(&self, name: &RecordName) -> bool {
        self.lock()
            .map(|guard| guard.is_favorite(name))
            .unwrap_or(false)
    }

    /// Snapshot of the current set, in insertion order.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.lock()
            .map(|guard| guard.records().to_vec())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Star or unstar a record, then persist the full set.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError` if the write fails. The in-memory mutation is
    /// kept either way; the next successful write repairs the store.
    pub async fn toggle(&self, record: Record) -> Result<FavoriteChange, FavoritesError> {
        let name = record.name().clone();
        let (change, snapshot) = {
            let mut guard = self.lock()?;
            let change = guard.toggle(record);
            (change, guard.records().to_vec())
        };

        tracing::debug!(record = %name, ?change, "favorite toggled");
        self.persist(&snapshot).await?;
        Ok(change)
    }

    /// Remove every favorite, then persist the empty set.
    ///
    /// # Errors
    ///
    /// Returns `FavoritesError` if the write fails.
    pub async fn clear(&self) -> Result<(), FavoritesError> {
        {
            let mut guard = self.lock()?;
            guard.clear();
        }
        self.persist(&[]).await
    }

    async fn persist(&self, snapshot: &[Record]) -> Result<(), FavoritesError> {
        if let Err(err) = self.repo.save_favorites(snapshot).await {
            tracing::error!(error = %err, "failed to persist favorites");
            return Err(err.into());
        }
        Ok(())
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Favorites>, FavoritesError> {
        self.favorites
            .lock()
            .map_err(|e| FavoritesError::Storage(StorageError::Connection(e.to_string())))
    }
}
