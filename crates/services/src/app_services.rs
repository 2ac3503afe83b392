use std::sync::Arc;

use storage::catalog::CatalogSource;
use storage::repository::Storage;

use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::favorites_service::FavoritesService;

/// Assembles the app-facing services over a storage backend and a catalog
/// source.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    favorites: Arc<FavoritesService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and load the persisted
    /// favorites once.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or the initial
    /// favorites load fails.
    pub async fn new_sqlite(
        db_url: &str,
        source: Arc<dyn CatalogSource>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::with_storage(storage, source).await
    }

    /// Build services over an existing storage backend (used by tests with
    /// the in-memory repository).
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the initial favorites load fails.
    pub async fn with_storage(
        storage: Storage,
        source: Arc<dyn CatalogSource>,
    ) -> Result<Self, AppServicesError> {
        let favorites = Arc::new(FavoritesService::new(Arc::clone(&storage.favorites)));
        favorites.load().await?;

        Ok(Self {
            catalog: Arc::new(CatalogService::new(source)),
            favorites,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn favorites(&self) -> Arc<FavoritesService> {
        Arc::clone(&self.favorites)
    }
}
