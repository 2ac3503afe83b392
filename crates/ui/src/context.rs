use std::sync::Arc;

use services::{CatalogService, Clock, FavoritesService};

/// Services the UI needs from the composition root (e.g. `crates/app`).
pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn favorites(&self) -> Arc<FavoritesService>;
    fn clock(&self) -> Clock;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    favorites: Arc<FavoritesService>,
    clock: Clock,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            favorites: app.favorites(),
            clock: app.clock(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn favorites(&self) -> Arc<FavoritesService> {
        Arc::clone(&self.favorites)
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }
}

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
