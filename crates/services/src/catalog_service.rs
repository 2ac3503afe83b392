use std::sync::Arc;

use storage::catalog::CatalogSource;
use study_core::model::{Catalog, CatalogError};

use crate::error::CatalogLoadError;

/// Loads the record collection from its configured source and validates it
/// into a `Catalog`.
///
/// Loading happens once per app start; the UI holds the returned `Arc` for
/// the rest of the session.
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Fetch, validate, and wrap the catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogLoadError::Source` if the source cannot be read
    /// (reported distinctly from "still loading" by the UI) and
    /// `CatalogLoadError::Invalid` for empty collections, duplicate record
    /// names, or records failing field validation.
    pub async fn load(&self) -> Result<Arc<Catalog>, CatalogLoadError> {
        let drafts = self.source.fetch().await?;

        let mut records = Vec::with_capacity(drafts.len());
        for draft in drafts {
            records.push(draft.validate().map_err(CatalogError::from)?);
        }

        let catalog = Catalog::new(records)?;
        tracing::info!(
            records = catalog.len(),
            origin = %self.source.origin(),
            "catalog loaded"
        );
        Ok(Arc::new(catalog))
    }
}
