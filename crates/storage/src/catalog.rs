use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

use study_core::model::RecordDraft;

/// Seed catalog compiled into the binary so the app runs with zero
/// configuration.
const EMBEDDED_CATALOG_JSON: &str = include_str!("../data/fhir_records.json");

/// Errors surfaced while fetching raw catalog data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogSourceError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] serde_json::Error),

    #[error("catalog source unavailable: {0}")]
    Unavailable(String),
}

/// A provider of the raw record collection: a JSON array of record drafts.
///
/// Sources only fetch and parse; uniqueness validation happens in the catalog
/// service so every source gets the same treatment.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the raw record drafts.
    ///
    /// # Errors
    ///
    /// Returns `CatalogSourceError` if the data cannot be read or parsed.
    async fn fetch(&self) -> Result<Vec<RecordDraft>, CatalogSourceError>;

    /// Human-readable origin of the data, for logging.
    fn origin(&self) -> String;
}

/// Parse a JSON array of record drafts.
///
/// # Errors
///
/// Returns `CatalogSourceError::Parse` on malformed JSON.
pub fn parse_catalog_json(raw: &str) -> Result<Vec<RecordDraft>, CatalogSourceError> {
    Ok(serde_json::from_str(raw)?)
}

/// Catalog source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogSource for JsonFileCatalogSource {
    async fn fetch(&self) -> Result<Vec<RecordDraft>, CatalogSourceError> {
        let raw = std::fs::read_to_string(&self.path)?;
        parse_catalog_json(&raw)
    }

    fn origin(&self) -> String {
        self.path.display().to_string()
    }
}

/// Catalog source backed by the compiled-in seed data.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalogSource;

#[async_trait]
impl CatalogSource for EmbeddedCatalogSource {
    async fn fetch(&self) -> Result<Vec<RecordDraft>, CatalogSourceError> {
        parse_catalog_json(EMBEDDED_CATALOG_JSON)
    }

    fn origin(&self) -> String {
        "embedded seed catalog".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn embedded_catalog_parses() {
        let drafts = EmbeddedCatalogSource.fetch().await.unwrap();
        assert!(drafts.len() >= 20, "seed catalog looks truncated");
        assert!(drafts.iter().any(|d| d.name == "Patient"));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_catalog_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogSourceError::Parse(_)));
    }

    #[test]
    fn drafts_accept_camel_case_fields() {
        let drafts = parse_catalog_json(
            r#"[{"name":"Patient","definition":"d","category":"Base","subCategory":"Individuals"}]"#,
        )
        .unwrap();
        assert_eq!(drafts[0].sub_category, "Individuals");
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = JsonFileCatalogSource::new("/nonexistent/records.json");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogSourceError::Io(_)));
    }
}
