use std::collections::HashSet;

use thiserror::Error;

use crate::model::record::{Record, RecordName, RecordValidationError};
use crate::model::selection::Selection;

/// The full, validated record collection loaded once at startup.
///
/// Record names are required to be unique: favorites matching and quiz
/// answers compare records by name, so a duplicate would silently alias two
/// different facts. Duplicates are rejected at load time rather than tolerated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Validate a record collection into a catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if no records are supplied and
    /// `CatalogError::DuplicateName` if two records share an identity key.
    pub fn new(records: Vec<Record>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen: HashSet<&RecordName> = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.name()) {
                return Err(CatalogError::DuplicateName {
                    name: record.name().clone(),
                });
            }
        }

        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &RecordName) -> Option<&Record> {
        self.records.iter().find(|record| record.name() == name)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| seen.insert(record.category()))
            .map(|record| record.category().to_string())
            .collect()
    }

    /// Distinct sub-categories of the given category, in first-seen order.
    ///
    /// Derived from records already filtered by the category, so every choice
    /// offered to the user is valid for it.
    #[must_use]
    pub fn sub_categories(&self, category: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|record| record.category() == category)
            .filter(|record| seen.insert(record.sub_category()))
            .map(|record| record.sub_category().to_string())
            .collect()
    }

    /// The ordered subsequence of records matching the selection.
    #[must_use]
    pub fn filter(&self, selection: &Selection) -> Vec<Record> {
        self.records
            .iter()
            .filter(|record| selection.matches(record.category(), record.sub_category()))
            .cloned()
            .collect()
    }
}

//
// ─── CATALOG ERRORS ────────────────────────────────────────────────────────────
//

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog contains no records")]
    Empty,

    #[error("duplicate record name: {name}")]
    DuplicateName { name: RecordName },

    #[error(transparent)]
    Record(#[from] RecordValidationError),
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
