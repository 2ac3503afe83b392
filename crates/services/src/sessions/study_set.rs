use rand::Rng;

use study_core::model::{Catalog, Record, Selection};

use super::shuffle::shuffle;
use crate::error::SessionError;

/// An ordered, randomized, non-empty set of records for one study session.
///
/// Built once when a session starts and read-only afterwards; the catalog
/// itself is never reordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySet {
    records: Vec<Record>,
}

impl StudySet {
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// A study set is never empty; builders refuse to construct one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }
}

/// Builds a randomized study set from the catalog and a selection.
pub struct StudySetBuilder<'a> {
    catalog: &'a Catalog,
}

impl<'a> StudySetBuilder<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Filter the catalog by the selection and shuffle the result with the
    /// thread-local random source.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySelection` when no record matches, so the
    /// caller can keep the user on the selection screen.
    pub fn build(&self, selection: &Selection) -> Result<StudySet, SessionError> {
        self.build_with_rng(selection, &mut rand::rng())
    }

    /// Same as [`build`](Self::build) with an injected random source, for
    /// deterministic tests.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::EmptySelection` when no record matches.
    pub fn build_with_rng<R: Rng + ?Sized>(
        &self,
        selection: &Selection,
        rng: &mut R,
    ) -> Result<StudySet, SessionError> {
        let mut records = self.catalog.filter(selection);
        if records.is_empty() {
            return Err(SessionError::EmptySelection);
        }
        shuffle(&mut records, rng);
        Ok(StudySet { records })
    }
}
