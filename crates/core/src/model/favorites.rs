use crate::model::record::{Record, RecordName};

/// Result of toggling a record's favorite status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added,
    Removed,
}

/// Insertion-ordered set of starred records, keyed by record name.
///
/// Membership is by identity key only: the stored record payload is whatever
/// was passed to the `toggle` that added it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Favorites {
    records: Vec<Record>,
}

impl Favorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the set from a persisted sequence. Later duplicates of the
    /// same name are dropped, keeping the first occurrence.
    #[must_use]
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut favorites = Self::new();
        for record in records {
            if !favorites.is_favorite(record.name()) {
                favorites.records.push(record);
            }
        }
        favorites
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
    pub fn is_favorite(&self, name: &RecordName) -> bool {
        self.records.iter().any(|record| record.name() == name)
    }

    /// Add the record if absent, remove it if present.
    ///
    /// Toggling twice with the same record leaves membership unchanged.
    pub fn toggle(&mut self, record: Record) -> FavoriteChange {
        if let Some(index) = self
            .records
            .iter()
            .position(|existing| existing.name() == record.name())
        {
            self.records.remove(index);
            FavoriteChange::Removed
        } else {
            self.records.push(record);
            FavoriteChange::Added
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
