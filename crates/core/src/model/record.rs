use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── RECORD NAME ───────────────────────────────────────────────────────────────
//

/// Validated record name (trimmed, non-empty). This is the identity key for
/// every record in the catalog: two records are the same record iff their
/// names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordName(String);

impl RecordName {
    /// Create a validated record name.
    ///
    /// # Errors
    ///
    /// Returns `RecordValidationError::EmptyName` if the name is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RecordValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RecordValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecordName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RecordName {
    type Err = RecordValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

//
// ─── RECORD TYPES ──────────────────────────────────────────────────────────────
//

/// Unvalidated record data as read from a catalog file or the persistence
/// layer. Field names match the serialized form (`subCategory` stays camel
/// case so previously stored favorites deserialize unchanged).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub name: String,
    pub definition: String,
    pub category: String,
    pub sub_category: String,
}

impl RecordDraft {
    /// Validate the draft into a `Record`.
    ///
    /// # Errors
    ///
    /// Returns `RecordValidationError` if the name, definition, or category
    /// is empty after trimming.
    pub fn validate(self) -> Result<Record, RecordValidationError> {
        let name = RecordName::new(self.name)?;
        let definition = self.definition.trim().to_string();
        if definition.is_empty() {
            return Err(RecordValidationError::EmptyDefinition { name });
        }
        let category = self.category.trim().to_string();
        if category.is_empty() {
            return Err(RecordValidationError::EmptyCategory { name });
        }
        Ok(Record {
            name,
            definition,
            category,
            sub_category: self.sub_category.trim().to_string(),
        })
    }
}

/// One domain fact: a named resource, its definition, and its two-level
/// category classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    name: RecordName,
    definition: String,
    category: String,
    sub_category: String,
}

impl Record {
    #[must_use]
    pub fn name(&self) -> &RecordName {
        &self.name
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn sub_category(&self) -> &str {
        &self.sub_category
    }
}

//
// ─── RECORD VALIDATION ERRORS ──────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RecordValidationError {
    #[error("record name cannot be empty")]
    EmptyName,

    #[error("record {name} has an empty definition")]
    EmptyDefinition { name: RecordName },

    #[error("record {name} has an empty category")]
    EmptyCategory { name: RecordName },
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
