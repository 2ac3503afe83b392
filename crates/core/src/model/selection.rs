use serde::{Deserialize, Serialize};

/// A single filter selector: either the wildcard ("All") or an exact match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionFilter {
    #[default]
    All,
    Only(String),
}

impl SelectionFilter {
    /// Parse a selector from its user-facing value, where `"All"` is the
    /// wildcard sentinel.
    #[must_use]
    pub fn from_choice(value: &str) -> Self {
        if value == Self::WILDCARD {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// The user-facing wildcard label.
    pub const WILDCARD: &'static str = "All";

    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The user-facing value for this selector.
    #[must_use]
    pub fn as_choice(&self) -> &str {
        match self {
            Self::All => Self::WILDCARD,
            Self::Only(value) => value,
        }
    }
}

/// Category and sub-category selectors for building a study set.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub category: SelectionFilter,
    pub sub_category: SelectionFilter,
}

impl Selection {
    /// Selection matching the whole catalog.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn new(category: SelectionFilter, sub_category: SelectionFilter) -> Self {
        Self {
            category,
            sub_category,
        }
    }

    /// True iff a record passes both selectors.
    #[must_use]
    pub fn matches(&self, category: &str, sub_category: &str) -> bool {
        self.category.matches(category) && self.sub_category.matches(sub_category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_matches_everything() {
        let selection = Selection::all();
        assert!(selection.matches("Base", "Individuals"));
        assert!(selection.matches("Clinical", "Diagnostics"));
    }

    #[test]
    fn exact_filters_match_both_levels() {
        let selection = Selection::new(
            SelectionFilter::Only("Base".to_string()),
            SelectionFilter::Only("Individuals".to_string()),
        );
        assert!(selection.matches("Base", "Individuals"));
        assert!(!selection.matches("Base", "Entities"));
        assert!(!selection.matches("Clinical", "Individuals"));
    }

    #[test]
    fn from_choice_recognizes_the_sentinel() {
        assert!(SelectionFilter::from_choice("All").is_wildcard());
        assert_eq!(
            SelectionFilter::from_choice("Base"),
            SelectionFilter::Only("Base".to_string())
        );
    }

    #[test]
    fn as_choice_round_trips() {
        for raw in ["All", "Financial"] {
            assert_eq!(SelectionFilter::from_choice(raw).as_choice(), raw);
        }
    }
}
