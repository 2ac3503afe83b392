use chrono::{DateTime, Utc};

use study_core::model::Record;

use super::study_set::StudySet;

//
// ─── FLASHCARD SESSION ─────────────────────────────────────────────────────────
//

/// Steps through a study set one card at a time.
///
/// The cursor is clamped to [0, len−1] with no wraparound; moving it resets
/// the card to its front face. Flipping toggles the face without moving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardSession {
    set: StudySet,
    cursor: usize,
    flipped: bool,
    started_at: DateTime<Utc>,
}

impl FlashcardSession {
    /// Start a flashcard session over a non-empty study set.
    ///
    /// `started_at` should come from the services layer clock to keep time
    /// deterministic.
    #[must_use]
    pub fn new(set: StudySet, started_at: DateTime<Utc>) -> Self {
        Self {
            set,
            cursor: 0,
            flipped: false,
            started_at,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The card under the cursor.
    ///
    /// # Panics
    ///
    /// Never panics: study sets are non-empty and the cursor is clamped.
    #[must_use]
    pub fn current(&self) -> &Record {
        &self.set.records()[self.cursor]
    }

    /// Zero-based cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.set.len()
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.set.len()
    }

    /// Toggle between front and back of the current card.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Move to the next card and show its front. No-op on the last card.
    pub fn next(&mut self) {
        if self.has_next() {
            self.cursor += 1;
            self.flipped = false;
        }
    }

    /// Move to the previous card and show its front. No-op on the first card.
    pub fn prev(&mut self) {
        if self.has_prev() {
            self.cursor -= 1;
            self.flipped = false;
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
