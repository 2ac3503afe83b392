use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

use study_core::model::{Record, RecordName};

use super::options::sample_options;
use super::study_set::StudySet;
use crate::error::QuizError;

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// Multiple-choice quiz over a study set.
///
/// Each question offers the correct record plus distractors sampled from the
/// full catalog pool. An answer can be submitted once per question; the
/// result stays on screen until the session advances, and advancing resamples
/// the next question's options.
#[derive(Clone)]
pub struct QuizSession {
    set: StudySet,
    pool: Vec<Record>,
    cursor: usize,
    score: u32,
    selected: Option<RecordName>,
    result_shown: bool,
    options: Vec<Record>,
    started_at: DateTime<Utc>,
    rng: StdRng,
}

impl QuizSession {
    /// Start a quiz with an OS-seeded random source.
    ///
    /// `pool` is the full record collection distractors are drawn from.
    #[must_use]
    pub fn new(set: StudySet, pool: Vec<Record>, started_at: DateTime<Utc>) -> Self {
        Self::with_rng(set, pool, started_at, StdRng::from_os_rng())
    }

    /// Start a quiz with an injected random source, for deterministic tests.
    #[must_use]
    pub fn with_rng(
        set: StudySet,
        pool: Vec<Record>,
        started_at: DateTime<Utc>,
        mut rng: StdRng,
    ) -> Self {
        let options = sample_options(&set.records()[0], &pool, &mut rng);
        Self {
            set,
            pool,
            cursor: 0,
            score: 0,
            selected: None,
            result_shown: false,
            options,
            started_at,
            rng,
        }
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The question under the cursor.
    ///
    /// # Panics
    ///
    /// Never panics: study sets are non-empty and the cursor is clamped.
    #[must_use]
    pub fn current(&self) -> &Record {
        &self.set.records()[self.cursor]
    }

    /// Answer options for the current question, in display order.
    #[must_use]
    pub fn options(&self) -> &[Record] {
        &self.options
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.set.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn selected(&self) -> Option<&RecordName> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn result_shown(&self) -> bool {
        self.result_shown
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.set.len()
    }

    /// True iff the given option is the current question's correct answer.
    #[must_use]
    pub fn is_correct(&self, option: &RecordName) -> bool {
        self.current().name() == option
    }

    /// Submit an answer for the current question.
    ///
    /// Records the selection, shows the result, and scores a point iff the
    /// chosen option matches the question by identity key. Returns whether
    /// the answer was correct.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::AlreadyAnswered` if a result is already shown for
    /// this question.
    pub fn answer(&mut self, choice: RecordName) -> Result<bool, QuizError> {
        if self.result_shown {
            return Err(QuizError::AlreadyAnswered);
        }

        let correct = self.is_correct(&choice);
        self.selected = Some(choice);
        self.result_shown = true;
        if correct {
            self.score += 1;
        }
        Ok(correct)
    }

    /// Move to the next question, clearing the selection and result and
    /// resampling its options. No-op on the last question (the cursor never
    /// wraps).
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswered` if no result is shown yet.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if !self.result_shown {
            return Err(QuizError::NotAnswered);
        }
        if !self.has_next() {
            return Ok(());
        }

        self.cursor += 1;
        self.selected = None;
        self.result_shown = false;
        self.options = sample_options(&self.set.records()[self.cursor], &self.pool, &mut self.rng);
        Ok(())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("total", &self.set.len())
            .field("cursor", &self.cursor)
            .field("score", &self.score)
            .field("result_shown", &self.result_shown)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
