mod flashcards;
mod options;
mod quiz;
mod shuffle;
mod study_set;

pub use flashcards::FlashcardSession;
pub use options::{MAX_OPTIONS, sample_options};
pub use quiz::QuizSession;
pub use shuffle::shuffle;
pub use study_set::{StudySet, StudySetBuilder};
