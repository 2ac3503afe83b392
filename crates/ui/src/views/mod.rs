mod components;
mod favorites;
mod flashcards;
mod home;
mod quiz;
pub mod shell;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use favorites::FavoritesView;
pub use flashcards::FlashcardsView;
pub use home::HomeView;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
