#![forbid(unsafe_code)]

pub mod app_services;
pub mod catalog_service;
pub mod error;
pub mod favorites_service;
pub mod remote;
pub mod sessions;

pub use study_core::Clock;

pub use app_services::AppServices;
pub use catalog_service::CatalogService;
pub use error::{AppServicesError, CatalogLoadError, FavoritesError, QuizError, SessionError};
pub use favorites_service::FavoritesService;
pub use remote::RemoteCatalogSource;

pub use sessions::{
    FlashcardSession, MAX_OPTIONS, QuizSession, StudySet, StudySetBuilder, sample_options, shuffle,
};
