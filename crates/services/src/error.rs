//! Shared error types for the services crate.

use thiserror::Error;

use storage::catalog::CatalogSourceError;
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;
use study_core::model::CatalogError;

/// Errors emitted while building a study session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no records match the selected category filters")]
    EmptySelection,
}

/// Errors emitted by `QuizSession` state transitions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("current question already has a submitted answer")]
    AlreadyAnswered,
    #[error("cannot advance before an answer is submitted")]
    NotAnswered,
}

/// Errors emitted by `FavoritesService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FavoritesError {
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogLoadError {
    #[error(transparent)]
    Source(#[from] CatalogSourceError),
    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Favorites(#[from] FavoritesError),
}
