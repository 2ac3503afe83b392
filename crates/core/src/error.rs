use thiserror::Error;

use crate::model::{CatalogError, RecordValidationError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    RecordValidation(#[from] RecordValidationError),
}
