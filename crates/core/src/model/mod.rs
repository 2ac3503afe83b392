mod catalog;
mod favorites;
mod record;
mod selection;

pub use catalog::{Catalog, CatalogError};
pub use favorites::{FavoriteChange, Favorites};
pub use record::{Record, RecordDraft, RecordName, RecordValidationError};
pub use selection::{Selection, SelectionFilter};
