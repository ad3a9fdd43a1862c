//! Typed error enum for the service layer.
//!
//! Unifies storage and catalog failures into a single error type so callers
//! match on explicit failure kinds instead of downcasting opaque boxes.

use pokedex_catalog::CatalogError;
use pokedex_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and catalog failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// No record matched the caller's lookup term or id.
    #[error("pokemon with id, name or no \"{term}\" not found")]
    NotFound { term: String },

    /// Storage operation failed (duplicate key, connection, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Remote catalog fetch failed or returned malformed data. Propagated
    /// unmodified to the caller of the seed routine.
    #[error("catalog: {0}")]
    Catalog(#[from] CatalogError),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Storage(StorageError::NotFound { .. })
        )
    }

    /// Whether this error represents a duplicate-key conflict.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}
