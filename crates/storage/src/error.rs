//! Typed error enum for the storage layer.
//!
//! Callers match on explicit failure kinds (not found, duplicate key,
//! database failure) instead of probing driver errors for shape.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for an expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique-constraint violation on `no` or `name`. Carries the violated
    /// constraint and the engine's key detail (offending field and value).
    #[error("duplicate key on {constraint}: {message}")]
    Duplicate { constraint: String, message: String },

    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Migration failure at startup.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient (worth retrying).
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }

    /// Whether this error is a unique-constraint violation.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate { .. })
    }

    /// Offending column of a duplicate-key error, derived from the violated
    /// constraint name (`pokemons_no_key` → `no`).
    #[must_use]
    pub fn duplicate_field(&self) -> Option<&str> {
        match self {
            Self::Duplicate { constraint, .. } => {
                constraint.strip_prefix("pokemons_").and_then(|rest| rest.strip_suffix("_key"))
            },
            _ => None,
        }
    }
}

/// Maps driver errors into the typed variants above:
///
/// - `RowNotFound` → `NotFound` (generic; callers remap with entity context)
/// - SQLSTATE 23505 → `Duplicate`, violated constraint and key detail attached
/// - everything else → `Database`
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound { entity: "row", id: "unknown".into() },
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "23505") => {
                let message = db_err
                    .try_downcast_ref::<sqlx::postgres::PgDatabaseError>()
                    .and_then(sqlx::postgres::PgDatabaseError::detail)
                    .unwrap_or_else(|| db_err.message())
                    .to_owned();
                Self::Duplicate {
                    constraint: db_err.constraint().unwrap_or("unknown").to_owned(),
                    message,
                }
            },
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = StorageError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::NotFound { .. }));
        assert!(!err.is_duplicate());
    }

    #[test]
    fn test_duplicate_field_from_constraint_name() {
        let err = StorageError::Duplicate {
            constraint: "pokemons_name_key".to_owned(),
            message: "Key (name)=(pikachu) already exists.".to_owned(),
        };
        assert!(err.is_duplicate());
        assert_eq!(err.duplicate_field(), Some("name"));
    }

    #[test]
    fn test_duplicate_field_unknown_constraint() {
        let err = StorageError::Duplicate {
            constraint: "unknown".to_owned(),
            message: String::new(),
        };
        assert_eq!(err.duplicate_field(), None);
    }

    #[test]
    fn test_duplicate_field_absent_on_other_variants() {
        let err = StorageError::NotFound { entity: "pokemon", id: "25".to_owned() };
        assert_eq!(err.duplicate_field(), None);
    }
}
