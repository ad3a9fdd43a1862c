use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored Pokemon record.
///
/// `name` is always lowercase and trimmed; `no` and `name` are each unique
/// across the collection. `id` is assigned once at creation and never
/// changes. Internal version metadata kept by the storage layer is never
/// part of this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: Uuid,
    pub no: i32,
    pub name: String,
    /// Free-form type metadata (e.g. `["electric"]`).
    pub types: serde_json::Value,
}

/// Input for creating a record.
///
/// The service normalizes `name` before the input reaches storage; callers
/// may pass any casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePokemon {
    pub no: i32,
    pub name: String,
    #[serde(default = "empty_types")]
    pub types: serde_json::Value,
}

fn empty_types() -> serde_json::Value {
    serde_json::Value::Array(Vec::new())
}

/// Partial update. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePokemon {
    pub no: Option<i32>,
    pub name: Option<String>,
    pub types: Option<serde_json::Value>,
}

/// Pagination input. Defaults for absent fields are supplied by the service
/// from its constructed configuration, not read from the environment at the
/// call site.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pagination {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Normalization applied to every name that crosses into storage.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_trims_and_lowercases() {
        assert_eq!(normalize_name("  Pikachu "), "pikachu");
        assert_eq!(normalize_name("MEWTWO"), "mewtwo");
        assert_eq!(normalize_name("bulbasaur"), "bulbasaur");
    }

    #[test]
    fn test_create_pokemon_types_default_to_empty_array() {
        let input: CreatePokemon =
            serde_json::from_value(serde_json::json!({"no": 25, "name": "pikachu"}))
                .expect("valid CreatePokemon");
        assert_eq!(input.types, serde_json::json!([]));
    }
}
