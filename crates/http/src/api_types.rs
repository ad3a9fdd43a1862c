//! Request and response types for the HTTP API.

use pokedex_core::{CreatePokemon, Pagination, UpdatePokemon, MAX_PAGE_LIMIT};
use pokedex_service::BulkInsertOutcome;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePokemonRequest {
    pub no: i32,
    pub name: String,
    #[serde(default)]
    pub types: Option<serde_json::Value>,
}

impl CreatePokemonRequest {
    /// Minimal field validation before the input reaches the service.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".to_owned());
        }
        if self.no < 1 {
            return Err("no must be a positive integer".to_owned());
        }
        Ok(())
    }

    pub fn into_input(self) -> CreatePokemon {
        CreatePokemon {
            no: self.no,
            name: self.name,
            types: self.types.unwrap_or_else(|| serde_json::Value::Array(Vec::new())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePokemonRequest {
    pub no: Option<i32>,
    pub name: Option<String>,
    pub types: Option<serde_json::Value>,
}

impl UpdatePokemonRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err("name must not be empty".to_owned());
        }
        if self.no.is_some_and(|no| no < 1) {
            return Err("no must be a positive integer".to_owned());
        }
        Ok(())
    }

    pub fn into_patch(self) -> UpdatePokemon {
        UpdatePokemon { no: self.no, name: self.name, types: self.types }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl PaginationQuery {
    /// Caps the caller-supplied limit; absent values stay absent so the
    /// service applies its constructed default.
    pub fn into_pagination(self) -> Pagination {
        Pagination {
            limit: self.limit.map(|l| l.clamp(1, MAX_PAGE_LIMIT)),
            offset: self.offset.map(|o| o.max(0)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_ids: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<BulkInsertOutcome> for SeedResponse {
    fn from(outcome: BulkInsertOutcome) -> Self {
        match outcome {
            BulkInsertOutcome::Inserted { inserted_ids } => {
                Self { success: true, inserted_ids: Some(inserted_ids), error: None }
            },
            BulkInsertOutcome::DuplicateKey { constraint, message } => Self {
                success: false,
                inserted_ids: None,
                error: Some(format!("duplicate key on {constraint}: {message}")),
            },
        }
    }
}
