//! Store trait implemented by the PostgreSQL backend (and, in tests, by an
//! in-memory fake).

use async_trait::async_trait;
use pokedex_core::{CreatePokemon, Pokemon, UpdatePokemon};
use uuid::Uuid;

use crate::StorageError;

#[async_trait]
pub trait PokemonStore: Send + Sync {
    /// Inserts a single record and returns it as stored.
    async fn insert(&self, input: &CreatePokemon) -> Result<Pokemon, StorageError>;

    async fn find_by_no(&self, no: i32) -> Result<Option<Pokemon>, StorageError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pokemon>, StorageError>;

    /// Exact match; callers are expected to normalize the name first.
    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, StorageError>;

    /// Records ordered by ascending `no`.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Pokemon>, StorageError>;

    /// Applies a partial update and returns the post-update row.
    async fn update(&self, id: Uuid, patch: &UpdatePokemon) -> Result<Pokemon, StorageError>;

    /// Returns `false` when no row matched.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StorageError>;

    /// Removes every record; returns the number removed. An empty table is
    /// not an error.
    async fn delete_all(&self) -> Result<u64, StorageError>;

    /// Inserts the whole batch in one statement. A failure anywhere in the
    /// batch leaves the table unchanged (all-or-nothing).
    async fn insert_many(&self, inputs: &[CreatePokemon]) -> Result<Vec<Uuid>, StorageError>;
}
