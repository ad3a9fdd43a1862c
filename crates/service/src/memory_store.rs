//! In-memory `PokemonStore` used by the service tests.
//!
//! Mirrors the real backend's observable behavior: unique `no`/`name`
//! violations that report the violated constraint and key detail,
//! ascending-`no` listing, partial updates returning the post-update row,
//! and all-or-nothing batch inserts.

use async_trait::async_trait;
use pokedex_core::{CreatePokemon, Pokemon, UpdatePokemon};
use pokedex_storage::{PokemonStore, StorageError};
use tokio::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
pub(crate) struct MemoryStore {
    records: Mutex<Vec<Pokemon>>,
}

impl MemoryStore {
    pub(crate) async fn snapshot(&self) -> Vec<Pokemon> {
        self.records.lock().await.clone()
    }

    fn conflict(
        records: &[Pokemon],
        no: i32,
        name: &str,
        skip: Option<Uuid>,
    ) -> Option<StorageError> {
        for existing in records {
            if skip == Some(existing.id) {
                continue;
            }
            if existing.no == no {
                return Some(StorageError::Duplicate {
                    constraint: "pokemons_no_key".to_owned(),
                    message: format!("Key (no)=({no}) already exists."),
                });
            }
            if existing.name == name {
                return Some(StorageError::Duplicate {
                    constraint: "pokemons_name_key".to_owned(),
                    message: format!("Key (name)=({name}) already exists."),
                });
            }
        }
        None
    }
}

#[async_trait]
impl PokemonStore for MemoryStore {
    async fn insert(&self, input: &CreatePokemon) -> Result<Pokemon, StorageError> {
        let mut records = self.records.lock().await;
        if let Some(err) = Self::conflict(&records, input.no, &input.name, None) {
            return Err(err);
        }
        let pokemon = Pokemon {
            id: Uuid::new_v4(),
            no: input.no,
            name: input.name.clone(),
            types: input.types.clone(),
        };
        records.push(pokemon.clone());
        Ok(pokemon)
    }

    async fn find_by_no(&self, no: i32) -> Result<Option<Pokemon>, StorageError> {
        Ok(self.records.lock().await.iter().find(|p| p.no == no).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pokemon>, StorageError> {
        Ok(self.records.lock().await.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Pokemon>, StorageError> {
        Ok(self.records.lock().await.iter().find(|p| p.name == name).cloned())
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Pokemon>, StorageError> {
        let mut records = self.records.lock().await.clone();
        records.sort_by_key(|p| p.no);
        Ok(records
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(0))
            .take(usize::try_from(limit).unwrap_or(0))
            .collect())
    }

    async fn update(&self, id: Uuid, patch: &UpdatePokemon) -> Result<Pokemon, StorageError> {
        let mut records = self.records.lock().await;
        let position = records
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| StorageError::NotFound { entity: "pokemon", id: id.to_string() })?;

        let mut updated = records[position].clone();
        if let Some(no) = patch.no {
            updated.no = no;
        }
        if let Some(ref name) = patch.name {
            updated.name = name.clone();
        }
        if let Some(ref types) = patch.types {
            updated.types = types.clone();
        }

        if let Some(err) = Self::conflict(&records, updated.no, &updated.name, Some(id)) {
            return Err(err);
        }
        records[position] = updated.clone();
        Ok(updated)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut records = self.records.lock().await;
        let before = records.len();
        records.retain(|p| p.id != id);
        Ok(records.len() < before)
    }

    async fn delete_all(&self) -> Result<u64, StorageError> {
        let mut records = self.records.lock().await;
        let removed = records.len() as u64;
        records.clear();
        Ok(removed)
    }

    async fn insert_many(&self, inputs: &[CreatePokemon]) -> Result<Vec<Uuid>, StorageError> {
        let mut records = self.records.lock().await;
        // Stage the batch first so a conflict anywhere inserts nothing,
        // matching the single-statement semantics of the real backend.
        let mut staged: Vec<Pokemon> = Vec::with_capacity(inputs.len());
        for input in inputs {
            let conflict = Self::conflict(&records, input.no, &input.name, None)
                .or_else(|| Self::conflict(&staged, input.no, &input.name, None));
            if let Some(err) = conflict {
                return Err(err);
            }
            staged.push(Pokemon {
                id: Uuid::new_v4(),
                no: input.no,
                name: input.name.clone(),
                types: input.types.clone(),
            });
        }
        let ids = staged.iter().map(|p| p.id).collect();
        records.extend(staged);
        Ok(ids)
    }
}
