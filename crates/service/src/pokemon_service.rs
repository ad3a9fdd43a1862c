use std::sync::Arc;

use pokedex_core::{normalize_name, CreatePokemon, Pagination, Pokemon, UpdatePokemon};
use pokedex_storage::{PokemonStore, StorageError};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::lookup::{Lookup, RESOLVERS};

/// Entity repository facade over the Pokemon store.
///
/// Owns the normalization, lookup-resolution, and duplicate-key translation
/// rules. The page-size default is fixed at construction instead of read
/// from the environment at call sites.
pub struct PokemonService {
    store: Arc<dyn PokemonStore>,
    default_limit: i64,
}

/// Result of a batched insert. A duplicate-key failure is captured here
/// instead of raised, so the seed importer can report it without aborting
/// its caller.
#[derive(Debug, Clone)]
pub enum BulkInsertOutcome {
    Inserted { inserted_ids: Vec<Uuid> },
    DuplicateKey { constraint: String, message: String },
}

impl BulkInsertOutcome {
    #[must_use]
    pub fn success(&self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

impl PokemonService {
    #[must_use]
    pub fn new(store: Arc<dyn PokemonStore>, default_limit: i64) -> Self {
        Self { store, default_limit }
    }

    /// Creates a record with the name lowercased and trimmed.
    pub async fn create(&self, mut input: CreatePokemon) -> Result<Pokemon, ServiceError> {
        input.name = normalize_name(&input.name);
        Ok(self.store.insert(&input).await?)
    }

    /// Records ordered by ascending `no`, bounded by the caller's pagination
    /// or this service's constructed defaults.
    pub async fn find_all(&self, pagination: Pagination) -> Result<Vec<Pokemon>, ServiceError> {
        let limit = pagination.limit.unwrap_or(self.default_limit);
        let offset = pagination.offset.unwrap_or(0);
        Ok(self.store.list(limit, offset).await?)
    }

    /// Resolves a free-form term to a single record.
    ///
    /// Strategies run in order (number, id, name); the first filter that
    /// matches a record wins and later strategies are skipped. A term that
    /// parses as an id but matches nothing falls through to name matching.
    pub async fn find_one(&self, term: &str) -> Result<Pokemon, ServiceError> {
        for resolve in RESOLVERS {
            let Some(filter) = resolve(term) else { continue };
            let found = match filter {
                Lookup::ByNo(no) => self.store.find_by_no(no).await?,
                Lookup::ById(id) => self.store.find_by_id(id).await?,
                Lookup::ByName(ref name) => self.store.find_by_name(name).await?,
            };
            if let Some(pokemon) = found {
                return Ok(pokemon);
            }
        }
        Err(ServiceError::NotFound { term: term.to_owned() })
    }

    /// Resolves `term`, applies the partial update, and returns the
    /// post-update row as stored.
    pub async fn update(
        &self,
        term: &str,
        mut patch: UpdatePokemon,
    ) -> Result<Pokemon, ServiceError> {
        let current = self.find_one(term).await?;
        if let Some(name) = patch.name.take() {
            patch.name = Some(normalize_name(&name));
        }
        Ok(self.store.update(current.id, &patch).await?)
    }

    /// Deletes by id only; lookup terms are not accepted here.
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.store.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(ServiceError::NotFound { term: id.to_string() })
        }
    }

    /// Removes every record. Succeeds on an already-empty collection.
    pub async fn delete_all(&self) -> Result<u64, ServiceError> {
        Ok(self.store.delete_all().await?)
    }

    /// Inserts the whole batch after normalizing every name. A duplicate
    /// key anywhere in the batch is captured in the outcome; any other
    /// storage failure is raised.
    pub async fn bulk_insert(
        &self,
        mut inputs: Vec<CreatePokemon>,
    ) -> Result<BulkInsertOutcome, ServiceError> {
        for input in &mut inputs {
            input.name = normalize_name(&input.name);
        }
        match self.store.insert_many(&inputs).await {
            Ok(ids) => Ok(BulkInsertOutcome::Inserted { inserted_ids: ids }),
            Err(StorageError::Duplicate { constraint, message }) => {
                tracing::warn!(%constraint, "bulk insert aborted by duplicate key");
                Ok(BulkInsertOutcome::DuplicateKey { constraint, message })
            },
            Err(e) => Err(e.into()),
        }
    }
}
