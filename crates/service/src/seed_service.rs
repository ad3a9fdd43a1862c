use std::sync::Arc;

use pokedex_catalog::{entry_no, CatalogSource};
use pokedex_core::CreatePokemon;

use crate::error::ServiceError;
use crate::pokemon_service::{BulkInsertOutcome, PokemonService};

/// Number of catalog entries requested per seed run.
const SEED_PAGE_LIMIT: u32 = 1000;

/// Imports the remote catalog into the store, replacing whatever was there.
pub struct SeedService {
    pokemon: Arc<PokemonService>,
    catalog: Arc<dyn CatalogSource>,
}

impl SeedService {
    #[must_use]
    pub fn new(pokemon: Arc<PokemonService>, catalog: Arc<dyn CatalogSource>) -> Self {
        Self { pokemon, catalog }
    }

    /// Resets the collection and reloads it from the catalog.
    ///
    /// Strictly sequential: the reset completes before the fetch starts, and
    /// insertion happens only after the fetch resolves. A fetch failure
    /// (including a malformed entry URL) propagates to the caller;
    /// duplicate-key failures during insertion are reported in the returned
    /// outcome instead.
    pub async fn populate(&self) -> Result<BulkInsertOutcome, ServiceError> {
        let removed = self.pokemon.delete_all().await?;
        tracing::info!(removed, "cleared collection before reseed");

        let page = self.catalog.fetch_page(SEED_PAGE_LIMIT, 0).await?;

        let mut batch = Vec::with_capacity(page.results.len());
        for entry in &page.results {
            batch.push(CreatePokemon {
                no: entry_no(&entry.url)?,
                name: entry.name.to_lowercase(),
                types: serde_json::Value::Array(Vec::new()),
            });
        }

        let outcome = self.pokemon.bulk_insert(batch).await?;
        tracing::info!(success = outcome.success(), "seed import finished");
        Ok(outcome)
    }
}
