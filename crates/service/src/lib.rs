//! Service layer for pokedex
//!
//! Centralizes business logic between the HTTP handlers and storage:
//! lookup-term resolution, name normalization, duplicate-key translation,
//! and the seed import routine.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod error;
mod lookup;
mod pokemon_service;
mod seed_service;

#[cfg(test)]
mod memory_store;

pub use error::ServiceError;
pub use lookup::Lookup;
pub use pokemon_service::{BulkInsertOutcome, PokemonService};
pub use seed_service::SeedService;
