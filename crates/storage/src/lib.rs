//! Storage layer for pokedex
//!
//! PostgreSQL store behind the `PokemonStore` trait. Uniqueness of `no` and
//! `name` is enforced by the database; violations surface as a typed
//! duplicate-key error rather than an opaque driver failure.

mod error;
mod migrations;
mod pg;
mod traits;

pub use error::StorageError;
pub use pg::PgStorage;
pub use traits::PokemonStore;
