//! Remote catalog client for pokedex
//!
//! Fetches paginated Pokemon listings from a PokeAPI-compatible endpoint.
//! The `CatalogSource` trait is the seam the seed importer depends on, so
//! import logic is testable without a network.

mod client;
mod error;
mod types;

pub use client::{CatalogClient, CatalogSource};
pub use error::CatalogError;
pub use types::{entry_no, CatalogEntry, CatalogPage};
