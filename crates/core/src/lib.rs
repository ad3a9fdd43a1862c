//! Core types for the pokedex backend
//!
//! This crate contains domain types and configuration shared across all
//! other crates.

mod config;
mod pokemon;

pub use config::*;
pub use pokemon::*;
