//! HTTP API server for pokedex.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]

pub mod api_error;
mod api_types;
mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;

use pokedex_service::{PokemonService, SeedService};

pub use api_error::ApiError;
pub use api_types::{
    CreatePokemonRequest, DeleteResponse, PaginationQuery, SeedResponse, UpdatePokemonRequest,
};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    pub pokemon_service: Arc<PokemonService>,
    pub seed_service: Arc<SeedService>,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/pokemon", post(handlers::pokemon::create).get(handlers::pokemon::list))
        .route(
            "/api/pokemon/{term}",
            get(handlers::pokemon::get_one)
                .patch(handlers::pokemon::update)
                .delete(handlers::pokemon::remove),
        )
        .route("/api/seed", post(handlers::seed::run_seed))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}
