use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use pokedex_core::Pokemon;

use crate::api_error::ApiError;
use crate::api_types::{
    CreatePokemonRequest, DeleteResponse, PaginationQuery, UpdatePokemonRequest,
};
use crate::AppState;

pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreatePokemonRequest>,
) -> Result<(StatusCode, Json<Pokemon>), ApiError> {
    req.validate().map_err(ApiError::BadRequest)?;
    let pokemon = state.pokemon_service.create(req.into_input()).await?;
    Ok((StatusCode::CREATED, Json(pokemon)))
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<Vec<Pokemon>>, ApiError> {
    let pokemons = state.pokemon_service.find_all(query.into_pagination()).await?;
    Ok(Json(pokemons))
}

pub async fn get_one(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
) -> Result<Json<Pokemon>, ApiError> {
    let pokemon = state.pokemon_service.find_one(&term).await?;
    Ok(Json(pokemon))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    Path(term): Path<String>,
    Json(req): Json<UpdatePokemonRequest>,
) -> Result<Json<Pokemon>, ApiError> {
    req.validate().map_err(ApiError::BadRequest)?;
    let pokemon = state.pokemon_service.update(&term, req.into_patch()).await?;
    Ok(Json(pokemon))
}

pub async fn remove(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.pokemon_service.remove(id).await?;
    Ok(Json(DeleteResponse { deleted: true, id }))
}
