use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::api_error::ApiError;
use crate::api_types::SeedResponse;
use crate::AppState;

/// Resets the collection and reloads it from the remote catalog. Duplicate
/// failures land in the response body; only a failed fetch errors out.
pub async fn run_seed(State(state): State<Arc<AppState>>) -> Result<Json<SeedResponse>, ApiError> {
    let outcome = state.seed_service.populate().await?;
    Ok(Json(SeedResponse::from(outcome)))
}
