//! Typed API error for HTTP handlers.
//!
//! Converts service errors into proper HTTP responses with JSON body and
//! status codes. Handlers return `Result<Json<T>, ApiError>`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pokedex_service::ServiceError;
use pokedex_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static message
/// to the client — storage diagnostics never leak to callers.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request — invalid input or duplicate key (client fault).
    BadRequest(String),
    /// 404 Not Found — requested record doesn't exist.
    NotFound(String),
    /// 502 Bad Gateway — upstream catalog failure during seeding.
    BadGateway(String),
    /// 500 Internal Server Error — unexpected failure. Details logged, not
    /// exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Storage(ref e) if e.is_duplicate() => {
                let field = e.duplicate_field().unwrap_or("unique field");
                Self::BadRequest(format!("pokemon already exists with the same {field}"))
            },
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            ServiceError::Catalog(_) => Self::BadGateway(err.to_string()),
            ServiceError::Storage(_) => Self::Internal(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_storage::StorageError;

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from(ServiceError::NotFound { term: "missingno".to_owned() });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_duplicate_maps_to_400_with_field() {
        let storage = StorageError::Duplicate {
            constraint: "pokemons_name_key".to_owned(),
            message: "Key (name)=(pikachu) already exists.".to_owned(),
        };
        let err = ApiError::from(ServiceError::Storage(storage));
        match &err {
            ApiError::BadRequest(msg) => assert!(msg.contains("name")),
            other => panic!("expected BadRequest, got {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_other_storage_errors_map_to_500_with_generic_body() {
        let err = ApiError::from(ServiceError::Storage(StorageError::Migration(
            "secret detail".to_owned(),
        )));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
