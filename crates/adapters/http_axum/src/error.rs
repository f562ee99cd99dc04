//! HTTP error response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use catalog_domain::error::CatalogError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`CatalogError`] to an HTTP response with the appropriate status code.
///
/// One taxonomy for the whole surface: validation failures are 400, lookup
/// misses are 404 (get, update, and delete alike), storage faults are an
/// opaque 500 with the detail kept in the logs.
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            CatalogError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            CatalogError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            CatalogError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
