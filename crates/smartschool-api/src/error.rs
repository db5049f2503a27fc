use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use smartschool_db::error::DbError;
use smartschool_storage::StorageError;

/// Route-level failure. Every variant surfaces as a JSON `{error}` body with
/// status 500; only a credential mismatch gets its own status code.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Missing required field or file, out-of-range value.
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("malformed multipart request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = self.to_string();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!("Request failed: {message}");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}
