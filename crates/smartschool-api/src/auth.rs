use axum::{Json, extract::State, response::IntoResponse};

use smartschool_types::api::{LoginRequest, LoginResponse};

use crate::AppState;
use crate::error::ApiError;

/// POST /api/login — bare credential comparison against the stored admin
/// record. Plaintext exact match, preserved from the system this replaces.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let admin = state
        .db
        .find_admin(&req.username, &req.password)?
        .ok_or(ApiError::InvalidCredentials)?;

    Ok(Json(LoginResponse {
        success: true,
        admin,
    }))
}
