use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use smartschool_types::api::{NewAdmission, StatusUpdate, Success};

use crate::AppState;
use crate::error::ApiError;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_admissions()?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewAdmission>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.create_admission(&req)?;
    Ok(Json(Success::ok()))
}

/// PUT /api/admissions/{id}/status — a body without a status is a no-op.
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(status) = req.status {
        state.db.set_admission_status(&id, &status)?;
    }
    Ok(Json(Success::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.delete_admission(&id)?;
    Ok(Json(Success::ok()))
}
