use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use smartschool_types::api::{NewEvent, Success};

use crate::AppState;
use crate::error::ApiError;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_events()?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewEvent>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.create_event(&req)?;
    Ok(Json(Success::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.delete_event(&id)?;
    Ok(Json(Success::ok()))
}
