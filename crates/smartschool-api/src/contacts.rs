use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use smartschool_types::api::{NewContact, StatusUpdate, Success};

use crate::AppState;
use crate::error::ApiError;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_contacts()?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewContact>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.create_contact(&req)?;
    Ok(Json(Success::ok()))
}

pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<StatusUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    if let Some(status) = req.status {
        state.db.set_contact_status(&id, &status)?;
    }
    Ok(Json(Success::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.delete_contact(&id)?;
    Ok(Json(Success::ok()))
}
