use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use smartschool_types::api::{CoursePatch, NewCourse, Success};

use crate::AppState;
use crate::error::ApiError;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_courses()?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewCourse>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.create_course(&req)?;
    Ok(Json(Success::ok()))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CoursePatch>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.update_course(&id, &req)?;
    Ok(Json(Success::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.delete_course(&id)?;
    Ok(Json(Success::ok()))
}
