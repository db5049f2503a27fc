use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use smartschool_types::api::{NewReview, Success};

use crate::AppState;
use crate::error::ApiError;

/// GET /api/reviews — the public listing shows approved reviews only.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_approved_reviews()?))
}

/// GET /api/reviews/all — moderation view.
pub async fn list_all(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_all_reviews()?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<NewReview>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.create_review(&req)?;
    Ok(Json(Success::ok()))
}

pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.approve_review(&id)?;
    Ok(Json(Success::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.delete_review(&id)?;
    Ok(Json(Success::ok()))
}
