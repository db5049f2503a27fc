use axum::{
    Json,
    extract::{Multipart, Path, State},
    response::IntoResponse,
};

use smartschool_types::api::{FacultyPatch, NewFaculty, Success};

use crate::error::ApiError;
use crate::{AppState, upload};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_faculty()?))
}

/// POST /api/faculty — the portrait is optional.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::collect(multipart, state.storage.as_ref()).await?;

    let new = NewFaculty {
        name: form.text("name"),
        department: form.text("department"),
        position: form.text("position"),
        email: form.text("email"),
        phone: form.text("phone"),
        image_url: form.file_url("image").map(str::to_string),
    };

    state.db.create_faculty(&new)?;
    Ok(Json(Success::ok()))
}

/// PUT /api/faculty/{id} — partial update; the stored portrait is replaced
/// only when this request carried a new file.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::collect(multipart, state.storage.as_ref()).await?;

    let patch = FacultyPatch {
        name: form.text("name"),
        department: form.text("department"),
        position: form.text("position"),
        email: form.text("email"),
        phone: form.text("phone"),
        image_url: form.file_url("image").map(str::to_string),
    };

    state.db.update_faculty(&id, &patch)?;
    Ok(Json(Success::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.delete_faculty(&id)?;
    Ok(Json(Success::ok()))
}
