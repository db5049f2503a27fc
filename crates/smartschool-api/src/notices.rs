use axum::{
    Json,
    extract::{Multipart, Path, State},
    response::IntoResponse,
};

use smartschool_types::api::{NewNotice, NoticePatch, Success};

use crate::error::ApiError;
use crate::{AppState, upload};

/// GET /api/notices — the public board shows active notices only.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_active_notices()?))
}

/// POST /api/notices — attachment optional.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::collect(multipart, state.storage.as_ref()).await?;

    let new = NewNotice {
        title: form.text("title"),
        content: form.text("content"),
        priority: form.text("priority"),
        image_url: form.file_url("image").map(str::to_string),
    };

    state.db.create_notice(&new)?;
    Ok(Json(Success::ok()))
}

/// PUT /api/notices/{id} — partial update; the stored image is replaced only
/// when this request carried a new file. `isActive` toggles visibility.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::collect(multipart, state.storage.as_ref()).await?;

    let patch = NoticePatch {
        title: form.text("title"),
        content: form.text("content"),
        priority: form.text("priority"),
        image_url: form.file_url("image").map(str::to_string),
        is_active: form.text("isActive").and_then(|v| v.parse().ok()),
    };

    state.db.update_notice(&id, &patch)?;
    Ok(Json(Success::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.delete_notice(&id)?;
    Ok(Json(Success::ok()))
}
