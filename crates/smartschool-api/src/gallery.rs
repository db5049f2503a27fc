use axum::{
    Json,
    extract::{Multipart, Path, State},
    response::IntoResponse,
};

use smartschool_types::api::{NewGalleryItem, Success};

use crate::error::ApiError;
use crate::{AppState, upload};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_gallery()?))
}

/// POST /api/gallery — multipart batch upload. Every attachment under
/// `images` becomes its own record sharing the request's category and
/// uploader; a single failed store drops the whole batch.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::collect(multipart, state.storage.as_ref()).await?;

    let category = form.text("category");
    let uploaded_by = form.text("adminId");
    let items: Vec<NewGalleryItem> = form
        .files_for("images")
        .map(|file| NewGalleryItem {
            image_url: file.url.clone(),
            category: category.clone(),
            uploaded_by: uploaded_by.clone(),
        })
        .collect();

    state.db.insert_gallery_batch(&items)?;
    Ok(Json(Success::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    // Missing ids still answer success; the frontend treats every 2xx
    // mutation as applied. Same for the other delete/update routes.
    state.db.delete_gallery(&id)?;
    Ok(Json(Success::ok()))
}
