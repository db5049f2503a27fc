use axum::{
    Json,
    extract::{Multipart, Path, State},
    response::IntoResponse,
};

use smartschool_types::api::{NewHeroSlide, Success};

use crate::error::ApiError;
use crate::{AppState, upload};

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.db.list_hero_slides()?))
}

/// POST /api/hero-slides — the slide image is mandatory.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = upload::collect(multipart, state.storage.as_ref()).await?;
    let image_url = form.require_file_url("image")?.to_string();

    let slide = NewHeroSlide {
        title: form.text("title"),
        subtitle: form.text("subtitle"),
        image_url,
        display_order: form.text("displayOrder").and_then(|v| v.parse().ok()),
    };

    state.db.create_hero_slide(&slide)?;
    Ok(Json(Success::ok()))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.db.delete_hero_slide(&id)?;
    Ok(Json(Success::ok()))
}
