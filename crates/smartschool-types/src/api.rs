use serde::{Deserialize, Serialize};

use crate::models::Admin;

// -- Auth --

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub admin: Admin,
}

/// Body of every mutating route that has nothing else to report.
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Success {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// -- Creation and update payloads --
//
// Required fields stay `Option` here. Repositories reject missing ones, so
// the route boundary can answer with the uniform JSON error body instead of
// a framework-level rejection. Unknown incoming keys are ignored, matching
// the schema-stripping behavior of the store this system replaces.

#[derive(Debug, Clone)]
pub struct NewGalleryItem {
    pub image_url: String,
    pub category: Option<String>,
    pub uploaded_by: Option<String>,
}

#[derive(Debug, Default)]
pub struct NewHeroSlide {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: String,
    pub display_order: Option<i64>,
}

#[derive(Debug, Default)]
pub struct NewFaculty {
    pub name: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct FacultyPatch {
    pub name: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Set only when a new file accompanied the update request.
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub class_name: Option<String>,
    pub teacher_name: Option<String>,
    pub student_count: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePatch {
    pub class_name: Option<String>,
    pub teacher_name: Option<String>,
    pub student_count: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAdmission {
    pub student_name: Option<String>,
    pub parent_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub class: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewContact {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Default)]
pub struct NewNotice {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Default)]
pub struct NoticePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub priority: Option<String>,
    /// Set only when a new file accompanied the update request.
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct NewReview {
    pub name: Option<String>,
    pub rating: Option<i64>,
    pub review: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: Option<String>,
}
