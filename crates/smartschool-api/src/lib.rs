pub mod admissions;
pub mod auth;
pub mod contacts;
pub mod courses;
pub mod error;
pub mod events;
pub mod faculty;
pub mod gallery;
pub mod hero;
pub mod notices;
pub mod reviews;
pub mod upload;

use std::sync::Arc;

use smartschool_db::Database;
use smartschool_storage::StorageBackend;

/// Shared application state for all route handlers. Both handles are
/// constructed once at startup and passed in; nothing here is global.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub storage: Arc<dyn StorageBackend>,
}
