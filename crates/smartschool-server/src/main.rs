use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use smartschool_api::{
    AppState, admissions, auth, contacts, courses, events, faculty, gallery, hero, notices,
    reviews,
};
use smartschool_db::{Database, seed};
use smartschool_storage::{DiskStorage, RemoteConfig, RemoteStorage, StorageBackend};

/// 25 MB cap on request bodies, which bounds multipart uploads too.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartschool=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("PORT").unwrap_or_else(|_| "5000".into()).parse()?;
    let db_path = std::env::var("SCHOOL_DB_PATH").unwrap_or_else(|_| "smartschool.db".into());
    let upload_dir: PathBuf = std::env::var("SCHOOL_UPLOAD_DIR")
        .unwrap_or_else(|_| "./uploads".into())
        .into();
    let backend = std::env::var("SCHOOL_STORAGE").unwrap_or_else(|_| "disk".into());

    // Storage backend is chosen once here; handlers only ever see the trait.
    let storage: Arc<dyn StorageBackend> = match backend.as_str() {
        "disk" => Arc::new(DiskStorage::new(upload_dir.clone(), "/uploads").await?),
        "cloud" => Arc::new(RemoteStorage::new(RemoteConfig {
            cloud_name: require_env("SCHOOL_MEDIA_CLOUD_NAME"),
            api_key: require_env("SCHOOL_MEDIA_API_KEY"),
            api_secret: require_env("SCHOOL_MEDIA_API_SECRET"),
            folder: std::env::var("SCHOOL_MEDIA_FOLDER").unwrap_or_else(|_| "rp-school".into()),
        })),
        other => {
            eprintln!("FATAL: unknown SCHOOL_STORAGE '{other}' (expected 'disk' or 'cloud')");
            std::process::exit(1);
        }
    };

    // Init database and seed the well-known admin on first run
    let db = Arc::new(Database::open(Path::new(&db_path))?);
    seed::ensure_default_admin(&db)?;

    let state = AppState { db, storage };

    let app = Router::new()
        .route("/", get(home))
        .route("/api/login", post(auth::login))
        .route("/api/gallery", get(gallery::list))
        .route("/api/gallery", post(gallery::create))
        .route("/api/gallery/{id}", delete(gallery::remove))
        .route("/api/hero-slides", get(hero::list))
        .route("/api/hero-slides", post(hero::create))
        .route("/api/hero-slides/{id}", delete(hero::remove))
        .route("/api/faculty", get(faculty::list))
        .route("/api/faculty", post(faculty::create))
        .route("/api/faculty/{id}", put(faculty::update))
        .route("/api/faculty/{id}", delete(faculty::remove))
        .route("/api/courses", get(courses::list))
        .route("/api/courses", post(courses::create))
        .route("/api/courses/{id}", put(courses::update))
        .route("/api/courses/{id}", delete(courses::remove))
        .route("/api/admissions", get(admissions::list))
        .route("/api/admissions", post(admissions::create))
        .route("/api/admissions/{id}", delete(admissions::remove))
        .route("/api/admissions/{id}/status", put(admissions::set_status))
        .route("/api/contacts", get(contacts::list))
        .route("/api/contacts", post(contacts::create))
        .route("/api/contacts/{id}", delete(contacts::remove))
        .route("/api/contacts/{id}/status", put(contacts::set_status))
        .route("/api/notices", get(notices::list))
        .route("/api/notices", post(notices::create))
        .route("/api/notices/{id}", put(notices::update))
        .route("/api/notices/{id}", delete(notices::remove))
        .route("/api/events", get(events::list))
        .route("/api/events", post(events::create))
        .route("/api/events/{id}", delete(events::remove))
        .route("/api/reviews", get(reviews::list))
        .route("/api/reviews/all", get(reviews::list_all))
        .route("/api/reviews", post(reviews::create))
        .route("/api/reviews/{id}/approve", put(reviews::approve))
        .route("/api/reviews/{id}", delete(reviews::remove))
        .nest_service("/uploads", ServeDir::new(&upload_dir))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!("School backend listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn home() -> &'static str {
    "School backend running"
}

fn require_env(name: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        eprintln!("FATAL: {name} must be set when SCHOOL_STORAGE=cloud");
        std::process::exit(1);
    })
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
