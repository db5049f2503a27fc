use rusqlite::Connection;
use tracing::info;

use crate::error::DbError;

pub fn run(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS admins (
            id          TEXT PRIMARY KEY,
            username    TEXT NOT NULL UNIQUE,
            password    TEXT NOT NULL,
            email       TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS gallery (
            id          TEXT PRIMARY KEY,
            image_url   TEXT NOT NULL,
            category    TEXT NOT NULL DEFAULT 'All',
            uploaded_by TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_gallery_created
            ON gallery(created_at);

        CREATE TABLE IF NOT EXISTS hero_slides (
            id            TEXT PRIMARY KEY,
            title         TEXT,
            subtitle      TEXT,
            image_url     TEXT NOT NULL,
            display_order INTEGER,
            created_at    TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS faculty (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            department  TEXT,
            position    TEXT,
            image_url   TEXT,
            email       TEXT,
            phone       TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS courses (
            id            TEXT PRIMARY KEY,
            class_name    TEXT NOT NULL,
            teacher_name  TEXT,
            student_count INTEGER NOT NULL DEFAULT 0,
            created_at    TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS admissions (
            id           TEXT PRIMARY KEY,
            student_name TEXT NOT NULL,
            parent_name  TEXT,
            email        TEXT,
            phone        TEXT,
            class        TEXT,
            status       TEXT NOT NULL DEFAULT 'Pending',
            created_at   TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_admissions_created
            ON admissions(created_at);

        CREATE TABLE IF NOT EXISTS contacts (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            email       TEXT,
            phone       TEXT,
            message     TEXT,
            status      TEXT NOT NULL DEFAULT 'New',
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_contacts_created
            ON contacts(created_at);

        CREATE TABLE IF NOT EXISTS notices (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL,
            content     TEXT NOT NULL,
            priority    TEXT NOT NULL DEFAULT 'Normal',
            image_url   TEXT,
            is_active   INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_notices_active
            ON notices(is_active, created_at);

        CREATE TABLE IF NOT EXISTS events (
            id          TEXT PRIMARY KEY,
            title       TEXT NOT NULL,
            description TEXT,
            date        TEXT NOT NULL,
            time        TEXT,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_events_date
            ON events(date);

        CREATE TABLE IF NOT EXISTS reviews (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            rating      INTEGER NOT NULL,
            review      TEXT NOT NULL,
            is_approved INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_reviews_approved
            ON reviews(is_approved, created_at);
        ",
    )?;

    info!("Database migrations complete");
    Ok(())
}
