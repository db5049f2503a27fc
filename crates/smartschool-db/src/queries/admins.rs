use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use smartschool_types::models::Admin;

use crate::Database;
use crate::error::DbError;

impl Database {
    /// Exact-match lookup on username and stored password, both untouched.
    /// Credentials are compared as plaintext; see DESIGN.md.
    pub fn find_admin(&self, username: &str, password: &str) -> Result<Option<Admin>, DbError> {
        self.with_conn(|conn| {
            let row = conn
                .query_row(
                    "SELECT id, username, password, email, created_at
                     FROM admins WHERE username = ?1 AND password = ?2",
                    params![username, password],
                    map_admin,
                )
                .optional()?;
            Ok(row)
        })
    }

    /// Username is UNIQUE; a duplicate surfaces as a persistence error.
    pub fn create_admin(
        &self,
        username: &str,
        password: &str,
        email: Option<&str>,
    ) -> Result<Admin, DbError> {
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO admins (id, username, password, email) VALUES (?1, ?2, ?3, ?4)",
                params![id, username, password, email],
            )?;
            fetch_admin(conn, &id)
        })
    }
}

fn fetch_admin(conn: &Connection, id: &str) -> Result<Admin, DbError> {
    let admin = conn.query_row(
        "SELECT id, username, password, email, created_at FROM admins WHERE id = ?1",
        [id],
        map_admin,
    )?;
    Ok(admin)
}

fn map_admin(row: &rusqlite::Row<'_>) -> rusqlite::Result<Admin> {
    Ok(Admin {
        id: row.get(0)?,
        username: row.get(1)?,
        password: row.get(2)?,
        email: row.get(3)?,
        created_at: row.get(4)?,
    })
}
