use tracing::info;
use uuid::Uuid;

use crate::Database;
use crate::error::DbError;

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "admin123";
const DEFAULT_EMAIL: &str = "admin@smartschool.com";

/// Seeds the well-known admin account so a fresh install is reachable.
/// Idempotent: a store that already holds any admin is left untouched.
pub fn ensure_default_admin(db: &Database) -> Result<(), DbError> {
    db.with_conn(|conn| {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM admins", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(());
        }

        conn.execute(
            "INSERT INTO admins (id, username, password, email) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                Uuid::new_v4().to_string(),
                DEFAULT_USERNAME,
                DEFAULT_PASSWORD,
                DEFAULT_EMAIL,
            ],
        )?;
        info!("Seeded default admin account '{}'", DEFAULT_USERNAME);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_twice_creates_one_admin() {
        let db = Database::open_in_memory().unwrap();
        ensure_default_admin(&db).unwrap();
        ensure_default_admin(&db).unwrap();

        let count = db
            .with_conn(|conn| {
                Ok(conn.query_row("SELECT COUNT(*) FROM admins", [], |row| row.get::<_, i64>(0))?)
            })
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn populated_store_is_left_untouched() {
        let db = Database::open_in_memory().unwrap();
        db.create_admin("principal", "hunter2", Some("head@smartschool.com"))
            .unwrap();

        ensure_default_admin(&db).unwrap();

        assert!(db.find_admin("admin", "admin123").unwrap().is_none());
        assert!(db.find_admin("principal", "hunter2").unwrap().is_some());
    }
}
