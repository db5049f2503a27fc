use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use smartschool_types::api::{FacultyPatch, NewFaculty};
use smartschool_types::models::Faculty;

use crate::Database;
use crate::error::DbError;
use crate::queries::{SetClauses, required};

impl Database {
    pub fn list_faculty(&self) -> Result<Vec<Faculty>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, department, position, image_url, email, phone, created_at
                 FROM faculty",
            )?;
            let rows = stmt
                .query_map([], map_faculty)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn create_faculty(&self, new: &NewFaculty) -> Result<Faculty, DbError> {
        let name = required(&new.name, "name")?;
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO faculty (id, name, department, position, image_url, email, phone)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    id,
                    name,
                    new.department,
                    new.position,
                    new.image_url,
                    new.email,
                    new.phone,
                ],
            )?;
            let row = conn.query_row(
                "SELECT id, name, department, position, image_url, email, phone, created_at
                 FROM faculty WHERE id = ?1",
                [&id],
                map_faculty,
            )?;
            Ok(row)
        })
    }

    /// Partial update; the image reference changes only when the patch
    /// carries one (a new file arrived with the request).
    pub fn update_faculty(
        &self,
        id: &str,
        patch: &FacultyPatch,
    ) -> Result<Option<Faculty>, DbError> {
        self.with_conn(|conn| {
            let mut sets = SetClauses::new();
            sets.push("name", &patch.name);
            sets.push("department", &patch.department);
            sets.push("position", &patch.position);
            sets.push("email", &patch.email);
            sets.push("phone", &patch.phone);
            sets.push("image_url", &patch.image_url);

            if !sets.is_empty() {
                sets.apply(conn, "faculty", id)?;
            }
            fetch_faculty(conn, id)
        })
    }

    pub fn delete_faculty(&self, id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM faculty WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn fetch_faculty(conn: &Connection, id: &str) -> Result<Option<Faculty>, DbError> {
    let row = conn
        .query_row(
            "SELECT id, name, department, position, image_url, email, phone, created_at
             FROM faculty WHERE id = ?1",
            [id],
            map_faculty,
        )
        .optional()?;
    Ok(row)
}

fn map_faculty(row: &rusqlite::Row<'_>) -> rusqlite::Result<Faculty> {
    Ok(Faculty {
        id: row.get(0)?,
        name: row.get(1)?,
        department: row.get(2)?,
        position: row.get(3)?,
        image_url: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        created_at: row.get(7)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewFaculty {
        NewFaculty {
            name: Some("A. Teacher".into()),
            department: Some("Science".into()),
            position: Some("HOD".into()),
            email: Some("teacher@smartschool.com".into()),
            phone: None,
            image_url: Some("/uploads/1.png".into()),
        }
    }

    #[test]
    fn create_requires_name() {
        let db = Database::open_in_memory().unwrap();
        let err = db
            .create_faculty(&NewFaculty {
                name: None,
                ..Default::default()
            })
            .unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }

    #[test]
    fn update_changes_only_supplied_fields() {
        let db = Database::open_in_memory().unwrap();
        let created = db.create_faculty(&sample()).unwrap();

        let updated = db
            .update_faculty(
                &created.id,
                &FacultyPatch {
                    department: Some("Mathematics".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("row exists");

        assert_eq!(updated.department.as_deref(), Some("Mathematics"));
        // Everything else is bit-identical to the pre-update record.
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.position, created.position);
        assert_eq!(updated.image_url, created.image_url);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[test]
    fn image_survives_update_without_new_file() {
        let db = Database::open_in_memory().unwrap();
        let created = db.create_faculty(&sample()).unwrap();

        let updated = db
            .update_faculty(
                &created.id,
                &FacultyPatch {
                    name: Some("B. Teacher".into()),
                    image_url: None,
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("row exists");
        assert_eq!(updated.image_url.as_deref(), Some("/uploads/1.png"));

        let updated = db
            .update_faculty(
                &created.id,
                &FacultyPatch {
                    image_url: Some("/uploads/2.png".into()),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("row exists");
        assert_eq!(updated.image_url.as_deref(), Some("/uploads/2.png"));
    }

    #[test]
    fn update_of_missing_id_reports_none() {
        let db = Database::open_in_memory().unwrap();
        let result = db
            .update_faculty("nope", &FacultyPatch::default())
            .unwrap();
        assert!(result.is_none());
    }
}
