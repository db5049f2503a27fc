use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use smartschool_types::api::NewAdmission;
use smartschool_types::models::Admission;

use crate::Database;
use crate::error::DbError;
use crate::queries::required;

impl Database {
    pub fn list_admissions(&self) -> Result<Vec<Admission>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, student_name, parent_name, email, phone, class, status, created_at
                 FROM admissions ORDER BY created_at DESC",
            )?;
            let rows = stmt
                .query_map([], map_admission)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn create_admission(&self, new: &NewAdmission) -> Result<Admission, DbError> {
        let student_name = required(&new.student_name, "studentName")?;
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO admissions (id, student_name, parent_name, email, phone, class)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![id, student_name, new.parent_name, new.email, new.phone, new.class],
            )?;
            let admission = conn.query_row(
                "SELECT id, student_name, parent_name, email, phone, class, status, created_at
                 FROM admissions WHERE id = ?1",
                [&id],
                map_admission,
            )?;
            Ok(admission)
        })
    }

    /// Narrower mutation than a general update: only the free-text status.
    pub fn set_admission_status(
        &self,
        id: &str,
        status: &str,
    ) -> Result<Option<Admission>, DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE admissions SET status = ?1 WHERE id = ?2",
                params![status, id],
            )?;
            fetch_admission(conn, id)
        })
    }

    pub fn delete_admission(&self, id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM admissions WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn fetch_admission(conn: &Connection, id: &str) -> Result<Option<Admission>, DbError> {
    let row = conn
        .query_row(
            "SELECT id, student_name, parent_name, email, phone, class, status, created_at
             FROM admissions WHERE id = ?1",
            [id],
            map_admission,
        )
        .optional()?;
    Ok(row)
}

fn map_admission(row: &rusqlite::Row<'_>) -> rusqlite::Result<Admission> {
    Ok(Admission {
        id: row.get(0)?,
        student_name: row.get(1)?,
        parent_name: row.get(2)?,
        email: row.get(3)?,
        phone: row.get(4)?,
        class: row.get(5)?,
        status: row.get(6)?,
        created_at: row.get(7)?,
    })
}
