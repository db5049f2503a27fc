use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use smartschool_types::api::NewContact;
use smartschool_types::models::Contact;

use crate::Database;
use crate::error::DbError;
use crate::queries::required;

impl Database {
    pub fn list_contacts(&self) -> Result<Vec<Contact>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, email, phone, message, status, created_at
                 FROM contacts ORDER BY created_at DESC",
            )?;
            let rows = stmt
                .query_map([], map_contact)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn create_contact(&self, new: &NewContact) -> Result<Contact, DbError> {
        let name = required(&new.name, "name")?;
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO contacts (id, name, email, phone, message)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, name, new.email, new.phone, new.message],
            )?;
            let contact = conn.query_row(
                "SELECT id, name, email, phone, message, status, created_at
                 FROM contacts WHERE id = ?1",
                [&id],
                map_contact,
            )?;
            Ok(contact)
        })
    }

    pub fn set_contact_status(&self, id: &str, status: &str) -> Result<Option<Contact>, DbError> {
        self.with_conn(|conn| {
            conn.execute(
                "UPDATE contacts SET status = ?1 WHERE id = ?2",
                params![status, id],
            )?;
            fetch_contact(conn, id)
        })
    }

    pub fn delete_contact(&self, id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM contacts WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn fetch_contact(conn: &Connection, id: &str) -> Result<Option<Contact>, DbError> {
    let row = conn
        .query_row(
            "SELECT id, name, email, phone, message, status, created_at
             FROM contacts WHERE id = ?1",
            [id],
            map_contact,
        )
        .optional()?;
    Ok(row)
}

fn map_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        message: row.get(4)?,
        status: row.get(5)?,
        created_at: row.get(6)?,
    })
}
