use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use smartschool_types::api::{NewNotice, NoticePatch};
use smartschool_types::models::Notice;

use crate::Database;
use crate::error::DbError;
use crate::queries::{SetClauses, required};

const NOTICE_COLUMNS: &str = "id, title, content, priority, image_url, is_active, created_at";

impl Database {
    /// The public notice board: active notices only, newest first.
    pub fn list_active_notices(&self) -> Result<Vec<Notice>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {NOTICE_COLUMNS} FROM notices
                 WHERE is_active = 1 ORDER BY created_at DESC",
            ))?;
            let rows = stmt
                .query_map([], map_notice)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Unfiltered view; deactivated notices are hidden, not deleted.
    pub fn list_all_notices(&self) -> Result<Vec<Notice>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {NOTICE_COLUMNS} FROM notices ORDER BY created_at DESC",
            ))?;
            let rows = stmt
                .query_map([], map_notice)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn create_notice(&self, new: &NewNotice) -> Result<Notice, DbError> {
        let title = required(&new.title, "title")?;
        let content = required(&new.content, "content")?;
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO notices (id, title, content, priority, image_url)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    id,
                    title,
                    content,
                    new.priority.as_deref().unwrap_or("Normal"),
                    new.image_url,
                ],
            )?;
            let notice = conn.query_row(
                &format!("SELECT {NOTICE_COLUMNS} FROM notices WHERE id = ?1"),
                [&id],
                map_notice,
            )?;
            Ok(notice)
        })
    }

    /// Partial update; the image reference changes only when the patch
    /// carries one.
    pub fn update_notice(&self, id: &str, patch: &NoticePatch) -> Result<Option<Notice>, DbError> {
        self.with_conn(|conn| {
            let mut sets = SetClauses::new();
            sets.push("title", &patch.title);
            sets.push("content", &patch.content);
            sets.push("priority", &patch.priority);
            sets.push("image_url", &patch.image_url);
            sets.push("is_active", &patch.is_active);

            if !sets.is_empty() {
                sets.apply(conn, "notices", id)?;
            }
            fetch_notice(conn, id)
        })
    }

    pub fn delete_notice(&self, id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM notices WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn fetch_notice(conn: &Connection, id: &str) -> Result<Option<Notice>, DbError> {
    let row = conn
        .query_row(
            &format!("SELECT {NOTICE_COLUMNS} FROM notices WHERE id = ?1"),
            [id],
            map_notice,
        )
        .optional()?;
    Ok(row)
}

fn map_notice(row: &rusqlite::Row<'_>) -> rusqlite::Result<Notice> {
    Ok(Notice {
        id: row.get(0)?,
        title: row.get(1)?,
        content: row.get(2)?,
        priority: row.get(3)?,
        image_url: row.get(4)?,
        is_active: row.get(5)?,
        created_at: row.get(6)?,
    })
}
