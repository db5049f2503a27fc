use rusqlite::params;
use uuid::Uuid;

use smartschool_types::api::NewGalleryItem;
use smartschool_types::models::Gallery;

use crate::Database;
use crate::error::DbError;

impl Database {
    pub fn list_gallery(&self) -> Result<Vec<Gallery>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, image_url, category, uploaded_by, created_at
                 FROM gallery ORDER BY created_at DESC",
            )?;
            let rows = stmt
                .query_map([], map_gallery)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Inserts a whole upload batch inside one transaction: either every
    /// record lands or none do.
    pub fn insert_gallery_batch(&self, items: &[NewGalleryItem]) -> Result<(), DbError> {
        self.with_conn(|conn| {
            let tx = conn.unchecked_transaction()?;
            for item in items {
                let category = match item.category.as_deref() {
                    Some(c) if !c.is_empty() => c,
                    _ => "All",
                };
                tx.execute(
                    "INSERT INTO gallery (id, image_url, category, uploaded_by)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![
                        Uuid::new_v4().to_string(),
                        item.image_url,
                        category,
                        item.uploaded_by,
                    ],
                )?;
            }
            tx.commit()?;
            Ok(())
        })
    }

    pub fn delete_gallery(&self, id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM gallery WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn map_gallery(row: &rusqlite::Row<'_>) -> rusqlite::Result<Gallery> {
    Ok(Gallery {
        id: row.get(0)?,
        image_url: row.get(1)?,
        category: row.get(2)?,
        uploaded_by: row.get(3)?,
        created_at: row.get(4)?,
    })
}
