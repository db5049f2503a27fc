use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use smartschool_types::api::NewReview;
use smartschool_types::models::Review;

use crate::Database;
use crate::error::DbError;
use crate::queries::required;

impl Database {
    /// The public listing: approved reviews only, newest first.
    pub fn list_approved_reviews(&self) -> Result<Vec<Review>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, rating, review, is_approved, created_at
                 FROM reviews WHERE is_approved = 1 ORDER BY created_at DESC",
            )?;
            let rows = stmt
                .query_map([], map_review)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    /// Moderation view: everything, approved or not.
    pub fn list_all_reviews(&self) -> Result<Vec<Review>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, rating, review, is_approved, created_at
                 FROM reviews ORDER BY created_at DESC",
            )?;
            let rows = stmt
                .query_map([], map_review)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn create_review(&self, new: &NewReview) -> Result<Review, DbError> {
        let name = required(&new.name, "name")?;
        let text = required(&new.review, "review")?;
        let rating = new
            .rating
            .ok_or_else(|| DbError::Validation("'rating' is required".into()))?;
        if !(1..=5).contains(&rating) {
            return Err(DbError::Validation(format!(
                "rating must be between 1 and 5, got {rating}"
            )));
        }

        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO reviews (id, name, rating, review) VALUES (?1, ?2, ?3, ?4)",
                params![id, name, rating, text],
            )?;
            let review = conn.query_row(
                "SELECT id, name, rating, review, is_approved, created_at
                 FROM reviews WHERE id = ?1",
                [&id],
                map_review,
            )?;
            Ok(review)
        })
    }

    pub fn approve_review(&self, id: &str) -> Result<Option<Review>, DbError> {
        self.with_conn(|conn| {
            conn.execute("UPDATE reviews SET is_approved = 1 WHERE id = ?1", [id])?;
            let row = conn
                .query_row(
                    "SELECT id, name, rating, review, is_approved, created_at
                     FROM reviews WHERE id = ?1",
                    [id],
                    map_review,
                )
                .optional()?;
            Ok(row)
        })
    }

    pub fn delete_review(&self, id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM reviews WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn map_review(row: &rusqlite::Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        name: row.get(1)?,
        rating: row.get(2)?,
        review: row.get(3)?,
        is_approved: row.get(4)?,
        created_at: row.get(5)?,
    })
}
