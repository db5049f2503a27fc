use rusqlite::params;
use uuid::Uuid;

use smartschool_types::api::NewHeroSlide;
use smartschool_types::models::HeroSlide;

use crate::Database;
use crate::error::DbError;

impl Database {
    pub fn list_hero_slides(&self) -> Result<Vec<HeroSlide>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, subtitle, image_url, display_order, created_at
                 FROM hero_slides",
            )?;
            let rows = stmt
                .query_map([], map_slide)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn create_hero_slide(&self, new: &NewHeroSlide) -> Result<HeroSlide, DbError> {
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO hero_slides (id, title, subtitle, image_url, display_order)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, new.title, new.subtitle, new.image_url, new.display_order],
            )?;
            let slide = conn.query_row(
                "SELECT id, title, subtitle, image_url, display_order, created_at
                 FROM hero_slides WHERE id = ?1",
                [&id],
                map_slide,
            )?;
            Ok(slide)
        })
    }

    pub fn delete_hero_slide(&self, id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM hero_slides WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn map_slide(row: &rusqlite::Row<'_>) -> rusqlite::Result<HeroSlide> {
    Ok(HeroSlide {
        id: row.get(0)?,
        title: row.get(1)?,
        subtitle: row.get(2)?,
        image_url: row.get(3)?,
        display_order: row.get(4)?,
        created_at: row.get(5)?,
    })
}
