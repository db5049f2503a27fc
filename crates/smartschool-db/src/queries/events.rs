use rusqlite::params;
use uuid::Uuid;

use smartschool_types::api::NewEvent;
use smartschool_types::models::Event;

use crate::Database;
use crate::error::DbError;
use crate::queries::required;

impl Database {
    /// Upcoming-first: ascending by event date, whatever the creation order.
    pub fn list_events(&self) -> Result<Vec<Event>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, title, description, date, time, created_at
                 FROM events ORDER BY date ASC",
            )?;
            let rows = stmt
                .query_map([], map_event)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn create_event(&self, new: &NewEvent) -> Result<Event, DbError> {
        let title = required(&new.title, "title")?;
        let date = required(&new.date, "date")?;
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO events (id, title, description, date, time)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, title, new.description, date, new.time],
            )?;
            let event = conn.query_row(
                "SELECT id, title, description, date, time, created_at
                 FROM events WHERE id = ?1",
                [&id],
                map_event,
            )?;
            Ok(event)
        })
    }

    pub fn delete_event(&self, id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM events WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn map_event(row: &rusqlite::Row<'_>) -> rusqlite::Result<Event> {
    Ok(Event {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        date: row.get(3)?,
        time: row.get(4)?,
        created_at: row.get(5)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(title: &str, date: &str) -> NewEvent {
        NewEvent {
            title: Some(title.into()),
            date: Some(date.into()),
            ..Default::default()
        }
    }

    #[test]
    fn list_orders_by_date_regardless_of_creation_order() {
        let db = Database::open_in_memory().unwrap();
        db.create_event(&event("Annual day", "2026-12-20")).unwrap();
        db.create_event(&event("Sports day", "2026-03-05")).unwrap();
        db.create_event(&event("Science fair", "2026-07-15")).unwrap();

        let titles: Vec<String> = db
            .list_events()
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["Sports day", "Science fair", "Annual day"]);
    }

    #[test]
    fn title_and_date_are_required() {
        let db = Database::open_in_memory().unwrap();
        assert!(matches!(
            db.create_event(&NewEvent::default()).unwrap_err(),
            DbError::Validation(_)
        ));
        assert!(matches!(
            db.create_event(&NewEvent {
                title: Some("No date".into()),
                ..Default::default()
            })
            .unwrap_err(),
            DbError::Validation(_)
        ));
    }
}
