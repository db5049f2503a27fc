use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use smartschool_types::api::{CoursePatch, NewCourse};
use smartschool_types::models::Course;

use crate::Database;
use crate::error::DbError;
use crate::queries::{SetClauses, required};

impl Database {
    pub fn list_courses(&self) -> Result<Vec<Course>, DbError> {
        self.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, class_name, teacher_name, student_count, created_at FROM courses",
            )?;
            let rows = stmt
                .query_map([], map_course)?
                .collect::<Result<Vec<_>, _>>()?;
            Ok(rows)
        })
    }

    pub fn create_course(&self, new: &NewCourse) -> Result<Course, DbError> {
        let class_name = required(&new.class_name, "className")?;
        let id = Uuid::new_v4().to_string();
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO courses (id, class_name, teacher_name, student_count)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, class_name, new.teacher_name, new.student_count.unwrap_or(0)],
            )?;
            let course = conn.query_row(
                "SELECT id, class_name, teacher_name, student_count, created_at
                 FROM courses WHERE id = ?1",
                [&id],
                map_course,
            )?;
            Ok(course)
        })
    }

    pub fn update_course(&self, id: &str, patch: &CoursePatch) -> Result<Option<Course>, DbError> {
        self.with_conn(|conn| {
            let mut sets = SetClauses::new();
            sets.push("class_name", &patch.class_name);
            sets.push("teacher_name", &patch.teacher_name);
            sets.push("student_count", &patch.student_count);

            if !sets.is_empty() {
                sets.apply(conn, "courses", id)?;
            }
            fetch_course(conn, id)
        })
    }

    pub fn delete_course(&self, id: &str) -> Result<bool, DbError> {
        self.with_conn(|conn| {
            let affected = conn.execute("DELETE FROM courses WHERE id = ?1", [id])?;
            Ok(affected > 0)
        })
    }
}

fn fetch_course(conn: &Connection, id: &str) -> Result<Option<Course>, DbError> {
    let row = conn
        .query_row(
            "SELECT id, class_name, teacher_name, student_count, created_at
             FROM courses WHERE id = ?1",
            [id],
            map_course,
        )
        .optional()?;
    Ok(row)
}

fn map_course(row: &rusqlite::Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        class_name: row.get(1)?,
        teacher_name: row.get(2)?,
        student_count: row.get(3)?,
        created_at: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_count_defaults_to_zero() {
        let db = Database::open_in_memory().unwrap();
        let course = db
            .create_course(&NewCourse {
                class_name: Some("Class 5".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(course.student_count, 0);
    }

    #[test]
    fn partial_update_keeps_other_fields() {
        let db = Database::open_in_memory().unwrap();
        let course = db
            .create_course(&NewCourse {
                class_name: Some("Class 5".into()),
                teacher_name: Some("R. Sharma".into()),
                student_count: Some(34),
            })
            .unwrap();

        let updated = db
            .update_course(
                &course.id,
                &CoursePatch {
                    student_count: Some(35),
                    ..Default::default()
                },
            )
            .unwrap()
            .expect("row exists");

        assert_eq!(updated.student_count, 35);
        assert_eq!(updated.class_name, "Class 5");
        assert_eq!(updated.teacher_name.as_deref(), Some("R. Sharma"));
    }

    #[test]
    fn missing_class_name_is_a_validation_error() {
        let db = Database::open_in_memory().unwrap();
        let err = db.create_course(&NewCourse::default()).unwrap_err();
        assert!(matches!(err, DbError::Validation(_)));
    }
}
