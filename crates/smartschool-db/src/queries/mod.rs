mod admins;
mod admissions;
mod contacts;
mod courses;
mod events;
mod faculty;
mod gallery;
mod hero;
mod notices;
mod reviews;

use rusqlite::Connection;
use rusqlite::types::ToSql;

use crate::error::DbError;

/// Rejects a missing or empty required field before anything hits a table.
pub(crate) fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, DbError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DbError::Validation(format!("'{field}' is required"))),
    }
}

/// Accumulates `column = ?N` assignments for the fields a partial update
/// actually supplied; unspecified columns keep their stored value.
pub(crate) struct SetClauses<'a> {
    clauses: Vec<String>,
    values: Vec<&'a dyn ToSql>,
}

impl<'a> SetClauses<'a> {
    pub(crate) fn new() -> Self {
        Self {
            clauses: Vec::new(),
            values: Vec::new(),
        }
    }

    pub(crate) fn push<T: ToSql>(&mut self, column: &str, value: &'a Option<T>) {
        if let Some(v) = value {
            self.values.push(v);
            self.clauses.push(format!("{} = ?{}", column, self.values.len()));
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Runs `UPDATE <table> SET .. WHERE id = ..`; returns affected row count.
    pub(crate) fn apply(
        self,
        conn: &Connection,
        table: &str,
        id: &str,
    ) -> Result<usize, DbError> {
        let mut params: Vec<&dyn ToSql> = self.values;
        params.push(&id);
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            table,
            self.clauses.join(", "),
            params.len()
        );
        Ok(conn.execute(&sql, params.as_slice())?)
    }
}
