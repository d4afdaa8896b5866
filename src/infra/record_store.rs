//! Row-level access to the `sum` table.

use crate::error::AppError;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// One row of the `sum` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRow {
    pub id: String,
    pub drug_name: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

impl RecordRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            drug_name: row.get(1)?,
            created_at: row.get(2)?,
            updated_at: row.get(3)?,
            deleted_at: row.get(4)?,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, drug_name, created_at, updated_at, deleted_at FROM sum";

/// Store handle over a borrowed connection.
pub struct RecordStore<'c> {
    conn: &'c Connection,
}

impl<'c> RecordStore<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Fails with a constraint error when `id` already exists.
    pub fn insert(&self, row: &RecordRow) -> Result<(), AppError> {
        self.conn.execute(
            "INSERT INTO sum (id, drug_name, created_at, updated_at, deleted_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![row.id, row.drug_name, row.created_at, row.updated_at, row.deleted_at],
        )?;
        Ok(())
    }

    /// Renames a row and moves `updated_at` forward. Returns affected rows; 0 means no match.
    ///
    /// `updated_at` always ends strictly after its previous value, even when the
    /// clock has not advanced since the last write.
    pub fn update_by_id(&self, id: &str, drug_name: &str, now: i64) -> Result<usize, AppError> {
        let n = self.conn.execute(
            "UPDATE sum SET drug_name = ?1, updated_at = MAX(?2, updated_at + 1) WHERE id = ?3",
            params![drug_name, now, id],
        )?;
        Ok(n)
    }

    /// Idempotent: deleting a missing id is not an error.
    pub fn delete_by_id(&self, id: &str) -> Result<usize, AppError> {
        let n = self.conn.execute("DELETE FROM sum WHERE id = ?1", [id])?;
        Ok(n)
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<RecordRow>, AppError> {
        let row = self
            .conn
            .query_row(
                &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                [id],
                RecordRow::from_row,
            )
            .optional()?;
        Ok(row)
    }

    /// Window over all rows in insertion order.
    pub fn list_page(&self, offset: i64, limit: i64) -> Result<Vec<RecordRow>, AppError> {
        let mut stmt = self.conn.prepare(&format!(
            "{} ORDER BY created_at ASC, rowid ASC LIMIT ?1 OFFSET ?2",
            SELECT_COLUMNS
        ))?;
        let rows = stmt.query_map(params![limit, offset], RecordRow::from_row)?;
        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    pub fn count(&self) -> Result<i64, AppError> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM sum", [], |r| r.get(0))?;
        Ok(n)
    }
}
