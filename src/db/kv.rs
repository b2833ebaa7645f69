//! SQLite-backed storage for the attendance state document.

use crate::core::store::StateBackend;
use crate::db::log::oblog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{OptionalExtension, params};

/// Stores each key as one row of the `kv` table and mirrors recorded
/// transitions into the internal `log` table.
pub struct SqliteBackend {
    pool: DbPool,
}

impl SqliteBackend {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl StateBackend for SqliteBackend {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    /// Single upsert statement, so readers never see a partial document.
    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn record_event(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        oblog(&self.pool.conn, operation, target, message)
    }
}
