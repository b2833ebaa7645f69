//! Schema migrations.
//!
//! Applied migrations are recorded in the `log` table as
//! `migration_applied` rows, so each one runs at most once per database.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Key/value table holding the serialized attendance state.
fn create_kv_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
}

fn create_log_operation_index(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation, target);")
}

type Migration = (&'static str, &'static str, fn(&Connection) -> rusqlite::Result<()>);

const MIGRATIONS: &[Migration] = &[
    (
        "20250301_0001_create_kv",
        "Created kv table for attendance state",
        create_kv_table,
    ),
    (
        "20250310_0002_log_operation_index",
        "Indexed log by operation and target",
        create_log_operation_index,
    ),
];

/// Public entry point: run all pending migrations.
///
/// Invoked by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, message, apply) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        apply(conn).map_err(|e| AppError::Migration(format!("{version}: {e}")))?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {version}"));
    }

    Ok(())
}
