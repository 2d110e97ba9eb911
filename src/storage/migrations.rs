//! Database migrations for edudesk.
//!
//! Each migration upgrades the schema by one version. Migrations run
//! automatically when the database is opened.

use rusqlite::Connection;

use crate::error::EdudeskError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 for a new database.
pub fn get_version(conn: &Connection) -> Result<i32, EdudeskError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| EdudeskError::Database(format!("Failed to get schema version: {e}")))
}

fn set_version(conn: &Connection, version: i32) -> Result<(), EdudeskError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| EdudeskError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), EdudeskError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::debug!(version, "running migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

fn run_migration(conn: &Connection, version: i32) -> Result<(), EdudeskError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(EdudeskError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: one JSON document per store key.
fn migrate_v1(conn: &Connection) -> Result<(), EdudeskError> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS snapshots (
            key TEXT PRIMARY KEY,
            payload TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| EdudeskError::Database(format!("Migration v1 failed: {e}")))
}
