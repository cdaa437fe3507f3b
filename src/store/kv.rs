//! Key-value storage layer backing the record store.
//!
//! One SQLite table, one row per named key. Collection rows hold the full
//! JSON array for their entity type; the session lives under its own key in
//! the same table. All partitioning between entity types happens at the
//! key-naming level, never inside a payload.

use std::path::Path;

use rusqlite::{params, Connection, OptionalExtension};
use tracing;

use super::StoreError;

/// Open a SQLite connection to the given path and run migrations.
pub fn open_database(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    Ok(conn)
}

/// Open an in-memory database (for testing).
pub fn open_memory_database() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    run_migrations(&conn)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    let current_version = get_current_version(conn);

    let migrations: Vec<(i64, &str)> = vec![(
        1,
        include_str!("../../resources/migrations/001_collections.sql"),
    )];

    for (version, sql) in migrations {
        if version > current_version {
            tracing::info!("Running migration v{version}");
            conn.execute_batch(sql)
                .map_err(|e| StoreError::MigrationFailed {
                    version,
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(())
}

/// Get the current schema version (0 if no schema exists yet).
fn get_current_version(conn: &Connection) -> i64 {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, i64>(0)
    })
    .unwrap_or(0)
}

/// Read the raw payload stored under `name`, if any.
pub(crate) fn read_key(conn: &Connection, name: &str) -> Result<Option<String>, StoreError> {
    let payload = conn
        .query_row(
            "SELECT payload FROM collections WHERE name = ?1",
            params![name],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(payload)
}

/// Write `payload` under `name`, replacing any previous value.
pub(crate) fn write_key(conn: &Connection, name: &str, payload: &str) -> Result<(), StoreError> {
    conn.execute(
        "INSERT OR REPLACE INTO collections (name, payload) VALUES (?1, ?2)",
        params![name, payload],
    )?;
    Ok(())
}

/// Remove the row stored under `name`. No-op if absent.
pub(crate) fn delete_key(conn: &Connection, name: &str) -> Result<(), StoreError> {
    conn.execute("DELETE FROM collections WHERE name = ?1", params![name])?;
    Ok(())
}

/// List all keys currently present (for diagnostics).
pub fn key_names(conn: &Connection) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare("SELECT name FROM collections ORDER BY name")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.map(|r| r.map_err(StoreError::from)).collect()
}
