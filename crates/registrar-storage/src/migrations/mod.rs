//! Versioned schema migrations. Each version runs once, inside its own
//! transaction, and is recorded in `schema_version`.

mod v001_initial_schema;
mod v002_registrations;

use rusqlite::Connection;

use registrar_core::errors::{RegistrarError, RegistrarResult, StorageError};

use crate::to_storage_err;

type Migration = fn(&Connection) -> RegistrarResult<()>;

/// (version, name, migration) in application order.
const MIGRATIONS: &[(u32, &str, Migration)] = &[
    (1, "initial_schema", v001_initial_schema::migrate),
    (2, "registrations", v002_registrations::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Bring the database up to [`LATEST_VERSION`]. Returns the resulting version.
pub fn run_migrations(conn: &Connection) -> RegistrarResult<u32> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            name        TEXT NOT NULL,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let mut current = current_version(conn)?;
    for &(version, name, migrate) in MIGRATIONS {
        if version <= current {
            continue;
        }
        apply(conn, version, name, migrate)?;
        tracing::info!(version, name, "applied schema migration");
        current = version;
    }
    Ok(current)
}

/// Highest applied version, 0 on a fresh database.
pub fn current_version(conn: &Connection) -> RegistrarResult<u32> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

fn apply(conn: &Connection, version: u32, name: &str, migrate: Migration) -> RegistrarResult<()> {
    let failed = |reason: String| {
        RegistrarError::StorageError(StorageError::MigrationFailed { version, reason })
    };

    let tx = conn
        .unchecked_transaction()
        .map_err(|e| failed(e.to_string()))?;
    migrate(&tx).map_err(|e| failed(e.to_string()))?;
    tx.execute(
        "INSERT INTO schema_version (version, name) VALUES (?1, ?2)",
        rusqlite::params![version, name],
    )
    .map_err(|e| failed(e.to_string()))?;
    tx.commit().map_err(|e| failed(e.to_string()))
}
