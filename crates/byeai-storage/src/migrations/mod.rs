//! Versioned schema migrations, applied in order at startup.
//!
//! Each migration runs in its own transaction together with its
//! `schema_version` row, so a crash mid-migration leaves the previous version.

mod v001_initial_schema;
mod v002_reputation_log;

use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use byeai_core::errors::{ByeaiError, ByeaiResult, StorageError};

use crate::to_storage_err;

type MigrationFn = fn(&Connection) -> ByeaiResult<()>;

/// All migrations in application order.
const MIGRATIONS: &[(u32, &str, MigrationFn)] = &[
    (1, "initial_schema", v001_initial_schema::migrate),
    (2, "reputation_log", v002_reputation_log::migrate),
];

/// Latest schema version this build knows about.
pub const LATEST_VERSION: u32 = 2;

/// Apply every migration newer than the stored schema version.
/// Returns the number of migrations applied.
pub fn run_migrations(conn: &Connection) -> ByeaiResult<usize> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version     INTEGER PRIMARY KEY,
            applied_at  TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );",
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    let current = current_version(conn)?;
    let mut applied = 0;

    for (version, name, migrate) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        info!(version, name, "applying migration");
        crate::with_transaction(conn, "migration", |tx| {
            migrate(tx).map_err(|e| {
                ByeaiError::StorageError(StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })
            })?;
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![version],
            )
            .map_err(|e| to_storage_err(e.to_string()))?;
            Ok(())
        })?;
        applied += 1;
    }

    Ok(applied)
}

/// Highest applied version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> ByeaiResult<u32> {
    let version: Option<u32> = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?
        .flatten();
    Ok(version.unwrap_or(0))
}
