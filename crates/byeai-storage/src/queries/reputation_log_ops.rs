//! Append-only reputation log. Rows are never updated or deleted.

use rusqlite::{params, Connection};
use tracing::debug;

use byeai_core::errors::ByeaiResult;
use byeai_core::models::ReputationLogEntry;

use crate::to_storage_err;

/// Append one entry. Returns its row id.
pub fn insert_entry(
    conn: &Connection,
    voter_id: &str,
    old_reputation: i64,
    new_reputation: i64,
    reason: &str,
    timestamp: i64,
) -> ByeaiResult<i64> {
    debug!(voter_id, old_reputation, new_reputation, "appending reputation log entry");
    conn.execute(
        "INSERT INTO reputation_log (voter_id, old_reputation, new_reputation, reason, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![voter_id, old_reputation, new_reputation, reason, timestamp],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(conn.last_insert_rowid())
}

/// Entries for one voter, oldest first.
pub fn list_for_voter(conn: &Connection, voter_id: &str) -> ByeaiResult<Vec<ReputationLogEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, voter_id, old_reputation, new_reputation, reason, timestamp
             FROM reputation_log WHERE voter_id = ?1 ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![voter_id], row_to_entry)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(results)
}

/// Total number of entries.
pub fn count_entries(conn: &Connection) -> ByeaiResult<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM reputation_log", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as u64)
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<ReputationLogEntry> {
    Ok(ReputationLogEntry {
        id: row.get(0)?,
        voter_id: row.get(1)?,
        old_reputation: row.get(2)?,
        new_reputation: row.get(3)?,
        reason: row.get(4)?,
        timestamp: row.get(5)?,
    })
}
