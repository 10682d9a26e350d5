//! Voter rows.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use byeai_core::constants::MIN_REPUTATION;
use byeai_core::errors::ByeaiResult;
use byeai_core::models::Voter;

use super::{now_rfc3339, parse_timestamp};
use crate::to_storage_err;

/// Get a voter by ID.
pub fn get_voter(conn: &Connection, voter_id: &str) -> ByeaiResult<Option<Voter>> {
    let row = conn
        .query_row(
            "SELECT voter_id, reputation_points, created_at FROM voters WHERE voter_id = ?1",
            params![voter_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, String>(2)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match row {
        Some((voter_id, reputation_points, created_at)) => Ok(Some(Voter {
            voter_id,
            reputation_points,
            created_at: parse_timestamp(&created_at)?,
        })),
        None => Ok(None),
    }
}

/// Return the voter, creating it at minimum reputation if it does not exist.
pub fn ensure_voter(conn: &Connection, voter_id: &str) -> ByeaiResult<Voter> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO voters (voter_id, reputation_points, created_at)
             VALUES (?1, ?2, ?3)",
            params![voter_id, MIN_REPUTATION, now_rfc3339()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if inserted > 0 {
        debug!(voter_id, "created voter");
    }

    get_voter(conn, voter_id)?
        .ok_or_else(|| to_storage_err(format!("voter {voter_id} vanished after upsert")))
}

/// Overwrite a voter's reputation. The caller enforces the floor.
pub fn set_reputation(conn: &Connection, voter_id: &str, reputation_points: i64) -> ByeaiResult<()> {
    debug!(voter_id, reputation_points, "setting reputation");
    conn.execute(
        "UPDATE voters SET reputation_points = ?2 WHERE voter_id = ?1",
        params![voter_id, reputation_points],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Total number of voters.
pub fn count_voters(conn: &Connection) -> ByeaiResult<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM voters", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as u64)
}
