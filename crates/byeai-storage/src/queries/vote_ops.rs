//! The vote ledger: one row per (voter, item, category).

use rusqlite::{params, Connection, ErrorCode};
use tracing::debug;

use byeai_core::errors::ByeaiResult;
use byeai_core::models::{Category, Vote};

use crate::to_storage_err;

/// Outcome of a ledger insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteInsert {
    /// The vote was written; carries its row id.
    Recorded(i64),
    /// A vote for the same (voter, item, category) already exists.
    AlreadyVoted,
}

/// Insert a vote, relying on the UNIQUE constraint for exclusivity.
///
/// Any constraint violation is reported as `AlreadyVoted`: the ledger fails
/// closed rather than risk counting a vote twice.
pub fn insert_vote(
    conn: &Connection,
    voter_id: &str,
    item_id: &str,
    category: Category,
    timestamp: i64,
) -> ByeaiResult<VoteInsert> {
    let result = conn.execute(
        "INSERT INTO votes (voter_id, item_id, category, timestamp) VALUES (?1, ?2, ?3, ?4)",
        params![voter_id, item_id, category.as_str(), timestamp],
    );

    match result {
        Ok(_) => {
            let id = conn.last_insert_rowid();
            debug!(voter_id, item_id, %category, id, "vote recorded");
            Ok(VoteInsert::Recorded(id))
        }
        Err(rusqlite::Error::SqliteFailure(err, _))
            if err.code == ErrorCode::ConstraintViolation =>
        {
            debug!(voter_id, item_id, %category, "vote rejected by ledger constraint");
            Ok(VoteInsert::AlreadyVoted)
        }
        Err(e) => Err(to_storage_err(e.to_string())),
    }
}

/// Whether a vote exists for the triple.
pub fn has_voted(
    conn: &Connection,
    voter_id: &str,
    item_id: &str,
    category: Category,
) -> ByeaiResult<bool> {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM votes WHERE voter_id = ?1 AND item_id = ?2 AND category = ?3
             )",
            params![voter_id, item_id, category.as_str()],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(exists != 0)
}

/// Every vote on an item, in insertion order.
pub fn list_votes_for_item(conn: &Connection, item_id: &str) -> ByeaiResult<Vec<Vote>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, voter_id, item_id, category, timestamp
             FROM votes WHERE item_id = ?1 ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![item_id], |row| {
            Ok(Vote {
                id: row.get(0)?,
                voter_id: row.get(1)?,
                item_id: row.get(2)?,
                category: Category::parse(&row.get::<_, String>(3)?),
                timestamp: row.get(4)?,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row.map_err(|e| to_storage_err(e.to_string()))?);
    }
    Ok(results)
}

/// Number of votes on an item, across all categories.
pub fn count_votes_for_item(conn: &Connection, item_id: &str) -> ByeaiResult<u64> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM votes WHERE item_id = ?1",
            params![item_id],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as u64)
}
