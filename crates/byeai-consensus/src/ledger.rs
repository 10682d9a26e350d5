//! The vote ledger: one vote per (voter, item, category).
//!
//! Exclusivity comes from the store's UNIQUE constraint, never from a
//! check-then-insert, so concurrent submissions of the same triple admit
//! exactly one.

use rusqlite::Connection;

use byeai_core::errors::{ByeaiError, ByeaiResult};
use byeai_core::models::Category;
use byeai_observability::tracing_setup::events;
use byeai_storage::queries::vote_ops::{self, VoteInsert};

/// Whether `voter_id` already voted on `item_id` in `category`.
pub fn has_voted(
    conn: &Connection,
    voter_id: &str,
    item_id: &str,
    category: Category,
) -> ByeaiResult<bool> {
    vote_ops::has_voted(conn, voter_id, item_id, category)
}

/// Record a vote, returning its ledger id.
///
/// Fails with [`ByeaiError::DuplicateVote`] if the triple is already present.
pub fn record(
    conn: &Connection,
    voter_id: &str,
    item_id: &str,
    category: Category,
    timestamp: i64,
) -> ByeaiResult<i64> {
    match vote_ops::insert_vote(conn, voter_id, item_id, category, timestamp)? {
        VoteInsert::Recorded(id) => Ok(id),
        VoteInsert::AlreadyVoted => {
            events::duplicate_vote_rejected(voter_id, item_id, category.as_str());
            Err(ByeaiError::DuplicateVote {
                voter_id: voter_id.to_string(),
                item_id: item_id.to_string(),
                category: category.to_string(),
            })
        }
    }
}
