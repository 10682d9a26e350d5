use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Category;

/// Immediate answer to an accepted vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteResult {
    pub new_score: f64,
    pub threshold: u64,
    pub is_flagged: bool,
    /// Reputation the vote was weighted with.
    pub voter_reputation: i64,
}

/// Read-only consensus projection of one item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStatus {
    pub item_id: String,
    pub score: f64,
    pub threshold: u64,
    pub is_flagged: bool,
    pub popularity_metric: u64,
    pub total_votes: u64,
    pub votes_by_category: BTreeMap<Category, u64>,
    /// Category with the most votes, or the fallback label when there are none.
    pub most_common_category: String,
}

/// A flagged item as reported to list queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlaggedItem {
    pub item_id: String,
    pub category: String,
    pub score: f64,
    pub threshold: u64,
    pub vote_count: u64,
}

/// Summary of one reputation revision pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevisionReport {
    pub item_id: String,
    /// False when the item did not exist and the pass was a no-op.
    pub item_found: bool,
    pub flagged: bool,
    /// Votes visited (one step per vote, not per distinct voter).
    pub votes_examined: usize,
    /// Reputation log entries written.
    pub changes: usize,
}
