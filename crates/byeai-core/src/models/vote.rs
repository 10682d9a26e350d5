use serde::{Deserialize, Serialize};

use super::Category;

/// A recorded vote. At most one exists per (voter, item, category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub id: i64,
    pub voter_id: String,
    pub item_id: String,
    pub category: Category,
    /// Client-supplied logical time; never checked against the server clock.
    pub timestamp: i64,
}

/// Input to a vote submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSubmission {
    pub voter_id: String,
    pub item_id: String,
    pub category: Category,
    pub timestamp: i64,
    /// Popularity reading already resolved by the caller.
    pub observed_popularity: u64,
}

impl VoteSubmission {
    pub fn new(
        voter_id: impl Into<String>,
        item_id: impl Into<String>,
        category: Category,
        timestamp: i64,
        observed_popularity: u64,
    ) -> Self {
        Self {
            voter_id: voter_id.into(),
            item_id: item_id.into(),
            category,
            timestamp,
            observed_popularity,
        }
    }
}
