use serde::{Deserialize, Serialize};

/// Append-only record of one reputation change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReputationLogEntry {
    pub id: i64,
    pub voter_id: String,
    pub old_reputation: i64,
    pub new_reputation: i64,
    pub reason: String,
    /// Unix seconds, server clock.
    pub timestamp: i64,
}
