use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_REPUTATION;

/// A pseudonymous client casting votes.
///
/// Created lazily on first vote; only the reputation revision pass changes
/// `reputation_points`, which never drops below [`MIN_REPUTATION`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    /// Opaque client-supplied identifier.
    pub voter_id: String,
    pub reputation_points: i64,
    pub created_at: DateTime<Utc>,
}

impl Voter {
    /// A voter seen for the first time.
    pub fn new(voter_id: impl Into<String>) -> Self {
        Self {
            voter_id: voter_id.into(),
            reputation_points: MIN_REPUTATION,
            created_at: Utc::now(),
        }
    }
}
