/// ByeAI engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reputation a voter starts with, and the floor it can never drop below.
pub const MIN_REPUTATION: i64 = 1;

/// Smallest threshold any item can have, regardless of popularity.
pub const MIN_FLAG_THRESHOLD: u64 = 15;

/// Multiplier applied to `sqrt(popularity)` when deriving the threshold.
pub const THRESHOLD_SCALE: f64 = 0.05;

/// Scores strictly below this mark an item as clearly rejected.
pub const PENALTY_SCORE_CUTOFF: f64 = -2.0;

/// Reputation delta applied to every voter on a flagged item.
pub const REWARD_STEP: i64 = 1;

/// Reputation delta applied to every voter on a clearly rejected item.
pub const PENALTY_STEP: i64 = 1;

/// Label reported as the most common category of an item with no votes.
pub const FALLBACK_CATEGORY_LABEL: &str = "Other";
