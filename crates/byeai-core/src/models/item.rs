use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A piece of content (video) being voted on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: String,
    /// Running sum of vote weights, plus any downstream adjustments.
    pub score: f64,
    /// Audience-size proxy (view count). High-water mark: never decreases.
    pub popularity_metric: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
