//! Pure scoring functions: vote weight from reputation, flag threshold from
//! popularity. Neither can fail.

use byeai_core::constants::{MIN_FLAG_THRESHOLD, MIN_REPUTATION, THRESHOLD_SCALE};

/// Weight of one vote cast by a voter with `reputation_points`.
///
/// `1 + log2(r)`, with `r` clamped to at least 1 so the result is always
/// finite and never below 1.0.
pub fn weight(reputation_points: i64) -> f64 {
    let r = reputation_points.max(MIN_REPUTATION) as f64;
    1.0 + r.log2()
}

/// Score an item needs to be flagged, given its popularity metric.
///
/// Grows with the square root of popularity and never drops below 15.
pub fn threshold(popularity_metric: u64) -> u64 {
    let scaled = (THRESHOLD_SCALE * (popularity_metric as f64).sqrt()).ceil() as u64;
    scaled.max(MIN_FLAG_THRESHOLD)
}

/// Flagged once the score reaches the threshold (inclusive).
pub fn is_flagged(score: f64, threshold: u64) -> bool {
    score >= threshold as f64
}
