//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with an `event` field naming it.

/// A vote passed the ledger and was added to the item's score.
pub fn vote_recorded(voter_id: &str, item_id: &str, category: &str, weight: f64, new_score: f64) {
    tracing::info!(
        event = "vote_recorded",
        voter_id = %voter_id,
        item_id = %item_id,
        category = %category,
        weight = weight,
        new_score = new_score,
        "vote recorded"
    );
}

/// A repeat vote for the same (voter, item, category) triple was refused.
pub fn duplicate_vote_rejected(voter_id: &str, item_id: &str, category: &str) {
    tracing::info!(
        event = "duplicate_vote_rejected",
        voter_id = %voter_id,
        item_id = %item_id,
        category = %category,
        "duplicate vote rejected"
    );
}

/// A revision pass finished and committed.
pub fn reputation_revised(item_id: &str, flagged: bool, votes_examined: usize, changes: usize) {
    tracing::info!(
        event = "reputation_revised",
        item_id = %item_id,
        flagged = flagged,
        votes_examined = votes_examined,
        changes = changes,
        "reputation revision completed"
    );
}

/// A revision pass failed and was rolled back. It is not retried.
pub fn revision_failed(item_id: &str, error: &str) {
    tracing::warn!(
        event = "revision_failed",
        item_id = %item_id,
        error = %error,
        "reputation revision failed"
    );
}

/// A popularity reading could not be obtained and the fallback was used.
pub fn popularity_degraded(item_id: &str, reason: &str, fallback: u64) {
    tracing::warn!(
        event = "popularity_degraded",
        item_id = %item_id,
        reason = %reason,
        fallback = fallback,
        "popularity lookup degraded to fallback"
    );
}

/// The daily lookup quota is used up.
pub fn lookup_quota_exhausted(requests_used: u32, daily_quota: u32) {
    tracing::warn!(
        event = "lookup_quota_exhausted",
        requests_used = requests_used,
        daily_quota = daily_quota,
        "popularity lookup quota exhausted"
    );
}
