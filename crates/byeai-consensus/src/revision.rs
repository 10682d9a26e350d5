//! Reputation revision pass.
//!
//! Re-reads an item's consensus state and steps the reputation of every voter
//! on it: +1 when the item is flagged, -1 when its score is below the penalty
//! cutoff, nothing in between. Reputation never drops below the floor and a
//! log entry is written only when the value actually moves.
//!
//! The pass is not idempotent: running it twice applies the step twice.

use chrono::Utc;
use rusqlite::Connection;
use tracing::debug;

use byeai_core::constants::{MIN_REPUTATION, PENALTY_SCORE_CUTOFF, PENALTY_STEP, REWARD_STEP};
use byeai_core::errors::ByeaiResult;
use byeai_core::models::RevisionReport;
use byeai_observability::tracing_setup::{events, spans};
use byeai_storage::queries::{item_ops, reputation_log_ops, vote_ops, voter_ops};
use byeai_storage::with_transaction;

use crate::scoring;

/// Verdict the pass applies to every voter on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Reward,
    Penalize,
    Neutral,
}

impl Verdict {
    /// Derive the verdict from an item's score and threshold.
    pub fn from_consensus(score: f64, threshold: u64) -> Self {
        if scoring::is_flagged(score, threshold) {
            Verdict::Reward
        } else if score < PENALTY_SCORE_CUTOFF {
            Verdict::Penalize
        } else {
            Verdict::Neutral
        }
    }

    /// Reputation after one step, floored at the minimum.
    pub fn apply(self, reputation_points: i64) -> i64 {
        let next = match self {
            Verdict::Reward => reputation_points + REWARD_STEP,
            Verdict::Penalize => reputation_points - PENALTY_STEP,
            Verdict::Neutral => reputation_points,
        };
        next.max(MIN_REPUTATION)
    }
}

/// Audit reason recorded for every change made on behalf of `item_id`.
pub fn revision_reason(item_id: &str) -> String {
    format!("Consensus update for video {item_id}")
}

/// Run one revision pass over `item_id` in its own transaction.
///
/// A missing item is a no-op. Steps are applied once per recorded vote, so a
/// voter with votes in two categories moves two steps.
pub fn revise_reputations(conn: &Connection, item_id: &str) -> ByeaiResult<RevisionReport> {
    let span = spans::revision(item_id);
    let _entered = span.enter();

    let report = with_transaction(conn, "revise_reputations", |tx| {
        let Some(item) = item_ops::get_item(tx, item_id)? else {
            debug!(item_id, "revision skipped, item not found");
            return Ok(RevisionReport {
                item_id: item_id.to_string(),
                ..Default::default()
            });
        };

        let threshold = scoring::threshold(item.popularity_metric);
        let verdict = Verdict::from_consensus(item.score, threshold);
        let votes = vote_ops::list_votes_for_item(tx, item_id)?;

        let mut report = RevisionReport {
            item_id: item_id.to_string(),
            item_found: true,
            flagged: verdict == Verdict::Reward,
            votes_examined: votes.len(),
            changes: 0,
        };
        if verdict == Verdict::Neutral {
            return Ok(report);
        }

        let reason = revision_reason(item_id);
        let now = Utc::now().timestamp();
        for vote in &votes {
            let Some(voter) = voter_ops::get_voter(tx, &vote.voter_id)? else {
                continue;
            };
            let old = voter.reputation_points;
            let new = verdict.apply(old);
            if new == old {
                continue;
            }
            voter_ops::set_reputation(tx, &voter.voter_id, new)?;
            reputation_log_ops::insert_entry(tx, &voter.voter_id, old, new, &reason, now)?;
            report.changes += 1;
        }
        Ok(report)
    })?;

    if report.item_found {
        span.record("changes", report.changes);
        events::reputation_revised(
            item_id,
            report.flagged,
            report.votes_examined,
            report.changes,
        );
    }
    Ok(report)
}
