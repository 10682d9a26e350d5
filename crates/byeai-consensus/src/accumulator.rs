//! Consensus accumulator: applies one weighted vote to an item's score.

use rusqlite::Connection;

use byeai_core::errors::ByeaiResult;
use byeai_core::models::{VoteResult, VoteSubmission};
use byeai_observability::tracing_setup::{events, spans};
use byeai_storage::queries::{item_ops, voter_ops};
use byeai_storage::with_transaction;

use crate::{ledger, scoring};

/// Submit a vote as one unit of work.
///
/// Voter and item are created on first use. The item's popularity adopts
/// `observed_popularity` only if it is larger than what is stored. On a
/// duplicate the whole unit rolls back, so neither the voter, the item, nor
/// the score is touched.
pub fn submit_vote(conn: &Connection, submission: &VoteSubmission) -> ByeaiResult<VoteResult> {
    let span = spans::submit(
        &submission.voter_id,
        &submission.item_id,
        submission.category.as_str(),
    );
    let _entered = span.enter();

    let (result, weight) = with_transaction(conn, "submit_vote", |tx| {
        let voter = voter_ops::ensure_voter(tx, &submission.voter_id)?;
        let item = item_ops::upsert_item(tx, &submission.item_id, submission.observed_popularity)?;

        ledger::record(
            tx,
            &submission.voter_id,
            &submission.item_id,
            submission.category,
            submission.timestamp,
        )?;

        let weight = scoring::weight(voter.reputation_points);
        let new_score = item_ops::adjust_score(tx, &submission.item_id, weight)?;
        let threshold = scoring::threshold(item.popularity_metric);

        Ok((
            VoteResult {
                new_score,
                threshold,
                is_flagged: scoring::is_flagged(new_score, threshold),
                voter_reputation: voter.reputation_points,
            },
            weight,
        ))
    })?;

    span.record("weight", weight);
    span.record("score", result.new_score);
    events::vote_recorded(
        &submission.voter_id,
        &submission.item_id,
        submission.category.as_str(),
        weight,
        result.new_score,
    );
    Ok(result)
}
