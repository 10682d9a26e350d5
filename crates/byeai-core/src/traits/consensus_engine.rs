//! IConsensusEngine — the verbs the consensus core exposes to its host.

use crate::errors::ByeaiResult;
use crate::models::{
    FlaggedItem, ItemStatus, ReputationLogEntry, RevisionReport, VoteResult, VoteSubmission,
    Voter,
};

/// Crowd-consensus scoring engine.
///
/// `submit_vote` and `revise_reputations` are the two mutating verbs; the rest
/// are read-only projections used by reporting surfaces.
#[allow(async_fn_in_trait)]
pub trait IConsensusEngine: Send + Sync {
    /// Record a weighted vote and report the item's consensus state.
    ///
    /// Fails with `DuplicateVote` if the (voter, item, category) triple has
    /// already voted; nothing is mutated in that case.
    async fn submit_vote(&self, submission: &VoteSubmission) -> ByeaiResult<VoteResult>;

    /// Re-evaluate the reputation of every voter on an item.
    async fn revise_reputations(&self, item_id: &str) -> ByeaiResult<RevisionReport>;

    /// Score, threshold, and per-category vote counts for one item.
    async fn get_status(&self, item_id: &str) -> ByeaiResult<ItemStatus>;

    /// Flagged items among `item_ids`. Unknown ids are skipped.
    async fn list_flagged(&self, item_ids: &[String]) -> ByeaiResult<Vec<FlaggedItem>>;

    async fn get_voter(&self, voter_id: &str) -> ByeaiResult<Option<Voter>>;

    /// Reputation changes for a voter, oldest first.
    async fn reputation_history(&self, voter_id: &str) -> ByeaiResult<Vec<ReputationLogEntry>>;
}
