//! ConsensusEngine — implements `IConsensusEngine` over the SQLite store and
//! owns the background revision scheduler.

use std::sync::Arc;

use tracing::instrument;

use byeai_core::config::ByeaiConfig;
use byeai_core::errors::ByeaiResult;
use byeai_core::models::{
    FlaggedItem, ItemStatus, ReputationLogEntry, RevisionReport, VoteResult, VoteSubmission,
    Voter,
};
use byeai_core::traits::IConsensusEngine;
use byeai_storage::queries::{reputation_log_ops, voter_ops};
use byeai_storage::StorageEngine;

use crate::scheduler::{RevisionHandle, RevisionScheduler};
use crate::{accumulator, revision, status};

/// The consensus engine. Holds the storage engine and the revision scheduler.
pub struct ConsensusEngine {
    storage: Arc<StorageEngine>,
    scheduler: RevisionScheduler,
    config: ByeaiConfig,
}

impl ConsensusEngine {
    /// Build an engine over an open store. Must be called from within a
    /// tokio runtime, since it spawns the revision worker.
    pub fn new(storage: Arc<StorageEngine>, config: ByeaiConfig) -> Self {
        let scheduler = RevisionScheduler::start(Arc::clone(&storage), &config.revision);
        Self {
            storage,
            scheduler,
            config,
        }
    }

    /// Open the store described by `config.storage` and build an engine on it.
    pub fn open(config: ByeaiConfig) -> ByeaiResult<Self> {
        let storage = Arc::new(StorageEngine::open_with_config(&config.storage)?);
        Ok(Self::new(storage, config))
    }

    /// In-memory engine with default config (for testing).
    pub fn open_in_memory() -> ByeaiResult<Self> {
        let storage = Arc::new(StorageEngine::open_in_memory()?);
        Ok(Self::new(storage, ByeaiConfig::default()))
    }

    pub fn storage(&self) -> &Arc<StorageEngine> {
        &self.storage
    }

    pub fn config(&self) -> &ByeaiConfig {
        &self.config
    }

    /// Submit a vote, then queue the follow-up revision pass for its item.
    ///
    /// The vote result is final before the pass is queued, and queueing never
    /// waits on revision backlog. A scheduling failure does not undo the
    /// vote; it is returned in place of the handle.
    pub async fn submit_and_schedule(
        &self,
        submission: &VoteSubmission,
    ) -> ByeaiResult<(VoteResult, ByeaiResult<RevisionHandle>)> {
        let result = self.submit_vote(submission).await?;
        let handle = self.scheduler.schedule_nowait(&submission.item_id);
        Ok((result, handle))
    }

    /// Queue a revision pass without submitting a vote.
    pub async fn schedule_revision(&self, item_id: &str) -> ByeaiResult<RevisionHandle> {
        self.scheduler.schedule(item_id).await
    }

    pub fn scheduler_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Drain queued revision passes and stop the worker.
    pub async fn shutdown(&self) {
        self.scheduler.shutdown().await;
    }
}

impl IConsensusEngine for ConsensusEngine {
    #[instrument(skip(self, submission), fields(item_id = %submission.item_id))]
    async fn submit_vote(&self, submission: &VoteSubmission) -> ByeaiResult<VoteResult> {
        let submission = submission.clone();
        self.storage
            .write(move |conn| accumulator::submit_vote(conn, &submission))
            .await
    }

    async fn revise_reputations(&self, item_id: &str) -> ByeaiResult<RevisionReport> {
        self.storage
            .write(|conn| revision::revise_reputations(conn, item_id))
            .await
    }

    async fn get_status(&self, item_id: &str) -> ByeaiResult<ItemStatus> {
        self.storage
            .read(|conn| status::get_status(conn, item_id))
            .await
    }

    async fn list_flagged(&self, item_ids: &[String]) -> ByeaiResult<Vec<FlaggedItem>> {
        self.storage
            .read(|conn| status::list_flagged(conn, item_ids))
            .await
    }

    async fn get_voter(&self, voter_id: &str) -> ByeaiResult<Option<Voter>> {
        self.storage
            .read(|conn| voter_ops::get_voter(conn, voter_id))
            .await
    }

    async fn reputation_history(&self, voter_id: &str) -> ByeaiResult<Vec<ReputationLogEntry>> {
        self.storage
            .read(|conn| reputation_log_ops::list_for_voter(conn, voter_id))
            .await
    }
}
