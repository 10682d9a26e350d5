//! Error taxonomy for the consensus engine.
//!
//! `ByeaiError` is the single error type returned across crate boundaries.
//! Storage failures nest as [`StorageError`] and surface to callers as
//! "store unavailable"; a ledger conflict is always [`ByeaiError::DuplicateVote`].

mod storage_error;

pub use storage_error::StorageError;

/// Result alias used throughout the workspace.
pub type ByeaiResult<T> = Result<T, ByeaiError>;

/// Top-level error for every engine operation.
#[derive(Debug, thiserror::Error)]
pub enum ByeaiError {
    /// A vote for this (voter, item, category) triple already exists.
    #[error("voter {voter_id} has already voted on item {item_id} in category {category}")]
    DuplicateVote {
        voter_id: String,
        item_id: String,
        category: String,
    },

    /// Status was requested for an item nobody has voted on.
    #[error("item not found: {item_id}")]
    ItemNotFound { item_id: String },

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("config error: {0}")]
    ConfigError(String),

    /// The background revision scheduler is no longer accepting work.
    #[error("revision scheduler closed: {0}")]
    SchedulerClosed(String),
}

impl ByeaiError {
    /// True for failures where the store could not complete the operation.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, ByeaiError::StorageError(_))
    }

    /// True when the error is a ledger conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ByeaiError::DuplicateVote { .. })
    }
}
