//! # byeai-core
//!
//! Foundation crate for the ByeAI crowd-consensus engine.
//! Defines the data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ByeaiConfig;
pub use errors::{ByeaiError, ByeaiResult};
pub use models::{
    Category, FlaggedItem, Item, ItemStatus, QuotaStatus, ReputationLogEntry, RevisionReport,
    Vote, VoteResult, VoteSubmission, Voter,
};
