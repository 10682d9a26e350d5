//! # byeai-consensus
//!
//! The consensus core: reputation weighting, popularity-scaled flag
//! thresholds, the one-vote-per-category ledger, score accumulation, and the
//! reputation revision pass that runs after each accepted vote.
//!
//! Also hosts the popularity lookup collaborator the surrounding application
//! uses to resolve a reading before calling [`ConsensusEngine::submit_vote`].

pub mod accumulator;
pub mod engine;
pub mod ledger;
pub mod lookup;
pub mod revision;
pub mod scheduler;
pub mod scoring;
pub mod status;

pub use engine::ConsensusEngine;
pub use lookup::{FlagSource, PopularityResolver, PopularitySource, QuotaTracker, YouTubeLookup};
pub use scheduler::{RevisionHandle, RevisionScheduler};
