//! Data model: voters, items, votes, the reputation audit log, and the
//! projections the engine returns to callers.

mod category;
mod item;
mod quota;
mod reputation_log;
mod results;
mod vote;
mod voter;

pub use category::Category;
pub use item::Item;
pub use quota::QuotaStatus;
pub use reputation_log::ReputationLogEntry;
pub use results::{FlaggedItem, ItemStatus, RevisionReport, VoteResult};
pub use vote::{Vote, VoteSubmission};
pub use voter::Voter;
