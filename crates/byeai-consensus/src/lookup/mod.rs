//! Popularity lookup collaborator.
//!
//! The consensus core never calls out for popularity itself: the surrounding
//! application resolves a reading with [`PopularityResolver`] and passes it in.
//! Every failure inside this module degrades to a fallback value.

mod quota;
mod resolver;
mod youtube;

pub use quota::QuotaTracker;
pub use resolver::{FlagSource, PopularityResolver, PopularitySource, ResolvedPopularity};
pub use youtube::{LookupError, YouTubeLookup};
