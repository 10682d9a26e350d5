mod consensus_engine;
mod popularity_lookup;

pub use consensus_engine::IConsensusEngine;
pub use popularity_lookup::IPopularityLookup;
