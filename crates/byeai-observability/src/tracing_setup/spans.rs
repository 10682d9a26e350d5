//! One span per engine operation. Consensus code enters these instead of
//! building its own, so every subscriber sees the same names and fields.

use tracing::{info_span, Span};

pub const SUBMIT: &str = "byeai.submit";
pub const REVISION: &str = "byeai.revision";
pub const LOOKUP: &str = "byeai.lookup";

/// Wraps one vote submission. `weight` and `score` start empty and are
/// recorded once the vote lands.
pub fn submit(voter_id: &str, item_id: &str, category: &str) -> Span {
    info_span!(
        "byeai.submit",
        voter_id,
        item_id,
        category,
        weight = tracing::field::Empty,
        score = tracing::field::Empty
    )
}

/// Wraps one reputation revision pass over an item's voters.
pub fn revision(item_id: &str) -> Span {
    info_span!("byeai.revision", item_id, changes = tracing::field::Empty)
}

/// Wraps one external popularity request.
pub fn lookup(item_id: &str) -> Span {
    info_span!("byeai.lookup", item_id)
}
