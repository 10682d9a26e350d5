//! Read-only consensus projections: per-item status and flagged listings.

use std::collections::BTreeMap;

use rusqlite::Connection;

use byeai_core::constants::FALLBACK_CATEGORY_LABEL;
use byeai_core::errors::{ByeaiError, ByeaiResult};
use byeai_core::models::{Category, FlaggedItem, ItemStatus};
use byeai_storage::queries::{aggregation, item_ops};

use crate::scoring;

/// Label of the most-voted category; counts arrive sorted (count desc, tag asc).
fn most_common(counts: &[(Category, u64)]) -> String {
    counts
        .first()
        .map(|(category, _)| category.to_string())
        .unwrap_or_else(|| FALLBACK_CATEGORY_LABEL.to_string())
}

/// Status of one item. [`ByeaiError::ItemNotFound`] if nobody has voted on it.
pub fn get_status(conn: &Connection, item_id: &str) -> ByeaiResult<ItemStatus> {
    let item = item_ops::get_item(conn, item_id)?.ok_or_else(|| ByeaiError::ItemNotFound {
        item_id: item_id.to_string(),
    })?;
    let counts = aggregation::category_counts(conn, item_id)?;
    let threshold = scoring::threshold(item.popularity_metric);

    Ok(ItemStatus {
        item_id: item.item_id,
        score: item.score,
        threshold,
        is_flagged: scoring::is_flagged(item.score, threshold),
        popularity_metric: item.popularity_metric,
        total_votes: counts.iter().map(|(_, n)| n).sum(),
        most_common_category: most_common(&counts),
        votes_by_category: counts.into_iter().collect::<BTreeMap<_, _>>(),
    })
}

/// Flagged items among `item_ids`, in request order. Unknown ids are skipped.
pub fn list_flagged(conn: &Connection, item_ids: &[String]) -> ByeaiResult<Vec<FlaggedItem>> {
    let mut flagged = Vec::new();
    for item in item_ops::get_items(conn, item_ids)? {
        let threshold = scoring::threshold(item.popularity_metric);
        if !scoring::is_flagged(item.score, threshold) {
            continue;
        }
        let counts = aggregation::category_counts(conn, &item.item_id)?;
        flagged.push(FlaggedItem {
            category: most_common(&counts),
            vote_count: counts.iter().map(|(_, n)| n).sum(),
            item_id: item.item_id,
            score: item.score,
            threshold,
        });
    }
    Ok(flagged)
}
