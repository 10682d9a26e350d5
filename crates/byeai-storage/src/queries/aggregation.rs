//! Grouped counts over the vote ledger.

use rusqlite::{params, Connection};

use byeai_core::errors::ByeaiResult;
use byeai_core::models::Category;

use crate::to_storage_err;

/// Votes per category on one item, most-voted first.
/// Equal counts are ordered by category tag so the result is deterministic.
pub fn category_counts(conn: &Connection, item_id: &str) -> ByeaiResult<Vec<(Category, u64)>> {
    let mut stmt = conn
        .prepare(
            "SELECT category, COUNT(*) AS n
             FROM votes WHERE item_id = ?1
             GROUP BY category
             ORDER BY n DESC, category ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![item_id], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut results = Vec::new();
    for row in rows {
        let (tag, count) = row.map_err(|e| to_storage_err(e.to_string()))?;
        results.push((Category::parse(&tag), count.max(0) as u64));
    }
    Ok(results)
}
