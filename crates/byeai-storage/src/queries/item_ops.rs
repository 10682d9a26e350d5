//! Item rows: creation, the popularity high-water mark, and score updates.

use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use byeai_core::errors::ByeaiResult;
use byeai_core::models::Item;

use super::{now_rfc3339, parse_timestamp, popularity_from_sql, popularity_to_sql};
use crate::to_storage_err;

/// Get an item by ID.
pub fn get_item(conn: &Connection, item_id: &str) -> ByeaiResult<Option<Item>> {
    let row = conn
        .query_row(
            "SELECT item_id, score, popularity_metric, created_at, updated_at
             FROM items WHERE item_id = ?1",
            params![item_id],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, f64>(1)?,
                    row.get::<_, i64>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    match row {
        Some((item_id, score, popularity, created_at, updated_at)) => Ok(Some(Item {
            item_id,
            score,
            popularity_metric: popularity_from_sql(popularity),
            created_at: parse_timestamp(&created_at)?,
            updated_at: parse_timestamp(&updated_at)?,
        })),
        None => Ok(None),
    }
}

/// Get every item in `item_ids` that exists, in input order.
pub fn get_items(conn: &Connection, item_ids: &[String]) -> ByeaiResult<Vec<Item>> {
    let mut items = Vec::with_capacity(item_ids.len());
    for item_id in item_ids {
        if let Some(item) = get_item(conn, item_id)? {
            items.push(item);
        }
    }
    Ok(items)
}

/// Create the item seeded with `observed_popularity`, or raise an existing
/// item's popularity to `max(existing, observed_popularity)`.
pub fn upsert_item(conn: &Connection, item_id: &str, observed_popularity: u64) -> ByeaiResult<Item> {
    debug!(item_id, observed_popularity, "upserting item");
    let now = now_rfc3339();
    conn.execute(
        "INSERT INTO items (item_id, score, popularity_metric, created_at, updated_at)
         VALUES (?1, 0.0, ?2, ?3, ?3)
         ON CONFLICT(item_id) DO UPDATE SET
            popularity_metric = MAX(items.popularity_metric, excluded.popularity_metric),
            updated_at = excluded.updated_at",
        params![item_id, popularity_to_sql(observed_popularity), now],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    get_item(conn, item_id)?
        .ok_or_else(|| to_storage_err(format!("item {item_id} vanished after upsert")))
}

/// Add `delta` to an item's score in place and return the new score.
///
/// Votes only ever pass positive weights; negative deltas come from
/// downstream adjustments.
pub fn adjust_score(conn: &Connection, item_id: &str, delta: f64) -> ByeaiResult<f64> {
    debug!(item_id, delta, "adjusting score");
    let rows = conn
        .execute(
            "UPDATE items SET score = score + ?2, updated_at = ?3 WHERE item_id = ?1",
            params![item_id, delta, now_rfc3339()],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if rows == 0 {
        return Err(byeai_core::ByeaiError::ItemNotFound {
            item_id: item_id.to_string(),
        });
    }

    conn.query_row(
        "SELECT score FROM items WHERE item_id = ?1",
        params![item_id],
        |row| row.get(0),
    )
    .map_err(|e| to_storage_err(e.to_string()))
}

/// Total number of items.
pub fn count_items(conn: &Connection) -> ByeaiResult<u64> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM items", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as u64)
}
