//! Raw SQL operations. No business logic — just persistence.

pub mod aggregation;
pub mod item_ops;
pub mod reputation_log_ops;
pub mod vote_ops;
pub mod voter_ops;

use chrono::{DateTime, Utc};

use byeai_core::errors::ByeaiResult;

use crate::to_storage_err;

/// Parse an RFC 3339 column written by this crate (or SQLite's `strftime`).
pub(crate) fn parse_timestamp(raw: &str) -> ByeaiResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {raw:?}: {e}")))
}

/// Current time in the same format SQLite defaults use.
pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// SQLite integers are signed; popularity readings saturate at `i64::MAX`.
pub(crate) fn popularity_to_sql(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

pub(crate) fn popularity_from_sql(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}
