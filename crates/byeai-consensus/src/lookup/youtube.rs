//! View-count lookup against the YouTube Data API.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, Instrument};

use byeai_core::config::LookupConfig;
use byeai_core::errors::{ByeaiError, ByeaiResult};
use byeai_core::models::QuotaStatus;
use byeai_core::traits::IPopularityLookup;
use byeai_observability::tracing_setup::{events, spans};

use super::QuotaTracker;

/// Why a lookup produced no reading. Never leaves this module as an error;
/// every variant degrades to the configured fallback.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("daily quota exhausted")]
    QuotaExhausted,
    #[error("request refused with 403 (quota or key rejected)")]
    Forbidden,
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("request timed out")]
    Timeout,
    #[error("transport error: {0}")]
    Transport(String),
}

/// Popularity lookup backed by the `videos?part=statistics` endpoint.
pub struct YouTubeLookup {
    client: reqwest::Client,
    config: LookupConfig,
    quota: QuotaTracker,
}

impl YouTubeLookup {
    pub fn new(config: LookupConfig) -> ByeaiResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ByeaiError::ConfigError(format!("http client: {e}")))?;
        Ok(Self::with_client(config, client))
    }

    /// Use a caller-built client. Its own timeout settings apply.
    pub fn with_client(config: LookupConfig, client: reqwest::Client) -> Self {
        let quota = QuotaTracker::new(config.daily_quota);
        Self {
            client,
            config,
            quota,
        }
    }

    pub fn quota_status(&self) -> QuotaStatus {
        self.quota.status()
    }

    pub fn fallback(&self) -> u64 {
        self.config.fallback_popularity
    }

    /// One request. `Ok(0)` means the service answered but had no count.
    pub async fn fetch_view_count(&self, item_id: &str) -> Result<u64, LookupError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(LookupError::MissingApiKey)?;

        if !self.quota.try_reserve() {
            events::lookup_quota_exhausted(
                self.quota.status().requests_used,
                self.quota.daily_quota(),
            );
            return Err(LookupError::QuotaExhausted);
        }

        let url = format!("{}/videos", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .get(&url)
            .query(&[("part", "statistics"), ("id", item_id), ("key", api_key)])
            .send()
            .await
            .map_err(|e| {
                // Unanswered requests do not count against the quota.
                self.quota.release();
                transport_error(e)
            })?;

        match response.status().as_u16() {
            200 => {
                let body: Value = response.json().await.map_err(transport_error)?;
                Ok(view_count_from_body(&body))
            }
            403 => Err(LookupError::Forbidden),
            code => Err(LookupError::Status(code)),
        }
    }
}

/// The request URL carries the API key, so it is stripped before the error
/// is rendered anywhere.
fn transport_error(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Transport(e.without_url().to_string())
    }
}

/// `items[0].statistics.viewCount`, which the API sends as a string.
/// Anything missing or malformed reads as 0.
pub(crate) fn view_count_from_body(body: &Value) -> u64 {
    let count = body
        .get("items")
        .and_then(|items| items.get(0))
        .and_then(|item| item.get("statistics"))
        .and_then(|stats| stats.get("viewCount"));
    match count {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        _ => 0,
    }
}

impl IPopularityLookup for YouTubeLookup {
    async fn lookup(&self, item_id: &str) -> u64 {
        let fetched = self
            .fetch_view_count(item_id)
            .instrument(spans::lookup(item_id))
            .await;
        match fetched {
            Ok(count) => {
                debug!(item_id, count, "view count fetched");
                count
            }
            Err(e) => {
                events::popularity_degraded(item_id, &e.to_string(), self.fallback());
                self.fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn view_count_parses_string_field() {
        let body = json!({"items": [{"statistics": {"viewCount": "123456"}}]});
        assert_eq!(view_count_from_body(&body), 123_456);
    }

    #[test]
    fn view_count_missing_pieces_read_as_zero() {
        assert_eq!(view_count_from_body(&json!({})), 0);
        assert_eq!(view_count_from_body(&json!({"items": []})), 0);
        assert_eq!(view_count_from_body(&json!({"items": [{"statistics": {}}]})), 0);
        assert_eq!(
            view_count_from_body(&json!({"items": [{"statistics": {"viewCount": "lots"}}]})),
            0
        );
    }
}
