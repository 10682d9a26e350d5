//! Configuration for the external popularity (view-count) lookup.
//!
//! # Examples
//!
//! ```
//! use byeai_core::config::LookupConfig;
//!
//! let config = LookupConfig::default();
//! assert_eq!(config.daily_quota, 9_000);
//! assert_eq!(config.fallback_popularity, 100_000);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;

/// Popularity lookup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// API key for the view-count service. Lookups degrade to the fallback without one.
    pub api_key: Option<String>,
    /// Base URL of the view-count service.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Maximum requests per UTC day.
    pub daily_quota: u32,
    /// Value returned whenever a reading cannot be obtained.
    pub fallback_popularity: u64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: defaults::DEFAULT_LOOKUP_BASE_URL.to_string(),
            timeout_secs: defaults::DEFAULT_LOOKUP_TIMEOUT_SECS,
            daily_quota: defaults::DEFAULT_LOOKUP_DAILY_QUOTA,
            fallback_popularity: defaults::DEFAULT_FALLBACK_POPULARITY,
        }
    }
}
