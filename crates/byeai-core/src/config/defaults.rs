// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "byeai.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Popularity lookup ---
pub const DEFAULT_LOOKUP_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_LOOKUP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOOKUP_DAILY_QUOTA: u32 = 9_000;
pub const DEFAULT_FALLBACK_POPULARITY: u64 = 100_000;
pub const LOOKUP_API_KEY_ENV: &str = "YOUTUBE_API_KEY";

// --- Revision scheduler ---
pub const DEFAULT_REVISION_QUEUE_SIZE: usize = 1_024;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
