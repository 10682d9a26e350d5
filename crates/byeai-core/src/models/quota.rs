use serde::{Deserialize, Serialize};

/// Daily usage of the popularity lookup quota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuotaStatus {
    pub requests_used: u32,
    pub requests_remaining: u32,
    pub quota_percentage: f64,
}
