//! Workspace configuration, loaded from TOML.
//!
//! Every section is optional; missing keys fall back to [`defaults`].

pub mod defaults;
mod lookup_config;
mod observability_config;
mod revision_config;
mod storage_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use lookup_config::LookupConfig;
pub use observability_config::ObservabilityConfig;
pub use revision_config::RevisionConfig;
pub use storage_config::StorageConfig;

use crate::errors::{ByeaiError, ByeaiResult};

/// Top-level configuration for the engine and its collaborators.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ByeaiConfig {
    pub storage: StorageConfig,
    pub lookup: LookupConfig,
    pub revision: RevisionConfig,
    pub observability: ObservabilityConfig,
}

impl ByeaiConfig {
    /// Parse a TOML document. An empty document yields all defaults.
    pub fn from_toml(toml_str: &str) -> ByeaiResult<Self> {
        toml::from_str(toml_str).map_err(|e| ByeaiError::ConfigError(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> ByeaiResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ByeaiError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Fill the lookup API key from the environment when the file leaves it unset.
    pub fn with_env_overrides(mut self) -> Self {
        if self.lookup.api_key.is_none() {
            self.lookup.api_key = std::env::var(defaults::LOOKUP_API_KEY_ENV)
                .ok()
                .filter(|k| !k.is_empty());
        }
        self
    }
}
