use serde::{Deserialize, Serialize};

use super::defaults;

/// Background reputation revision configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevisionConfig {
    /// Passes the queue holds before `schedule` awaits and `schedule_nowait`
    /// parks the overflow on its own task.
    pub queue_size: usize,
}

impl Default for RevisionConfig {
    fn default() -> Self {
        Self {
            queue_size: defaults::DEFAULT_REVISION_QUEUE_SIZE,
        }
    }
}
