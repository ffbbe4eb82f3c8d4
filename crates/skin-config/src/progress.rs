//! Progress tracker settings.

use serde::{Deserialize, Serialize};

/// Number of most recent entries shown and used for stats.
const fn default_history_limit() -> u32 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProgressConfig {
    #[serde(default = "default_history_limit")]
    pub history_limit: u32,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}
