use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_history_limit() -> usize {
    100
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Override for the data directory; resolved from KOTOBA_HOME / HOME when unset
    #[serde(default)]
    pub data_dir: Option<String>,
    /// Oldest non-favorite records are dropped past this count
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl StorageConfig {
    pub fn new() -> Self {
        let data_dir = env::var("KOTOBA_DATA_DIR").ok();

        let history_limit = env::var("KOTOBA_HISTORY_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_history_limit);

        Self {
            enabled: default_enabled(),
            data_dir,
            history_limit,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            data_dir: None,
            history_limit: default_history_limit(),
        }
    }
}
