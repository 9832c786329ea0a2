//! Application Configuration
//!
//! Defaults suit the public dummyjson API. An optional JSON override can be
//! stored under the `todo-pager-config` key of `localStorage`, e.g.
//! `{"base_url": "http://localhost:8080", "log_level": "debug"}`.

use serde::{Deserialize, Serialize};
use todo_core::DEFAULT_PAGE_PREFIX;

/// `localStorage` key holding the JSON override
pub const CONFIG_KEY: &str = "todo-pager-config";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base endpoint of the remote task API
    pub base_url: String,
    /// Prefix of the per-page cache keys
    pub storage_prefix: String,
    /// How long a notice stays visible
    pub notice_timeout_ms: u32,
    /// Minimum level written to the console
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "https://dummyjson.com".to_string(),
            storage_prefix: DEFAULT_PAGE_PREFIX.to_string(),
            notice_timeout_ms: 3000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Parse an override; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, String> {
        let mut config: AppConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        if config.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }
        Ok(config)
    }

    /// Read the override from `localStorage`, falling back to defaults
    pub fn load() -> Self {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(CONFIG_KEY).ok().flatten());

        match stored {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!(target: "Config", "Ignoring invalid {}: {}", CONFIG_KEY, e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
