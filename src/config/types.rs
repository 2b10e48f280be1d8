//! Configuration data model.
//!
//! Every section deserializes with defaults so a partial (or empty) TOML file
//! yields a complete `Config`.

use serde::Deserialize;

use super::defaults::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT_URL};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub chat: ChatConfig,
    pub display: DisplayConfig,
    pub network: NetworkConfig,
}

/// `[chat]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ChatConfig {
    /// Base URL of the streaming endpoint; `?message=` is appended per turn.
    pub endpoint: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT_URL.to_string(),
        }
    }
}

/// `[display]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// `[network]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    pub connect_timeout_secs: u64,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}
