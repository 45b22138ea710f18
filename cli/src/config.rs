//! CLI configuration with TOML file support.

use drip_oracles::{DEFAULT_API_URL, DEFAULT_RAW_CONTENT_URL};
use drip_types::EngineParams;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the `drip` command.
///
/// Can be loaded from a TOML file via [`DripConfig::from_toml_file`] or
/// built programmatically (e.g. for tests). Every field has a default, so
/// an empty file and a missing `--config` flag both work.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DripConfig {
    /// Base URL of the Stacks blockchain API (balances and names).
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL for fetching raw repository content.
    #[serde(default = "default_raw_content_url")]
    pub raw_content_url: String,

    /// Where the trust ledger snapshot is stored.
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Engine parameters (rate limits, stake floor, reward table).
    #[serde(default)]
    pub params: EngineParams,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_raw_content_url() -> String {
    DEFAULT_RAW_CONTENT_URL.to_string()
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("./drip_ledger.bin")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for DripConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            raw_content_url: default_raw_content_url(),
            ledger_path: default_ledger_path(),
            log_level: default_log_level(),
            params: EngineParams::default(),
        }
    }
}

impl DripConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
