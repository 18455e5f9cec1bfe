//! Defaults and layered configuration for the dashboard client.
//!
//! Layers, lowest precedence first: built-in defaults, the user config file at
//! `<config_dir>/trend-radar/config.toml`, then `TREND_RADAR_*` environment
//! variables.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrendRadarError};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
pub const DEFAULT_PRODUCT_LIMIT: u32 = 50;

/// Platforms the backend compares prices across when none are given.
pub const COMPARISON_PLATFORMS: [&str; 5] = ["amazon", "walmart", "ebay", "etsy", "target"];

pub const ENV_API_URL: &str = "TREND_RADAR_API_URL";
pub const ENV_DEBOUNCE_MS: &str = "TREND_RADAR_DEBOUNCE_MS";
pub const ENV_TIMEOUT_SECS: &str = "TREND_RADAR_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub search_debounce_ms: u64,
    pub default_min_score: f64,
    pub default_limit: u32,
    /// No timeout unless set; each request is a single best-effort attempt.
    pub request_timeout_secs: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            default_min_score: 0.0,
            default_limit: DEFAULT_PRODUCT_LIMIT,
            request_timeout_secs: None,
        }
    }
}

impl DashboardConfig {
    /// Resolve the configuration from every layer.
    ///
    /// A malformed user config file is skipped with a warning rather than
    /// failing startup.
    pub fn load() -> Self {
        let mut config = match user_config_path() {
            Some(path) if path.exists() => match Self::from_file(&path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::warn!("Ignoring config file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Parse a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| TrendRadarError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply environment overrides through `lookup`.
    ///
    /// Unparseable numeric values are ignored and the previous layer wins.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
        if let Some(ms) = lookup(ENV_DEBOUNCE_MS).and_then(|v| v.trim().parse().ok()) {
            self.search_debounce_ms = ms;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).and_then(|v| v.trim().parse().ok()) {
            self.request_timeout_secs = Some(secs);
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("trend-radar").join("config.toml"))
}
