// =============================================================================
// Dashboard Configuration
// =============================================================================
//
// Every tunable of the analytics service lives here: which market chart to
// read, how to bucket it, the ATR look-back and where to listen.
//
// All fields carry `#[serde(default)]` so that adding new fields never breaks
// loading an older config file.
// =============================================================================

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::indicators::atr::DEFAULT_ATR_PERIOD;
use crate::market_data::Interval;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_coin_id() -> String {
    "bitcoin".to_string()
}

fn default_vs_currency() -> String {
    "usd".to_string()
}

fn default_days() -> String {
    "1".to_string()
}

fn default_atr_period() -> usize {
    DEFAULT_ATR_PERIOD
}

fn default_price_file() -> PathBuf {
    PathBuf::from("data/market_chart.json")
}

fn default_bind_addr() -> String {
    "0.0.0.0:3001".to_string()
}

// =============================================================================
// DashboardConfig
// =============================================================================

/// Top-level configuration for the dashboard analytics service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Market-chart asset identifier (e.g. "bitcoin").
    #[serde(default = "default_coin_id")]
    pub coin_id: String,

    /// Quote currency (e.g. "usd").
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,

    /// History window requested from the price source, in days.
    #[serde(default = "default_days")]
    pub days: String,

    /// Candle bucket width.
    #[serde(default)]
    pub interval: Interval,

    /// Wilder look-back for the ATR figure.
    #[serde(default = "default_atr_period")]
    pub atr_period: usize,

    /// Saved market-chart JSON served by the file price source.
    #[serde(default = "default_price_file")]
    pub price_file: PathBuf,

    /// Listen address for the HTTP API.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            coin_id: default_coin_id(),
            vs_currency: default_vs_currency(),
            days: default_days(),
            interval: Interval::default(),
            atr_period: default_atr_period(),
            price_file: default_price_file(),
            bind_addr: default_bind_addr(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dashboard config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse dashboard config from {}", path.display()))?;

        info!(
            path = %path.display(),
            coin_id = %config.coin_id,
            interval = %config.interval,
            "dashboard config loaded"
        );

        Ok(config)
    }

    /// Apply `DASHBOARD_*` environment overrides through `lookup`.
    ///
    /// Takes the lookup as a closure so tests can feed a fixed map instead of
    /// the process environment.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("DASHBOARD_BIND_ADDR").filter(|s| !s.trim().is_empty()) {
            self.bind_addr = addr.trim().to_string();
        }
        if let Some(file) = lookup("DASHBOARD_PRICE_FILE").filter(|s| !s.trim().is_empty()) {
            self.price_file = PathBuf::from(file.trim());
        }
        if let Some(coin) = lookup("DASHBOARD_COIN").filter(|s| !s.trim().is_empty()) {
            self.coin_id = coin.trim().to_lowercase();
        }
    }

    /// Reject settings the analytics pipeline cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.atr_period == 0 {
            bail!("atr_period must be at least 1");
        }
        if self.coin_id.trim().is_empty() {
            bail!("coin_id must not be empty");
        }
        if self.vs_currency.trim().is_empty() {
            bail!("vs_currency must not be empty");
        }
        Ok(())
    }
}
