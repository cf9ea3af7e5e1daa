use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use super::{MarketChart, PriceSource};

/// Reads a saved market-chart JSON file on every request.
///
/// The request parameters are only logged; the file is expected to already
/// hold the chart for the configured asset.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PriceSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn market_chart(&self, coin_id: &str, vs_currency: &str, days: &str) -> Result<MarketChart> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read market chart from {}", self.path.display()))?;

        let chart: MarketChart = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse market chart from {}", self.path.display()))?;

        debug!(
            path = %self.path.display(),
            coin_id,
            vs_currency,
            days,
            ticks = chart.prices.len(),
            "market chart loaded from file"
        );

        Ok(chart)
    }
}
