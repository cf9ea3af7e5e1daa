// =============================================================================
// Price Sources
// =============================================================================
//
// The analytics pipeline never fetches market data itself. It asks a
// `PriceSource` for a market chart and works on whatever ticks come back.
// Network clients live outside this crate; the implementations here read a
// saved chart from disk or serve one held in memory.
// =============================================================================

pub mod file;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::market_data::Tick;

pub use file::JsonFileSource;

/// Price history for one asset, in the market-chart wire shape:
///
/// ```json
/// { "prices": [[1700000000000, 37000.12], [1700000300000, 37010.55]] }
/// ```
///
/// Other series in the payload (market caps, volumes) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<Tick>,
}

/// Supplies raw price ticks to the dashboard.
pub trait PriceSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &str;

    /// Price history for `coin_id` quoted in `vs_currency` over `days`.
    fn market_chart(&self, coin_id: &str, vs_currency: &str, days: &str) -> Result<MarketChart>;
}

/// In-memory source returning the same chart for every request.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    chart: MarketChart,
}

impl StaticSource {
    pub fn new(chart: MarketChart) -> Self {
        Self { chart }
    }

    pub fn from_ticks(ticks: impl IntoIterator<Item = Tick>) -> Self {
        Self::new(MarketChart {
            prices: ticks.into_iter().collect(),
        })
    }
}

impl PriceSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn market_chart(&self, _coin_id: &str, _vs_currency: &str, _days: &str) -> Result<MarketChart> {
        Ok(self.chart.clone())
    }
}
