// =============================================================================
// Dashboard Service
// =============================================================================
//
// Wires the pieces together for one dashboard render:
//
//   PriceSource -> ticks -> aggregate(interval) -> candles
//                                              \-> analyze()            -> record
//                                              \-> average_true_range() -> atr
//
// Nothing is cached between calls; every snapshot is recomputed from the
// source's current chart.
// =============================================================================

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::analysis::{analyze, AnalyticsRecord};
use crate::config::DashboardConfig;
use crate::indicators::atr::average_true_range;
use crate::market_data::{aggregate, Candle, Interval};
use crate::source::PriceSource;

/// Everything the dashboard page renders for the price panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub coin_id: String,
    pub vs_currency: String,
    pub interval: Interval,
    pub candlestick_data: Vec<Candle>,
    /// `None` when the source returned no prices.
    pub crypto_analysis: Option<AnalyticsRecord>,
    pub atr: f64,
    pub generated_at: i64,
}

/// Builds dashboard snapshots from an injected price source.
#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn PriceSource>,
    config: DashboardConfig,
}

impl DashboardService {
    pub fn new(source: Arc<dyn PriceSource>, config: DashboardConfig) -> Self {
        Self { source, config }
    }

    /// Fetch the configured chart and compute candles plus analytics.
    ///
    /// Only source failures are errors. An empty chart produces an empty
    /// candle list with no analysis and an ATR of 0.
    pub fn snapshot(&self) -> Result<DashboardSnapshot> {
        let cfg = &self.config;

        let chart = self
            .source
            .market_chart(&cfg.coin_id, &cfg.vs_currency, &cfg.days)
            .with_context(|| {
                format!(
                    "price source '{}' failed for {}/{}",
                    self.source.name(),
                    cfg.coin_id,
                    cfg.vs_currency
                )
            })?;

        let candles = aggregate(&chart.prices, cfg.interval);

        let crypto_analysis = match analyze(&candles) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(coin_id = %cfg.coin_id, error = %e, "no price data to analyse");
                None
            }
        };

        let atr = average_true_range(&candles, cfg.atr_period);

        debug!(
            coin_id = %cfg.coin_id,
            source = self.source.name(),
            candles = candles.len(),
            atr,
            "dashboard snapshot built"
        );

        Ok(DashboardSnapshot {
            coin_id: cfg.coin_id.clone(),
            vs_currency: cfg.vs_currency.clone(),
            interval: cfg.interval,
            candlestick_data: candles,
            crypto_analysis,
            atr,
            generated_at: Utc::now().timestamp_millis(),
        })
    }
}
