// =============================================================================
// Dashboard Price Analysis
// =============================================================================
//
// Turns a chronological candle sequence into the headline numbers shown on
// the dashboard: latest price and its change, SMA(7) / SMA(14), RSI(14),
// trend direction and the period's close-price range.
//
// Decision rule:
//   trend = BULLISH when SMA(7) > SMA(14), otherwise BEARISH
//
// All figures are rounded to cents on output.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AnalysisError;
use crate::indicators::rsi::trailing_rsi;
use crate::indicators::sma::fixed_window_sma;
use crate::market_data::Candle;
use crate::types::{round2, Trend};

const FAST_SMA_PERIOD: usize = 7;
const SLOW_SMA_PERIOD: usize = 14;
const RSI_PERIOD: usize = 14;

/// Full analytics record for one candle sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    pub latest_price: f64,
    pub price_change: f64,
    pub price_change_percent: f64,
    pub sma_7: f64,
    pub sma_14: f64,
    pub rsi: f64,
    pub trend: Trend,
    pub highest_price: f64,
    pub lowest_price: f64,
}

/// Analyse `candles` (oldest first), in the order received.
///
/// Returns [`AnalysisError::InsufficientData`] for an empty sequence. Shorter
/// histories than the SMA / RSI windows are not an error: the SMAs keep their
/// fixed divisors and RSI falls back to 0.
pub fn analyze(candles: &[Candle]) -> Result<AnalyticsRecord, AnalysisError> {
    let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();

    let Some(&latest_price) = closes.last() else {
        return Err(AnalysisError::InsufficientData {
            required: 1,
            actual: 0,
        });
    };

    let sma_7 = fixed_window_sma(&closes, FAST_SMA_PERIOD);
    let sma_14 = fixed_window_sma(&closes, SLOW_SMA_PERIOD);
    let rsi = trailing_rsi(&closes, RSI_PERIOD);

    let prev_price = if closes.len() > 1 {
        closes[closes.len() - 2]
    } else {
        latest_price
    };
    let price_change = latest_price - prev_price;
    let price_change_percent = if prev_price != 0.0 {
        price_change / prev_price * 100.0
    } else {
        0.0
    };

    let trend = Trend::from_averages(sma_7, sma_14);

    let highest_price = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lowest_price = closes.iter().copied().fold(f64::INFINITY, f64::min);

    debug!(
        candles = closes.len(),
        latest_price,
        sma_7,
        sma_14,
        rsi,
        trend = %trend,
        "price analysis complete"
    );

    Ok(AnalyticsRecord {
        latest_price: round2(latest_price),
        price_change: round2(price_change),
        price_change_percent: round2(price_change_percent),
        sma_7: round2(sma_7),
        sma_14: round2(sma_14),
        rsi: round2(rsi),
        trend,
        highest_price: round2(highest_price),
        lowest_price: round2(lowest_price),
    })
}
