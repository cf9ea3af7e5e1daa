// =============================================================================
// Average True Range (ATR), Wilder's Smoothing Method
// =============================================================================
//
// True Range (TR) for each bar, rounded to cents:
//   TR_0 = H - L                                  (no previous close yet)
//   TR_i = max(H - L, |H - prevClose|, |L - prevClose|)
//
// ATR is the smoothed average of TR using Wilder's method, rounded to cents
// at every step:
//   ATR_0 = SMA of first `period` TR values
//   ATR_t = (ATR_{t-1} * (period - 1) + TR_t) / period
//
// With fewer than `period` TR values the plain mean of whatever TR exists is
// reported instead.
//
// Default period: 14
// =============================================================================

use crate::market_data::Candle;
use crate::types::round2;

/// Standard Wilder look-back.
pub const DEFAULT_ATR_PERIOD: usize = 14;

/// Compute the True Range series, one value per candle (oldest first).
///
/// The first candle has no previous close, so its TR is just `high - low`.
pub fn true_range_series(candles: &[Candle]) -> Vec<f64> {
    let Some(first) = candles.first() else {
        return Vec::new();
    };

    let mut tr_values = Vec::with_capacity(candles.len());
    tr_values.push(round2(first.high - first.low));

    for pair in candles.windows(2) {
        let prev_close = pair[0].close;
        let current = &pair[1];

        let hl = current.high - current.low;
        let hc = (current.high - prev_close).abs();
        let lc = (current.low - prev_close).abs();

        tr_values.push(round2(hl.max(hc).max(lc)));
    }

    tr_values
}

/// Compute the Wilder-smoothed ATR series.
///
/// The first element is the seed (mean of the first `period` TR values); one
/// further element follows for every later candle. Empty when `period` is
/// zero or there are fewer than `period` candles.
pub fn atr_series(candles: &[Candle], period: usize) -> Vec<f64> {
    let tr_values = true_range_series(candles);
    smooth(&tr_values, period)
}

/// Compute the most recent ATR value from a slice of candles (oldest first).
///
/// # Returns
/// - `0.0` for an empty slice or a zero `period`.
/// - The rounded mean of all TR values when there are fewer than `period`.
/// - Otherwise the last Wilder-smoothed value.
pub fn average_true_range(candles: &[Candle], period: usize) -> f64 {
    if period == 0 {
        return 0.0;
    }

    let tr_values = true_range_series(candles);
    if tr_values.is_empty() {
        return 0.0;
    }

    if tr_values.len() < period {
        let sum: f64 = tr_values.iter().sum();
        return round2(sum / tr_values.len() as f64);
    }

    smooth(&tr_values, period).last().copied().unwrap_or(0.0)
}

/// Seed with the SMA of the first `period` values, then apply Wilder's
/// recursion over the rest.
fn smooth(tr_values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || tr_values.len() < period {
        return Vec::new();
    }

    let period_f = period as f64;
    let seed = round2(tr_values[..period].iter().sum::<f64>() / period_f);

    let mut result = Vec::with_capacity(tr_values.len() - period + 1);
    result.push(seed);

    let mut atr = seed;
    for &tr in &tr_values[period..] {
        atr = round2((atr * (period_f - 1.0) + tr) / period_f);
        result.push(atr);
    }

    result
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn candle(high: f64, low: f64, close: f64) -> Candle {
        Candle::new("t", close, high, low, close)
    }

    #[test]
    fn atr_empty_input() {
        assert_eq!(average_true_range(&[], 14), 0.0);
        assert!(true_range_series(&[]).is_empty());
        assert!(atr_series(&[], 14).is_empty());
    }

    #[test]
    fn atr_period_zero() {
        let candles = vec![candle(10.0, 5.0, 7.0); 20];
        assert_eq!(average_true_range(&candles, 0), 0.0);
        assert!(atr_series(&candles, 0).is_empty());
    }

    #[test]
    fn atr_single_candle_falls_back_to_mean() {
        let candles = [candle(10.0, 5.0, 7.0)];
        assert_eq!(average_true_range(&candles, 14), 5.0);
    }

    #[test]
    fn atr_fallback_mean_of_available_ranges() {
        // TR = [2.0, max(3, |13-11|, |10-11|) = 3.0, max(1, |12-12|, |11-12|) = 1.0]
        let candles = [
            candle(11.0, 9.0, 11.0),
            candle(13.0, 10.0, 12.0),
            candle(12.0, 11.0, 11.5),
        ];
        assert_eq!(true_range_series(&candles), vec![2.0, 3.0, 1.0]);
        assert_eq!(average_true_range(&candles, 14), 2.0);
    }

    #[test]
    fn atr_fallback_mean_on_half_cent() {
        // TR = [4468.28, 4468.29]; the mean 4468.285 is stored just below the
        // half cent and must round down.
        let candles = [
            Candle::new("a", 0.0, 4468.28, 0.0, 0.0),
            Candle::new("b", 0.0, 4468.29, 0.0, 0.0),
        ];
        assert_eq!(true_range_series(&candles), vec![4468.28, 4468.29]);
        assert_eq!(average_true_range(&candles, 14), 4468.28);
    }

    #[test]
    fn atr_constant_range() {
        // 15 identical bars: every TR is 5.0, seed is 5.0 and smoothing keeps it.
        let candles = vec![candle(10.0, 5.0, 7.0); 15];
        assert!(true_range_series(&candles).iter().all(|&tr| tr == 5.0));
        assert_eq!(atr_series(&candles, 14), vec![5.0, 5.0]);
        assert_eq!(average_true_range(&candles, 14), 5.0);
    }

    #[test]
    fn atr_first_candle_ignores_gap_terms() {
        // Only H-L counts for the first bar even though close is far outside.
        let candles = [candle(10.0, 9.0, 50.0)];
        assert_eq!(true_range_series(&candles), vec![1.0]);
    }

    #[test]
    fn atr_true_range_uses_prev_close() {
        // Gap up: |115 - 95| = 20 > 115 - 108 = 7
        let candles = [candle(105.0, 95.0, 95.0), candle(115.0, 108.0, 112.0)];
        assert_eq!(true_range_series(&candles), vec![10.0, 20.0]);
    }

    #[test]
    fn atr_wilder_smoothing_rounds_each_step() {
        // period = 2, TR = [2.0, 3.0, 1.0, 4.0]
        // seed = 2.5, then (2.5 + 1.0) / 2 = 1.75, then (1.75 + 4.0) / 2 = 2.875 -> 2.88
        let candles = [
            candle(11.0, 9.0, 11.0),
            candle(13.0, 10.0, 12.0),
            candle(12.0, 11.0, 11.5),
            candle(15.5, 12.0, 14.0),
        ];
        assert_eq!(true_range_series(&candles), vec![2.0, 3.0, 1.0, 4.0]);
        assert_eq!(atr_series(&candles, 2), vec![2.5, 1.75, 2.88]);
        assert_eq!(average_true_range(&candles, 2), 2.88);
    }

    #[test]
    fn atr_result_is_finite_and_non_negative() {
        let candles: Vec<Candle> = (0..50)
            .map(|i| {
                let base = 100.0 + (i as f64 * 0.5).sin() * 10.0;
                candle(base + 2.0, base - 2.0, base + 0.5)
            })
            .collect();
        for period in [1, 5, 14, 49, 50, 80] {
            let atr = average_true_range(&candles, period);
            assert!(atr.is_finite() && atr >= 0.0, "period {period}: {atr}");
        }
    }

    #[test]
    fn atr_is_deterministic() {
        let candles: Vec<Candle> = (0..30)
            .map(|i| {
                let base = 100.0 + i as f64;
                candle(base + 3.0, base - 3.0, base + 1.0)
            })
            .collect();
        let a = average_true_range(&candles, 14);
        let b = average_true_range(&candles, 14);
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
