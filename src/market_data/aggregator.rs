// =============================================================================
// OHLC Aggregator: ticks to fixed-width candles
// =============================================================================
//
// Groups raw `(epoch_millis, price)` ticks into buckets of a fixed width and
// derives open/high/low/close per bucket:
//
//   first tick in bucket   => open = high = low = close = price
//   later ticks            => high = max, low = min, close = price
//
// Ticks are consumed in arrival order; nothing is re-sorted inside a bucket,
// so `close` is always the last tick seen. Buckets are emitted oldest first.
// =============================================================================

use std::collections::BTreeMap;

use chrono::DateTime;
use tracing::debug;

use super::candle::{Candle, Interval, Tick};

/// Display format for a bucket's start time.
const LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Running OHLC state for a single bucket.
#[derive(Debug, Clone, Copy)]
struct Ohlc {
    open: f64,
    high: f64,
    low: f64,
    close: f64,
}

impl Ohlc {
    fn seed(price: f64) -> Self {
        Self {
            open: price,
            high: price,
            low: price,
            close: price,
        }
    }

    fn push(&mut self, price: f64) {
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
    }
}

/// Aggregate `ticks` into one candle per `interval` bucket (UTC).
///
/// An empty tick slice yields an empty candle sequence.
pub fn aggregate(ticks: &[Tick], interval: Interval) -> Vec<Candle> {
    let mut buckets: BTreeMap<i64, Ohlc> = BTreeMap::new();

    for tick in ticks {
        let key = interval.bucket_start(tick.timestamp_ms);
        buckets
            .entry(key)
            .and_modify(|ohlc| ohlc.push(tick.price))
            .or_insert_with(|| Ohlc::seed(tick.price));
    }

    debug!(
        ticks = ticks.len(),
        buckets = buckets.len(),
        interval = %interval,
        "aggregated ticks into candles"
    );

    buckets
        .into_iter()
        .map(|(start, ohlc)| {
            let candle = Candle::new(
                bucket_label(start),
                ohlc.open,
                ohlc.high,
                ohlc.low,
                ohlc.close,
            );
            debug_assert!(
                candle.low <= candle.open.min(candle.close)
                    && candle.open.max(candle.close) <= candle.high,
                "OHLC ordering violated for bucket {start}"
            );
            candle
        })
        .collect()
}

/// Aggregate ticks into hourly candles, truncating minutes and below.
pub fn aggregate_hourly(ticks: &[Tick]) -> Vec<Candle> {
    aggregate(ticks, Interval::OneHour)
}

/// Format a bucket start as `YYYY-MM-DD HH:MM` (UTC).
///
/// Falls back to the raw millisecond value when it lies outside the range
/// chrono can represent.
fn bucket_label(start_ms: i64) -> String {
    match DateTime::from_timestamp_millis(start_ms) {
        Some(dt) => dt.format(LABEL_FORMAT).to_string(),
        None => start_ms.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;
    // 2024-01-01 00:00:00 UTC
    const BASE: i64 = 1_704_067_200_000;

    fn tick(timestamp_ms: i64, price: f64) -> Tick {
        Tick {
            timestamp_ms,
            price,
        }
    }

    #[test]
    fn empty_input_yields_no_candles() {
        assert!(aggregate_hourly(&[]).is_empty());
    }

    #[test]
    fn single_tick_seeds_all_fields() {
        let candles = aggregate_hourly(&[tick(BASE + 1_234, 42.129)]);
        assert_eq!(candles.len(), 1);
        let c = &candles[0];
        assert_eq!(c.timestamp_label, "2024-01-01 00:00");
        assert_eq!(c.open, 42.13);
        assert_eq!(c.high, 42.13);
        assert_eq!(c.low, 42.13);
        assert_eq!(c.close, 42.13);
    }

    #[test]
    fn ticks_within_hour_build_ohlc() {
        let ticks = [
            tick(BASE + 60_000, 100.0),
            tick(BASE + 5 * 60_000, 105.5),
            tick(BASE + 20 * 60_000, 98.25),
            tick(BASE + 59 * 60_000, 101.0),
        ];
        let candles = aggregate_hourly(&ticks);
        assert_eq!(candles.len(), 1);
        let c = &candles[0];
        assert_eq!(c.open, 100.0);
        assert_eq!(c.high, 105.5);
        assert_eq!(c.low, 98.25);
        assert_eq!(c.close, 101.0);
    }

    #[test]
    fn close_follows_arrival_order() {
        // The later-arriving tick has an earlier timestamp inside the bucket;
        // it still becomes the close.
        let ticks = [tick(BASE + 50 * 60_000, 10.0), tick(BASE + 10 * 60_000, 12.0)];
        let candles = aggregate_hourly(&ticks);
        assert_eq!(candles[0].open, 10.0);
        assert_eq!(candles[0].close, 12.0);
    }

    #[test]
    fn buckets_emitted_in_chronological_order() {
        let ticks = [
            tick(BASE + 2 * HOUR + 10, 3.0),
            tick(BASE + 10, 1.0),
            tick(BASE + HOUR + 10, 2.0),
        ];
        let candles = aggregate_hourly(&ticks);
        let labels: Vec<&str> = candles.iter().map(|c| c.timestamp_label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["2024-01-01 00:00", "2024-01-01 01:00", "2024-01-01 02:00"]
        );
        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn hour_boundary_starts_new_bucket() {
        let ticks = [tick(BASE + HOUR - 1, 5.0), tick(BASE + HOUR, 6.0)];
        let candles = aggregate_hourly(&ticks);
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1].timestamp_label, "2024-01-01 01:00");
    }

    #[test]
    fn custom_interval_buckets() {
        let ticks: Vec<Tick> = (0..60).map(|m| tick(BASE + m * 60_000, m as f64)).collect();
        let candles = aggregate(&ticks, Interval::FifteenMinutes);
        assert_eq!(candles.len(), 4);
        assert_eq!(candles[1].timestamp_label, "2024-01-01 00:15");
        assert_eq!(candles[1].open, 15.0);
        assert_eq!(candles[1].close, 29.0);
        assert_eq!(candles[3].high, 59.0);
    }

    #[test]
    fn high_never_below_low() {
        let ticks: Vec<Tick> = (0..500)
            .map(|i| tick(BASE + i * 37_000, 100.0 + (i as f64 * 0.7).sin() * 5.0))
            .collect();
        for c in aggregate_hourly(&ticks) {
            assert!(c.high >= c.low, "high {} < low {}", c.high, c.low);
        }
    }
}
