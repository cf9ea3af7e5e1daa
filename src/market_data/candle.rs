use std::str::FromStr;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::types::round2;

// ---------------------------------------------------------------------------
// Data types
// ---------------------------------------------------------------------------

/// A single raw price observation.
///
/// Deserialises from the `[epoch_millis, price]` pairs used by market-chart
/// payloads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64)", into = "(i64, f64)")]
pub struct Tick {
    pub timestamp_ms: i64,
    pub price: f64,
}

impl From<(i64, f64)> for Tick {
    fn from((timestamp_ms, price): (i64, f64)) -> Self {
        Self {
            timestamp_ms,
            price,
        }
    }
}

impl From<Tick> for (i64, f64) {
    fn from(tick: Tick) -> Self {
        (tick.timestamp_ms, tick.price)
    }
}

/// One OHLC bar as handed to the chart layer.
///
/// Prices are rounded to two decimals when the candle is built. The wire
/// keys (`x`, `o`, `h`, `l`, `c`) are what the chart front-end consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    #[serde(rename = "x")]
    pub timestamp_label: String,
    #[serde(rename = "o")]
    pub open: f64,
    #[serde(rename = "h")]
    pub high: f64,
    #[serde(rename = "l")]
    pub low: f64,
    #[serde(rename = "c")]
    pub close: f64,
}

impl Candle {
    pub fn new(timestamp_label: impl Into<String>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            timestamp_label: timestamp_label.into(),
            open: round2(open),
            high: round2(high),
            low: round2(low),
            close: round2(close),
        }
    }
}

// ---------------------------------------------------------------------------
// Interval
// ---------------------------------------------------------------------------

/// Fixed bucket width used when aggregating ticks into candles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Interval {
    OneMinute,
    FiveMinutes,
    FifteenMinutes,
    ThirtyMinutes,
    #[default]
    OneHour,
    FourHours,
    OneDay,
}

impl Interval {
    /// Bucket width in milliseconds.
    pub fn as_millis(self) -> i64 {
        const MINUTE: i64 = 60_000;
        match self {
            Self::OneMinute => MINUTE,
            Self::FiveMinutes => 5 * MINUTE,
            Self::FifteenMinutes => 15 * MINUTE,
            Self::ThirtyMinutes => 30 * MINUTE,
            Self::OneHour => 60 * MINUTE,
            Self::FourHours => 240 * MINUTE,
            Self::OneDay => 1_440 * MINUTE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneMinute => "1m",
            Self::FiveMinutes => "5m",
            Self::FifteenMinutes => "15m",
            Self::ThirtyMinutes => "30m",
            Self::OneHour => "1h",
            Self::FourHours => "4h",
            Self::OneDay => "1d",
        }
    }

    /// Start of the bucket containing `timestamp_ms`.
    ///
    /// Uses floor division so pre-epoch timestamps still land in the bucket
    /// that starts at or before them.
    pub fn bucket_start(self, timestamp_ms: i64) -> i64 {
        let width = self.as_millis();
        timestamp_ms.div_euclid(width) * width
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Interval {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let interval = match s.trim() {
            "1m" => Self::OneMinute,
            "5m" => Self::FiveMinutes,
            "15m" => Self::FifteenMinutes,
            "30m" => Self::ThirtyMinutes,
            "1h" => Self::OneHour,
            "4h" => Self::FourHours,
            "1d" => Self::OneDay,
            other => bail!("unsupported interval: {other}"),
        };
        Ok(interval)
    }
}

impl TryFrom<String> for Interval {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Interval> for String {
    fn from(interval: Interval) -> Self {
        interval.as_str().to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
