//! Crypto dashboard analytics.
//!
//! Turns raw `(epoch_millis, price)` ticks into fixed-width OHLC candles and
//! derives the figures the admin dashboard displays: ATR (Wilder), SMA(7),
//! SMA(14), RSI(14), price change and trend.
//!
//! ```
//! use crypto_dashboard::analysis::analyze;
//! use crypto_dashboard::indicators::atr::average_true_range;
//! use crypto_dashboard::market_data::{aggregate_hourly, Tick};
//!
//! let ticks: Vec<Tick> = (0..20)
//!     .map(|h| Tick::from((1_704_067_200_000 + h * 3_600_000, 100.0 + h as f64)))
//!     .collect();
//! let candles = aggregate_hourly(&ticks);
//! let record = analyze(&candles).unwrap();
//! assert_eq!(record.latest_price, 119.0);
//! assert!(average_true_range(&candles, 14) > 0.0);
//! ```

pub mod analysis;
pub mod api;
pub mod app_state;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod indicators;
pub mod market_data;
pub mod source;
pub mod types;

pub use analysis::{analyze, AnalyticsRecord};
pub use error::AnalysisError;
pub use indicators::atr::average_true_range;
