pub mod aggregator;
pub mod candle;

// Re-export the core types for convenient access (e.g. `use crate::market_data::Candle`).
pub use aggregator::{aggregate, aggregate_hourly};
pub use candle::{Candle, Interval, Tick};
