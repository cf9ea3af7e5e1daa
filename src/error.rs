//! Indicator engine error types.

use thiserror::Error;

/// Errors raised by the indicator engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The candle sequence is too short to produce an analytics record.
    #[error("insufficient data: need {required} candles, got {actual}")]
    InsufficientData {
        /// Required number of candles.
        required: usize,
        /// Actual number of candles provided.
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_data_message() {
        let err = AnalysisError::InsufficientData {
            required: 1,
            actual: 0,
        };
        assert_eq!(err.to_string(), "insufficient data: need 1 candles, got 0");
    }
}
