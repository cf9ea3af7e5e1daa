// =============================================================================
// Shared types used across the dashboard analytics service
// =============================================================================

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Round to two decimal places, the precision every price and indicator is
/// displayed at.
///
/// The decision is made on the exact binary value of `value` and exact
/// half-cent ties go to the even cent, so `2.675` (stored just below the
/// tie) gives `2.67` and `0.125` gives `0.12`. Values outside the decimal
/// range (non-finite or above ~7.9e28) are returned unchanged.
pub fn round2(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        // Parsing the decimal text yields the f64 nearest to the cent value.
        .and_then(|d| d.to_string().parse::<f64>().ok())
        .unwrap_or(value)
}

/// Short-term vs. medium-term moving-average direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Trend {
    Bullish,
    Bearish,
}

impl Trend {
    /// BULLISH only when the fast average is strictly above the slow one.
    pub fn from_averages(fast: f64, slow: f64) -> Self {
        if fast > slow {
            Self::Bullish
        } else {
            Self::Bearish
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "BULLISH"),
            Self::Bearish => write!(f, "BEARISH"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_truncates_to_cents() {
        assert_eq!(round2(7.692307692), 7.69);
        assert_eq!(round2(11.0), 11.0);
        assert_eq!(round2(-1.236), -1.24);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn round2_half_cent_boundaries() {
        // Exact binary ties go to the even cent.
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
        // Stored just below the tie.
        assert_eq!(round2(2.675), 2.67);
        assert_eq!(round2(4468.285), 4468.28);
        assert_eq!(round2(1.005), 1.0);
    }

    #[test]
    fn round2_passes_through_non_finite() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn trend_ties_are_bearish() {
        assert_eq!(Trend::from_averages(11.0, 7.5), Trend::Bullish);
        assert_eq!(Trend::from_averages(7.5, 7.5), Trend::Bearish);
        assert_eq!(Trend::from_averages(7.0, 7.5), Trend::Bearish);
    }

    #[test]
    fn trend_serialises_uppercase() {
        assert_eq!(serde_json::to_string(&Trend::Bullish).unwrap(), "\"BULLISH\"");
        assert_eq!(serde_json::to_string(&Trend::Bearish).unwrap(), "\"BEARISH\"");
        assert_eq!(Trend::Bullish.to_string(), "BULLISH");
    }
}
