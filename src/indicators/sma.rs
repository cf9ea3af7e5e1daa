// =============================================================================
// Simple Moving Average (SMA), fixed divisor
// =============================================================================
//
// SMA(n) = sum(last n closes) / n
//
// The divisor is always `n`. When fewer than `n` closes exist the sum covers
// whatever is available but is still divided by `n`, so short histories are
// pulled toward zero. Dashboard consumers rely on this exact value.

/// Mean of the last `period` closes using a fixed `period` divisor.
///
/// Returns `0.0` when `period` is zero.
pub fn fixed_window_sma(closes: &[f64], period: usize) -> f64 {
    if period == 0 {
        return 0.0;
    }
    let start = closes.len().saturating_sub(period);
    closes[start..].iter().sum::<f64>() / period as f64
}
