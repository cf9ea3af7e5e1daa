// =============================================================================
// Relative Strength Index (RSI), trailing-window variant
// =============================================================================
//
// Step 1: Split consecutive close differences into gains and losses:
//         gain = max(0, Δ), loss = max(0, -Δ)
// Step 2: Average the last `period` gains / losses (plain mean, no Wilder
//         smoothing). With fewer than `period` differences both averages
//         are 0.
// Step 3: RS  = avg_gain / avg_loss   (0 when avg_loss is 0)
//         RSI = 100 - 100 / (1 + RS)  (0 when RS is not positive)
//
// A window with gains and no losses therefore reports RSI = 0, not 100.
// Dashboard consumers depend on this value; do not clamp it to 100.
// =============================================================================

/// Gain and loss series for consecutive close differences.
///
/// Both vectors have `closes.len() - 1` entries (empty for fewer than two
/// closes).
pub fn gains_and_losses(closes: &[f64]) -> (Vec<f64>, Vec<f64>) {
    closes
        .windows(2)
        .map(|w| {
            let change = w[1] - w[0];
            if change > 0.0 {
                (change, 0.0)
            } else {
                (0.0, change.abs())
            }
        })
        .unzip()
}

/// Average of the last `period` entries, or 0 when fewer than `period` exist.
fn trailing_mean(values: &[f64], period: usize) -> f64 {
    if period == 0 || values.len() < period {
        return 0.0;
    }
    values[values.len() - period..].iter().sum::<f64>() / period as f64
}

/// Compute the RSI of `closes` over a trailing `period`-difference window.
///
/// # Edge cases
/// - Fewer than `period + 1` closes => 0.0
/// - Average loss of zero => 0.0, whatever the gains
/// - `period == 0` => 0.0
pub fn trailing_rsi(closes: &[f64], period: usize) -> f64 {
    let (gains, losses) = gains_and_losses(closes);

    let avg_gain = trailing_mean(&gains, period);
    let avg_loss = trailing_mean(&losses, period);

    let rs = if avg_loss != 0.0 {
        avg_gain / avg_loss
    } else {
        0.0
    };

    if rs > 0.0 {
        100.0 - 100.0 / (1.0 + rs)
    } else {
        0.0
    }
}
