// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free implementations of the indicators shown on the
// dashboard. Every function is total over its input: insufficient history
// produces a documented fallback value rather than an error.

pub mod atr;
pub mod rsi;
pub mod sma;
