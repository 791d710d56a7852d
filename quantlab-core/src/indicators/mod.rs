//! Technical indicators as pure sequence transforms.
//!
//! Every indicator maps an ordered price slice to a derived series of the
//! same length. Entries where the lookback window is not yet full are
//! `f64::NAN` — the strategy layer treats a NaN reading as "insufficient
//! data" and emits a flat stance for that step.
//!
//! Window validity (`window >= 1`, plus fast < slow for MACD) is asserted
//! here; strategy constructors are the validating layer and reject bad
//! parameters before an indicator ever runs.

pub mod bollinger;
pub mod ema;
pub mod macd;
pub mod momentum;
pub mod roc;
pub mod rsi;
pub mod sma;

pub use bollinger::bollinger_bands;
pub use ema::ema;
pub use macd::macd;
pub use momentum::momentum;
pub use roc::rate_of_change;
pub use rsi::rsi;
pub use sma::sma;

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
