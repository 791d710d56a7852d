//! Simple Moving Average (SMA).
//!
//! Rolling mean over a lookback window.
//! First valid value at index window - 1.

/// Rolling mean of `data` over `window` steps.
///
/// The window sum is rolled forward rather than recomputed per step.
pub fn sma(data: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "SMA window must be >= 1");
    let n = data.len();
    let mut result = vec![f64::NAN; n];

    if n < window {
        return result;
    }

    let mut sum: f64 = data[..window].iter().sum();
    result[window - 1] = sum / window as f64;

    for i in window..n {
        sum = sum - data[i - window] + data[i];
        result[i] = sum / window as f64;
    }

    result
}
