//! Rate of Change (ROC) — percent change over a fixed number of steps.
//!
//! roc[t] = (data[t] - data[t - window]) / data[t - window] * 100.
//! First valid value at index window; entries whose reference price is zero
//! stay NaN (the ratio is undefined there).

/// Rate of change of `data` over `window` steps, in percent.
pub fn rate_of_change(data: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "ROC window must be >= 1");
    let n = data.len();
    let mut result = vec![f64::NAN; n];

    for i in window..n {
        let reference = data[i - window];
        if reference != 0.0 {
            result[i] = (data[i] - reference) / reference * 100.0;
        }
    }

    result
}
