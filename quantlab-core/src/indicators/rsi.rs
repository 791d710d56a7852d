//! Relative Strength Index (RSI).
//!
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss), with plain (unsmoothed)
//! averages of the gains and losses across the trailing window.
//! First valid value at index window.
//! Edge cases: avg_loss == 0 → RSI = 100 (includes window == 1, where the
//! trailing window holds no deltas at all).

/// Relative strength index of `data` over `window` steps.
pub fn rsi(data: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "RSI window must be >= 1");
    let n = data.len();
    let mut result = vec![f64::NAN; n];

    for i in window..n {
        let slice = &data[i + 1 - window..=i];
        let deltas = slice.len() - 1;

        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;
        for j in 1..slice.len() {
            let change = slice[j] - slice[j - 1];
            if change > 0.0 {
                gain_sum += change;
            } else {
                loss_sum -= change;
            }
        }

        let (avg_gain, avg_loss) = if deltas == 0 {
            (0.0, 0.0)
        } else {
            (gain_sum / deltas as f64, loss_sum / deltas as f64)
        };

        result[i] = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        };
    }

    result
}
