//! Moving Average Convergence Divergence (MACD).
//!
//! MACD line = ema(fast) - ema(slow); defined once both EMAs are (index
//! slow - 1 onward). The signal line is an EMA over the defined MACD
//! values: SMA-seeded after `signal_window` values have accumulated, then
//! recursive with multiplier 2 / (signal_window + 1).

use crate::indicators::ema;

/// MACD line and signal line of `data`.
///
/// Returns `(macd_line, signal_line)`, each aligned with the input.
pub fn macd(
    data: &[f64],
    fast_window: usize,
    slow_window: usize,
    signal_window: usize,
) -> (Vec<f64>, Vec<f64>) {
    assert!(
        fast_window >= 1 && slow_window >= 1 && signal_window >= 1,
        "MACD windows must be >= 1"
    );
    assert!(
        fast_window < slow_window,
        "MACD fast window must be < slow window"
    );

    let n = data.len();
    let ema_fast = ema(data, fast_window);
    let ema_slow = ema(data, slow_window);

    let mut macd_line = vec![f64::NAN; n];
    for i in 0..n {
        if !ema_fast[i].is_nan() && !ema_slow[i].is_nan() {
            macd_line[i] = ema_fast[i] - ema_slow[i];
        }
    }

    let mut signal_line = vec![f64::NAN; n];
    let k = 2.0 / (signal_window as f64 + 1.0);
    let mut seen = 0usize;
    let mut seed_sum = 0.0;
    let mut prev = f64::NAN;
    for i in 0..n {
        let m = macd_line[i];
        if m.is_nan() {
            continue;
        }
        seen += 1;
        if seen < signal_window {
            seed_sum += m;
        } else if seen == signal_window {
            seed_sum += m;
            prev = seed_sum / signal_window as f64;
            signal_line[i] = prev;
        } else {
            prev = (m - prev) * k + prev;
            signal_line[i] = prev;
        }
    }

    (macd_line, signal_line)
}
