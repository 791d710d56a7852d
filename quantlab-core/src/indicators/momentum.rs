//! Momentum — price change over a fixed number of steps.
//!
//! momentum[t] = data[t] - data[t - window]. First valid value at index
//! window.

/// Momentum (difference) of `data` over `window` steps.
pub fn momentum(data: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "momentum window must be >= 1");
    let n = data.len();
    let mut result = vec![f64::NAN; n];

    for i in window..n {
        result[i] = data[i] - data[i - window];
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn momentum_basic() {
        let data = [10.0, 12.0, 11.0, 15.0];
        let result = momentum(&data, 2);
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_approx(result[2], 1.0, DEFAULT_EPSILON);
        assert_approx(result[3], 3.0, DEFAULT_EPSILON);
    }

    #[test]
    fn momentum_flat_series_is_zero() {
        let data = [7.0; 5];
        let result = momentum(&data, 1);
        for v in &result[1..] {
            assert_approx(*v, 0.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn momentum_window_longer_than_series() {
        let result = momentum(&[1.0, 2.0], 5);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
