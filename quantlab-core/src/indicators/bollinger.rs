//! Bollinger Bands.
//!
//! Lower/upper bands at mean ± num_std × population standard deviation of
//! the trailing window. First valid value at index window - 1.

/// Bollinger bands of `data` over `window` steps at `num_std` band width.
///
/// Returns `(lower, upper)`, each aligned with the input.
pub fn bollinger_bands(data: &[f64], window: usize, num_std: f64) -> (Vec<f64>, Vec<f64>) {
    assert!(window >= 1, "Bollinger window must be >= 1");
    assert!(num_std >= 0.0, "Bollinger band width must be >= 0");
    let n = data.len();
    let mut lower = vec![f64::NAN; n];
    let mut upper = vec![f64::NAN; n];

    for i in (window - 1)..n {
        let slice = &data[i + 1 - window..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let variance = slice.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / window as f64;
        let std = variance.sqrt();
        lower[i] = mean - num_std * std;
        upper[i] = mean + num_std * std;
    }

    (lower, upper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn bands_bracket_the_mean() {
        let data = [2.0, 4.0, 6.0, 8.0];
        let (lower, upper) = bollinger_bands(&data, 3, 2.0);

        assert!(lower[0].is_nan() && lower[1].is_nan());
        // Window [2,4,6]: mean 4, pstdev sqrt(8/3)
        let std = (8.0_f64 / 3.0).sqrt();
        assert_approx(lower[2], 4.0 - 2.0 * std, DEFAULT_EPSILON);
        assert_approx(upper[2], 4.0 + 2.0 * std, DEFAULT_EPSILON);
    }

    #[test]
    fn zero_width_bands_collapse_to_mean() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let (lower, upper) = bollinger_bands(&data, 2, 0.0);
        for i in 1..data.len() {
            assert_approx(lower[i], upper[i], DEFAULT_EPSILON);
        }
    }

    #[test]
    fn constant_series_has_zero_std() {
        let data = [5.0; 6];
        let (lower, upper) = bollinger_bands(&data, 3, 2.0);
        for i in 2..data.len() {
            assert_approx(lower[i], 5.0, DEFAULT_EPSILON);
            assert_approx(upper[i], 5.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn output_lengths_match_input() {
        let data = [1.0, 2.0, 3.0];
        let (lower, upper) = bollinger_bands(&data, 2, 1.5);
        assert_eq!(lower.len(), 3);
        assert_eq!(upper.len(), 3);
    }
}
