//! RSI mean reversion.
//!
//! Long when RSI drops below the oversold threshold, short when it rises
//! above the overbought threshold, prior signal carried between the two.

use crate::domain::Signal;
use crate::indicators::rsi;
use crate::strategy::StrategyError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RsiReversion {
    window: usize,
    buy_threshold: f64,
    sell_threshold: f64,
}

impl RsiReversion {
    pub fn new(window: usize, buy_threshold: f64, sell_threshold: f64) -> Result<Self, StrategyError> {
        if window == 0 {
            return Err(StrategyError::InvalidParameter(
                "RSI window must be >= 1".into(),
            ));
        }
        if buy_threshold.is_nan() || sell_threshold.is_nan() || buy_threshold > sell_threshold {
            return Err(StrategyError::InvalidParameter(format!(
                "buy threshold {buy_threshold} must be <= sell threshold {sell_threshold}"
            )));
        }
        Ok(Self {
            window,
            buy_threshold,
            sell_threshold,
        })
    }

    pub fn signals(&self, prices: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        if prices.is_empty() {
            return Err(StrategyError::EmptyInput);
        }
        let rsi_values = rsi(prices, self.window);

        let mut signals = Vec::with_capacity(prices.len());
        let mut prev = Signal::Flat;
        for &value in &rsi_values {
            let sig = if value.is_nan() {
                Signal::Flat
            } else if value < self.buy_threshold {
                Signal::Long
            } else if value > self.sell_threshold {
                Signal::Short
            } else {
                prev
            };
            signals.push(sig);
            prev = sig;
        }
        Ok(signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_thresholds() {
        assert!(RsiReversion::new(14, 70.0, 30.0).is_err());
        assert!(RsiReversion::new(0, 30.0, 70.0).is_err());
        // Equal thresholds are a legal degenerate band.
        assert!(RsiReversion::new(14, 50.0, 50.0).is_ok());
        // NaN thresholds fail the ordering check rather than passing silently.
        assert!(RsiReversion::new(14, f64::NAN, 70.0).is_err());
    }

    #[test]
    fn oversold_goes_long() {
        // Steady sell-off pins RSI at 0, below any sane buy threshold.
        let prices = [100.0, 98.0, 96.0, 94.0, 92.0, 90.0];
        let strat = RsiReversion::new(3, 30.0, 70.0).unwrap();
        let signals = strat.signals(&prices).unwrap();
        for &sig in &signals[3..] {
            assert_eq!(sig, Signal::Long);
        }
    }

    #[test]
    fn overbought_goes_short() {
        let prices = [90.0, 92.0, 94.0, 96.0, 98.0, 100.0];
        let strat = RsiReversion::new(3, 30.0, 70.0).unwrap();
        let signals = strat.signals(&prices).unwrap();
        for &sig in &signals[3..] {
            assert_eq!(sig, Signal::Short);
        }
    }

    #[test]
    fn neutral_band_carries_prior_signal() {
        // Sell-off (long stance), then alternate small moves so RSI sits
        // between the thresholds; the long stance must persist.
        let prices = [100.0, 96.0, 92.0, 88.0, 89.0, 88.5, 89.5, 89.0];
        let strat = RsiReversion::new(3, 30.0, 70.0).unwrap();
        let signals = strat.signals(&prices).unwrap();
        assert_eq!(signals[3], Signal::Long);
        // Whatever RSI does in the chop, no flat gap may appear once long
        // unless an overbought reading flips the stance outright.
        for (i, &sig) in signals.iter().enumerate().skip(3) {
            assert_ne!(sig, Signal::Flat, "flat gap at index {i}");
        }
    }

    #[test]
    fn warm_up_is_flat() {
        let prices = [100.0, 99.0, 98.0, 97.0, 96.0];
        let strat = RsiReversion::new(4, 30.0, 70.0).unwrap();
        let signals = strat.signals(&prices).unwrap();
        for i in 0..4 {
            assert_eq!(signals[i], Signal::Flat, "index {i}");
        }
    }
}
