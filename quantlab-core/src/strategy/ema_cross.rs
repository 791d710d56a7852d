//! Exponential moving-average crossover.
//!
//! Same rule as `MaCross` with EMAs in place of SMAs: the exponential
//! weighting reacts to regime changes sooner at the cost of more whipsaw.

use crate::domain::Signal;
use crate::indicators::ema;
use crate::strategy::{cross_signal, StrategyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmaCross {
    short_window: usize,
    long_window: usize,
}

impl EmaCross {
    pub fn new(short_window: usize, long_window: usize) -> Result<Self, StrategyError> {
        if short_window == 0 || long_window == 0 {
            return Err(StrategyError::InvalidParameter(
                "moving-average windows must be >= 1".into(),
            ));
        }
        if short_window >= long_window {
            return Err(StrategyError::InvalidParameter(format!(
                "short window {short_window} must be < long window {long_window}"
            )));
        }
        Ok(Self {
            short_window,
            long_window,
        })
    }

    pub fn signals(&self, prices: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        if prices.is_empty() {
            return Err(StrategyError::EmptyInput);
        }
        let short = ema(prices, self.short_window);
        let long = ema(prices, self.long_window);

        let mut signals = Vec::with_capacity(prices.len());
        let mut prev = Signal::Flat;
        for i in 0..prices.len() {
            let sig = cross_signal(short[i], long[i], prev);
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
    fn rejects_inverted_windows() {
        assert!(EmaCross::new(9, 3).is_err());
        assert!(EmaCross::new(9, 9).is_err());
    }

    #[test]
    fn warm_up_is_flat_until_long_ema_defined() {
        let prices: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        let strat = EmaCross::new(2, 5).unwrap();
        let signals = strat.signals(&prices).unwrap();
        for i in 0..4 {
            assert_eq!(signals[i], Signal::Flat, "index {i}");
        }
        assert_eq!(signals[4], Signal::Long);
    }

    #[test]
    fn downtrend_flips_short() {
        let mut prices: Vec<f64> = (1..=10).map(|v| v as f64).collect();
        prices.extend((1..=10).rev().map(|v| v as f64));
        let strat = EmaCross::new(2, 5).unwrap();
        let signals = strat.signals(&prices).unwrap();
        assert_eq!(*signals.last().unwrap(), Signal::Short);
    }
}
