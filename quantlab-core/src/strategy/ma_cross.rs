//! Moving-average crossover.
//!
//! Long while the short SMA sits above the long SMA, short on the reverse
//! ordering, prior signal carried on an exact tie.

use crate::domain::Signal;
use crate::indicators::sma;
use crate::strategy::{cross_signal, StrategyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaCross {
    short_window: usize,
    long_window: usize,
}

impl MaCross {
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

    pub fn short_window(&self) -> usize {
        self.short_window
    }

    pub fn long_window(&self) -> usize {
        self.long_window
    }

    pub fn signals(&self, prices: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        if prices.is_empty() {
            return Err(StrategyError::EmptyInput);
        }
        let short = sma(prices, self.short_window);
        let long = sma(prices, self.long_window);

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
