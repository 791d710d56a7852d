//! MACD line vs. signal line crossover.
//!
//! Long while the MACD line sits above its signal line, short on the
//! reverse ordering, prior signal carried on an exact tie. Flat until both
//! lines are defined.

use crate::domain::Signal;
use crate::indicators::macd;
use crate::strategy::{cross_signal, StrategyError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacdCross {
    fast_window: usize,
    slow_window: usize,
    signal_window: usize,
}

impl MacdCross {
    pub fn new(
        fast_window: usize,
        slow_window: usize,
        signal_window: usize,
    ) -> Result<Self, StrategyError> {
        if fast_window == 0 || slow_window == 0 || signal_window == 0 {
            return Err(StrategyError::InvalidParameter(
                "MACD windows must be >= 1".into(),
            ));
        }
        if fast_window >= slow_window {
            return Err(StrategyError::InvalidParameter(format!(
                "fast window {fast_window} must be < slow window {slow_window}"
            )));
        }
        Ok(Self {
            fast_window,
            slow_window,
            signal_window,
        })
    }

    /// The conventional 12/26/9 parameterization.
    pub fn standard() -> Self {
        Self {
            fast_window: 12,
            slow_window: 26,
            signal_window: 9,
        }
    }

    pub fn signals(&self, prices: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        if prices.is_empty() {
            return Err(StrategyError::EmptyInput);
        }
        let (macd_line, signal_line) = macd(
            prices,
            self.fast_window,
            self.slow_window,
            self.signal_window,
        );

        let mut signals = Vec::with_capacity(prices.len());
        let mut prev = Signal::Flat;
        for i in 0..prices.len() {
            let sig = cross_signal(macd_line[i], signal_line[i], prev);
            signals.push(sig);
            prev = sig;
        }
        Ok(signals)
    }
}
