//! Bollinger band mean reversion.
//!
//! Long when the price closes below the lower band, short when it closes
//! above the upper band, prior signal carried while the price sits inside
//! the envelope.

use crate::domain::Signal;
use crate::indicators::bollinger_bands;
use crate::strategy::StrategyError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerReversion {
    window: usize,
    num_std: f64,
}

impl BollingerReversion {
    pub fn new(window: usize, num_std: f64) -> Result<Self, StrategyError> {
        if window == 0 {
            return Err(StrategyError::InvalidParameter(
                "Bollinger window must be >= 1".into(),
            ));
        }
        if num_std.is_nan() || num_std < 0.0 {
            return Err(StrategyError::InvalidParameter(format!(
                "band width {num_std} must be >= 0"
            )));
        }
        Ok(Self { window, num_std })
    }

    pub fn signals(&self, prices: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        if prices.is_empty() {
            return Err(StrategyError::EmptyInput);
        }
        let (lower, upper) = bollinger_bands(prices, self.window, self.num_std);

        let mut signals = Vec::with_capacity(prices.len());
        let mut prev = Signal::Flat;
        for (i, &price) in prices.iter().enumerate() {
            let sig = if lower[i].is_nan() || upper[i].is_nan() {
                Signal::Flat
            } else if price < lower[i] {
                Signal::Long
            } else if price > upper[i] {
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
