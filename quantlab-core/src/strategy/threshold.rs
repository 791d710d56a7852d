//! Momentum and rate-of-change threshold rules.
//!
//! Both compare a derived series against a symmetric neutral band: long
//! above `+threshold`, short below `-threshold`, prior signal carried
//! inside the band. They differ only in the derived series (absolute price
//! change vs. percent change).

use crate::domain::Signal;
use crate::indicators::{momentum, rate_of_change};
use crate::strategy::StrategyError;

fn validate(window: usize, threshold: f64, what: &str) -> Result<(), StrategyError> {
    if window == 0 {
        return Err(StrategyError::InvalidParameter(format!(
            "{what} window must be >= 1"
        )));
    }
    if threshold.is_nan() || threshold < 0.0 {
        return Err(StrategyError::InvalidParameter(format!(
            "{what} threshold {threshold} must be >= 0"
        )));
    }
    Ok(())
}

fn band_signals(derived: &[f64], threshold: f64) -> Vec<Signal> {
    let mut signals = Vec::with_capacity(derived.len());
    let mut prev = Signal::Flat;
    for &value in derived {
        let sig = if value.is_nan() {
            Signal::Flat
        } else {
            Signal::from_threshold(value, threshold).unwrap_or(prev)
        };
        signals.push(sig);
        prev = sig;
    }
    signals
}

/// Absolute price change over a window against a neutral band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumThreshold {
    window: usize,
    threshold: f64,
}

impl MomentumThreshold {
    pub fn new(window: usize, threshold: f64) -> Result<Self, StrategyError> {
        validate(window, threshold, "momentum")?;
        Ok(Self { window, threshold })
    }

    pub fn signals(&self, prices: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        if prices.is_empty() {
            return Err(StrategyError::EmptyInput);
        }
        Ok(band_signals(&momentum(prices, self.window), self.threshold))
    }
}

/// Percent price change over a window against a neutral band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RocThreshold {
    window: usize,
    threshold: f64,
}

impl RocThreshold {
    pub fn new(window: usize, threshold: f64) -> Result<Self, StrategyError> {
        validate(window, threshold, "rate-of-change")?;
        Ok(Self { window, threshold })
    }

    pub fn signals(&self, prices: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        if prices.is_empty() {
            return Err(StrategyError::EmptyInput);
        }
        Ok(band_signals(
            &rate_of_change(prices, self.window),
            self.threshold,
        ))
    }
}
