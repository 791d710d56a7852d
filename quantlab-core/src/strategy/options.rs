//! Option-position strategies.
//!
//! These speak the same desired-position vocabulary as the price-driven
//! rules; `OptionStraddle` reads an implied-volatility series in place of
//! prices.

use crate::domain::Signal;
use crate::strategy::StrategyError;

/// Enter at the first opportunity and hold to the end of the series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionBuyAndHold;

impl OptionBuyAndHold {
    pub fn new() -> Self {
        Self
    }

    pub fn signals(&self, prices: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        if prices.is_empty() {
            return Err(StrategyError::EmptyInput);
        }
        Ok(vec![Signal::Long; prices.len()])
    }
}

/// Hold a straddle while implied volatility exceeds a threshold.
///
/// Input is the implied-volatility series; the stance is long whenever IV
/// sits above the threshold and flat otherwise (a straddle has no short
/// side here).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionStraddle {
    threshold: f64,
}

impl OptionStraddle {
    pub fn new(threshold: f64) -> Result<Self, StrategyError> {
        if threshold.is_nan() || threshold < 0.0 {
            return Err(StrategyError::InvalidParameter(format!(
                "implied-volatility threshold {threshold} must be >= 0"
            )));
        }
        Ok(Self { threshold })
    }

    pub fn signals(&self, implied_vol: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        if implied_vol.is_empty() {
            return Err(StrategyError::EmptyInput);
        }
        Ok(implied_vol
            .iter()
            .map(|&iv| {
                if iv > self.threshold {
                    Signal::Long
                } else {
                    Signal::Flat
                }
            })
            .collect())
    }
}
