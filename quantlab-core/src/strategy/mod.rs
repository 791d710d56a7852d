//! Strategy variants behind one `generate_signals` capability.
//!
//! A strategy is a stateless function of its construction parameters and a
//! price slice: it maps `&[f64]` to an aligned `Vec<Signal>` of desired
//! position states. The set of variants is closed — a tagged enum
//! dispatched by a single `match` — so adding a rule means adding a
//! variant, not a subclass.
//!
//! Shared contracts across every variant:
//! - output length equals input length;
//! - indices where the lookback window is not yet full emit `Flat`;
//! - neutral readings (ties, dead zones between thresholds) carry the prior
//!   signal forward;
//! - an empty price slice is `StrategyError::EmptyInput`;
//! - identical input always produces identical output.

pub mod bollinger_reversion;
pub mod ema_cross;
pub mod ma_cross;
pub mod macd_cross;
pub mod options;
pub mod rsi_reversion;
pub mod threshold;

pub use bollinger_reversion::BollingerReversion;
pub use ema_cross::EmaCross;
pub use ma_cross::MaCross;
pub use macd_cross::MacdCross;
pub use options::{OptionBuyAndHold, OptionStraddle};
pub use rsi_reversion::RsiReversion;
pub use threshold::{MomentumThreshold, RocThreshold};

use crate::domain::Signal;
use thiserror::Error;

/// Errors from strategy construction and signal generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("price series is empty")]
    EmptyInput,
}

/// One step of a two-line comparison rule.
///
/// `Flat` while either line is warming up, the line ordering otherwise,
/// and the prior signal on an exact tie.
pub(crate) fn cross_signal(short: f64, long: f64, prev: Signal) -> Signal {
    if short.is_nan() || long.is_nan() {
        Signal::Flat
    } else if short > long {
        Signal::Long
    } else if short < long {
        Signal::Short
    } else {
        prev
    }
}

/// The closed set of strategy variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    MaCross(MaCross),
    EmaCross(EmaCross),
    RsiReversion(RsiReversion),
    BollingerReversion(BollingerReversion),
    MacdCross(MacdCross),
    MomentumThreshold(MomentumThreshold),
    RocThreshold(RocThreshold),
    OptionBuyAndHold(OptionBuyAndHold),
    OptionStraddle(OptionStraddle),
}

impl Strategy {
    /// Map a price slice to an aligned sequence of desired position states.
    ///
    /// For `OptionStraddle` the input is an implied-volatility series rather
    /// than prices; the alignment and warm-up contracts are identical.
    pub fn generate_signals(&self, prices: &[f64]) -> Result<Vec<Signal>, StrategyError> {
        match self {
            Strategy::MaCross(s) => s.signals(prices),
            Strategy::EmaCross(s) => s.signals(prices),
            Strategy::RsiReversion(s) => s.signals(prices),
            Strategy::BollingerReversion(s) => s.signals(prices),
            Strategy::MacdCross(s) => s.signals(prices),
            Strategy::MomentumThreshold(s) => s.signals(prices),
            Strategy::RocThreshold(s) => s.signals(prices),
            Strategy::OptionBuyAndHold(s) => s.signals(prices),
            Strategy::OptionStraddle(s) => s.signals(prices),
        }
    }

    /// Stable identifier used in reports and sweep leaderboards.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::MaCross(_) => "ma_cross",
            Strategy::EmaCross(_) => "ema_cross",
            Strategy::RsiReversion(_) => "rsi_reversion",
            Strategy::BollingerReversion(_) => "bollinger_reversion",
            Strategy::MacdCross(_) => "macd_cross",
            Strategy::MomentumThreshold(_) => "momentum_threshold",
            Strategy::RocThreshold(_) => "roc_threshold",
            Strategy::OptionBuyAndHold(_) => "option_buy_and_hold",
            Strategy::OptionStraddle(_) => "option_straddle",
        }
    }
}

macro_rules! impl_from_variant {
    ($($ty:ident),+ $(,)?) => {
        $(impl From<$ty> for Strategy {
            fn from(inner: $ty) -> Self {
                Strategy::$ty(inner)
            }
        })+
    };
}

impl_from_variant!(
    MaCross,
    EmaCross,
    RsiReversion,
    BollingerReversion,
    MacdCross,
    MomentumThreshold,
    RocThreshold,
    OptionBuyAndHold,
    OptionStraddle,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_fails_for_every_variant() {
        let variants: Vec<Strategy> = vec![
            MaCross::new(2, 4).unwrap().into(),
            EmaCross::new(3, 9).unwrap().into(),
            RsiReversion::new(14, 30.0, 70.0).unwrap().into(),
            BollingerReversion::new(20, 2.0).unwrap().into(),
            MacdCross::new(12, 26, 9).unwrap().into(),
            MomentumThreshold::new(10, 0.0).unwrap().into(),
            RocThreshold::new(10, 0.0).unwrap().into(),
            OptionBuyAndHold::new().into(),
            OptionStraddle::new(0.2).unwrap().into(),
        ];
        for strategy in variants {
            assert_eq!(
                strategy.generate_signals(&[]),
                Err(StrategyError::EmptyInput),
                "variant {} accepted empty input",
                strategy.name()
            );
        }
    }

    #[test]
    fn signals_align_with_prices_for_every_variant() {
        let prices: Vec<f64> = (1..=40).map(|v| 100.0 + (v as f64).sin() * 5.0).collect();
        let variants: Vec<Strategy> = vec![
            MaCross::new(2, 4).unwrap().into(),
            EmaCross::new(3, 9).unwrap().into(),
            RsiReversion::new(5, 30.0, 70.0).unwrap().into(),
            BollingerReversion::new(5, 2.0).unwrap().into(),
            MacdCross::new(3, 6, 2).unwrap().into(),
            MomentumThreshold::new(4, 0.0).unwrap().into(),
            RocThreshold::new(4, 0.0).unwrap().into(),
            OptionBuyAndHold::new().into(),
            OptionStraddle::new(0.2).unwrap().into(),
        ];
        for strategy in variants {
            let signals = strategy.generate_signals(&prices).unwrap();
            assert_eq!(signals.len(), prices.len(), "variant {}", strategy.name());
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let prices: Vec<f64> = (1..=60).map(|v| 100.0 + (v as f64 * 0.3).cos() * 8.0).collect();
        let strategy: Strategy = MacdCross::new(3, 8, 3).unwrap().into();
        let first = strategy.generate_signals(&prices).unwrap();
        let second = strategy.generate_signals(&prices).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn cross_signal_tie_carries_prior() {
        assert_eq!(cross_signal(1.0, 1.0, Signal::Long), Signal::Long);
        assert_eq!(cross_signal(1.0, 1.0, Signal::Flat), Signal::Flat);
        assert_eq!(cross_signal(f64::NAN, 1.0, Signal::Long), Signal::Flat);
    }
}
