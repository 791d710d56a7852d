//! Signal-replay engine.
//!
//! The engine deterministically replays a signal sequence against a price
//! series: an explicit `PositionState` value is folded over the index
//! range, trading only when the desired stance changes, and marking equity
//! to market after every step. Each run starts fresh from the configured
//! initial cash — the engine holds no state across runs.

pub mod backtester;
pub mod state;

pub use backtester::{BacktestReport, Backtester, TradingMode};
pub use state::PositionState;

use crate::strategy::StrategyError;
use thiserror::Error;

/// Errors from backtester construction and replay.
///
/// Every variant reflects malformed input, not a transient condition;
/// nothing is retried and no partial results are returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BacktestError {
    #[error("signal/price length mismatch: {signals} signals vs {prices} prices")]
    LengthMismatch { signals: usize, prices: usize },

    #[error("input series is empty")]
    EmptyInput,

    #[error("initial cash must be positive, got {0}")]
    NonPositiveCapital(f64),

    #[error("cannot size a position against a zero price at index {0}")]
    ZeroPrice(usize),

    #[error(transparent)]
    Strategy(#[from] StrategyError),
}
