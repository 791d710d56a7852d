//! Backtester — replays signal sequences into a cash/position ledger.

use serde::{Deserialize, Serialize};

use crate::domain::{Signal, TradeRecord};
use crate::engine::{BacktestError, PositionState};
use crate::strategy::Strategy;

/// How a `Short` signal is acted on.
///
/// Whether a sell signal opens a short position or merely flattens is a
/// policy choice, so it is an explicit engine switch rather than something
/// baked into the strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradingMode {
    /// `Short` opens a short position sized to the full cash balance.
    #[default]
    LongShort,
    /// `Short` is demoted to `Flat`: sell signals liquidate, never short.
    LongFlat,
}

impl TradingMode {
    fn effective(self, signal: Signal) -> Signal {
        match (self, signal) {
            (TradingMode::LongFlat, Signal::Short) => Signal::Flat,
            _ => signal,
        }
    }
}

/// Completed run: the equity curve, every fill, and the terminal ledger.
///
/// There is no implicit liquidation at the end of a run — `final_cash` and
/// `final_shares_held` report the ledger exactly as the last step left it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    pub equity_curve: Vec<f64>,
    pub trades: Vec<TradeRecord>,
    pub final_cash: f64,
    pub final_shares_held: f64,
}

/// Deterministic replay engine.
///
/// Holds only configuration; every `run` starts a fresh ledger, so one
/// `Backtester` can serve many runs (or many threads) concurrently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backtester {
    initial_cash: f64,
    mode: TradingMode,
}

impl Backtester {
    pub fn new(initial_cash: f64) -> Result<Self, BacktestError> {
        if initial_cash.is_nan() || initial_cash <= 0.0 {
            return Err(BacktestError::NonPositiveCapital(initial_cash));
        }
        Ok(Self {
            initial_cash,
            mode: TradingMode::LongShort,
        })
    }

    pub fn with_mode(mut self, mode: TradingMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn initial_cash(&self) -> f64 {
        self.initial_cash
    }

    pub fn mode(&self) -> TradingMode {
        self.mode
    }

    /// Generate signals from `strategy` and replay them against `prices`.
    pub fn run(&self, strategy: &Strategy, prices: &[f64]) -> Result<BacktestReport, BacktestError> {
        let signals = strategy.generate_signals(prices)?;
        self.run_signals(&signals, prices)
    }

    /// Replay a pre-computed signal sequence against `prices`.
    ///
    /// One step per index, in increasing order: resolve the effective
    /// signal through the trading mode, apply the ledger transition, then
    /// mark equity to market. `equity_curve[0]` already reflects any trade
    /// executed on the first signal.
    pub fn run_signals(
        &self,
        signals: &[Signal],
        prices: &[f64],
    ) -> Result<BacktestReport, BacktestError> {
        if signals.is_empty() || prices.is_empty() {
            return Err(BacktestError::EmptyInput);
        }
        if signals.len() != prices.len() {
            return Err(BacktestError::LengthMismatch {
                signals: signals.len(),
                prices: prices.len(),
            });
        }

        let mut state = PositionState::new(self.initial_cash);
        let mut trades = Vec::new();
        let mut equity_curve = Vec::with_capacity(prices.len());

        for (t, (&signal, &price)) in signals.iter().zip(prices).enumerate() {
            state.step(t, self.mode.effective(signal), price, &mut trades)?;
            equity_curve.push(state.equity(price));
        }

        Ok(BacktestReport {
            equity_curve,
            trades,
            final_cash: state.cash,
            final_shares_held: state.shares_held,
        })
    }
}
