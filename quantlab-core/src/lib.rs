//! QuantLab Core — signal vocabulary, strategies, backtest replay, metrics.
//!
//! This crate contains the heart of the research toolkit:
//! - Domain types (signals, trade fills)
//! - Technical indicators as pure sequence transforms
//! - Strategy variants behind one `generate_signals` capability
//! - Deterministic signal-replay engine with all-in position sizing
//! - Performance metrics over completed equity curves
//! - Black-Scholes option pricing
//! - Execution-handler seam for live order paths
//!
//! Everything here is synchronous and I/O-free: a backtest run is a pure
//! fold over the price/signal sequences, so independent runs can be farmed
//! out across threads with no coordination (see `quantlab-runner`).

pub mod domain;
pub mod engine;
pub mod execution;
pub mod indicators;
pub mod metrics;
pub mod options;
pub mod strategy;

pub use domain::{Signal, TradeRecord, TradeSide};
pub use engine::{BacktestError, BacktestReport, Backtester, PositionState, TradingMode};
pub use metrics::{MetricsError, PerformanceSummary};
pub use strategy::{Strategy, StrategyError};
