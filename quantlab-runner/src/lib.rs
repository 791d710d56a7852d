//! QuantLab Runner — backtest orchestration on top of `quantlab-core`.
//!
//! This crate wires the engine into reproducible research runs:
//! - Serializable run configuration with content-addressed run ids
//! - Price loading from CSV, with a seeded synthetic fallback
//! - Single-backtest entry point producing a serializable result
//! - Rayon-parallel parameter sweeps with ranked outcomes
//! - CSV export of equity curves and trade logs

pub mod config;
pub mod data_loader;
pub mod export;
pub mod runner;
pub mod sweep;

pub use config::{BacktestSettings, ConfigError, DataConfig, RunConfig, RunId, StrategyConfig};
pub use data_loader::{
    closes, load_close_series, synthetic_walk, LoadError, PricePoint, SyntheticConfig,
};
pub use export::{write_equity_csv, write_prices_csv, write_trades_csv, ExportError};
pub use runner::{run_backtest_from_prices, run_single_backtest, RunError, RunResult};
pub use sweep::{ParamGrid, ParamSweep, SweepOutcome};
