//! Backtest runner — wires config, data, engine, and metrics together.
//!
//! Two entry points:
//! - `run_single_backtest()`: resolves prices from the config's data
//!   source, then runs. Used by the CLI.
//! - `run_backtest_from_prices()`: takes a pre-loaded close series. Used
//!   by sweeps to avoid re-reading the same file for every configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quantlab_core::metrics::{MetricsError, PerformanceSummary};
use quantlab_core::{BacktestError, BacktestReport, Backtester};

use crate::config::{ConfigError, DataConfig, RunConfig, RunId, StrategyConfig};
use crate::data_loader::{closes, load_close_series, synthetic_walk, LoadError, SyntheticConfig};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("data error: {0}")]
    Data(#[from] LoadError),

    #[error("backtest error: {0}")]
    Backtest(#[from] BacktestError),

    #[error("metrics error: {0}")]
    Metrics(#[from] MetricsError),
}

/// Complete, serializable result of a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub run_id: RunId,
    pub strategy: String,
    /// The exact strategy parameters this result was produced with.
    pub config: StrategyConfig,
    pub initial_cash: f64,
    pub bar_count: usize,
    pub summary: PerformanceSummary,
    pub report: BacktestReport,
}

/// Resolve the config's data source into a close series.
pub fn resolve_prices(data: &DataConfig) -> Result<Vec<f64>, LoadError> {
    match data {
        DataConfig::Csv { path } => Ok(closes(&load_close_series(path)?)),
        DataConfig::Synthetic {
            bars,
            seed,
            start_price,
        } => {
            let config = SyntheticConfig {
                bars: *bars,
                seed: *seed,
                start_price: *start_price,
                ..SyntheticConfig::default()
            };
            Ok(closes(&synthetic_walk(&config)))
        }
    }
}

/// Run a single backtest, loading prices from the config's data source.
pub fn run_single_backtest(config: &RunConfig) -> Result<RunResult, RunError> {
    let prices = resolve_prices(&config.data)?;
    run_backtest_from_prices(config, &prices)
}

/// Run a backtest against a pre-loaded close series — no I/O.
pub fn run_backtest_from_prices(
    config: &RunConfig,
    prices: &[f64],
) -> Result<RunResult, RunError> {
    let strategy = config.strategy.to_strategy().map_err(ConfigError::from)?;
    let backtester = Backtester::new(config.backtest.initial_cash)?
        .with_mode(config.backtest.trading_mode);

    let report = backtester.run(&strategy, prices)?;
    let summary = PerformanceSummary::compute(&report.equity_curve, &report.trades)?;

    Ok(RunResult {
        run_id: config.run_id(),
        strategy: strategy.name().to_string(),
        config: config.strategy.clone(),
        initial_cash: config.backtest.initial_cash,
        bar_count: prices.len(),
        summary,
        report,
    })
}
