//! Parameter sweep utilities for grid search.
//!
//! Each configuration owns its ledger exclusively and the engine holds no
//! cross-run state, so a sweep is embarrassingly parallel: configurations
//! fan out over rayon's thread pool with zero coordination.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{RunConfig, StrategyConfig};
use crate::runner::{run_backtest_from_prices, RunError, RunResult};

/// Window grid for the moving-average crossover family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamGrid {
    pub short_windows: Vec<usize>,
    pub long_windows: Vec<usize>,
}

impl ParamGrid {
    /// A conventional trend-following grid.
    pub fn default_ma() -> Self {
        Self {
            short_windows: vec![5, 10, 20],
            long_windows: vec![50, 100, 200],
        }
    }

    /// Number of valid (short < long) combinations.
    pub fn size(&self) -> usize {
        self.short_windows
            .iter()
            .map(|&s| self.long_windows.iter().filter(|&&l| s < l).count())
            .sum()
    }

    /// All valid configurations, each derived from `base` with the grid's
    /// windows substituted in. Combinations with `short >= long` are
    /// skipped — they could never construct a strategy.
    pub fn generate_configs(&self, base: &RunConfig) -> Vec<RunConfig> {
        let mut configs = Vec::with_capacity(self.size());
        for &short in &self.short_windows {
            for &long in &self.long_windows {
                if short >= long {
                    continue;
                }
                let mut config = base.clone();
                config.strategy = StrategyConfig::MaCross {
                    short_window: short,
                    long_window: long,
                };
                configs.push(config);
            }
        }
        configs
    }
}

/// Grid sweep executor.
#[derive(Debug, Clone, Copy)]
pub struct ParamSweep {
    parallel: bool,
}

impl Default for ParamSweep {
    fn default() -> Self {
        Self::new()
    }
}

impl ParamSweep {
    pub fn new() -> Self {
        Self { parallel: true }
    }

    /// Switch off the rayon fan-out (diagnostics, deterministic profiling).
    pub fn with_parallelism(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Run every configuration in the grid against one pre-loaded close
    /// series. The series is resolved once, up front — workers share the
    /// immutable slice and nothing else.
    pub fn sweep(
        &self,
        grid: &ParamGrid,
        base: &RunConfig,
        prices: &[f64],
    ) -> Result<SweepOutcome, RunError> {
        let configs = grid.generate_configs(base);

        let results: Vec<RunResult> = if self.parallel {
            configs
                .par_iter()
                .map(|config| run_backtest_from_prices(config, prices))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            configs
                .iter()
                .map(|config| run_backtest_from_prices(config, prices))
                .collect::<Result<Vec<_>, _>>()?
        };

        Ok(SweepOutcome { results })
    }
}

/// All results of a sweep, with ranking helpers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepOutcome {
    pub results: Vec<RunResult>,
}

impl SweepOutcome {
    /// Results sorted by total return, best first. NaN (degenerate) runs
    /// sink to the bottom.
    pub fn ranked_by_total_return(&self) -> Vec<&RunResult> {
        let mut ranked: Vec<&RunResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| {
            b.summary
                .total_return
                .partial_cmp(&a.summary.total_return)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked
    }

    /// The best run by total return, if any configuration survived.
    pub fn best(&self) -> Option<&RunResult> {
        self.ranked_by_total_return().first().copied()
    }
}
