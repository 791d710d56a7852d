//! Serializable backtest configuration.
//!
//! A `RunConfig` captures everything needed to reproduce a run: the
//! strategy variant and its parameters, the ledger settings, and where the
//! prices come from. Identical configs hash to the same `RunId`, which
//! makes results content-addressable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quantlab_core::strategy::{
    BollingerReversion, EmaCross, MaCross, MacdCross, MomentumThreshold, OptionBuyAndHold,
    OptionStraddle, RocThreshold, RsiReversion,
};
use quantlab_core::{Strategy, StrategyError, TradingMode};

/// Unique identifier for a run configuration (content-addressable hash).
pub type RunId = String;

/// Errors from loading or interpreting a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] Box<toml::de::Error>),

    #[error("invalid strategy parameters: {0}")]
    Strategy(#[from] StrategyError),
}

/// Complete configuration for a single backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    pub strategy: StrategyConfig,
    pub backtest: BacktestSettings,
    pub data: DataConfig,
}

impl RunConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw).map_err(Box::new)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Deterministic hash id for this configuration.
    ///
    /// Two identical configs share a `RunId`, so cached or exported results
    /// can be looked up by content rather than by file name.
    pub fn run_id(&self) -> RunId {
        let json = serde_json::to_string(self).expect("RunConfig serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

/// Ledger settings for the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSettings {
    pub initial_cash: f64,
    #[serde(default)]
    pub trading_mode: TradingMode,
}

/// Strategy variant and parameters (serializable mirror of the core enum).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StrategyConfig {
    MaCross {
        short_window: usize,
        long_window: usize,
    },
    EmaCross {
        short_window: usize,
        long_window: usize,
    },
    RsiReversion {
        window: usize,
        #[serde(default = "default_buy_threshold")]
        buy_threshold: f64,
        #[serde(default = "default_sell_threshold")]
        sell_threshold: f64,
    },
    BollingerReversion {
        window: usize,
        num_std: f64,
    },
    MacdCross {
        #[serde(default = "default_macd_fast")]
        fast_window: usize,
        #[serde(default = "default_macd_slow")]
        slow_window: usize,
        #[serde(default = "default_macd_signal")]
        signal_window: usize,
    },
    Momentum {
        window: usize,
        #[serde(default)]
        threshold: f64,
    },
    Roc {
        window: usize,
        #[serde(default)]
        threshold: f64,
    },
    OptionBuyAndHold,
    OptionStraddle {
        threshold: f64,
    },
}

fn default_buy_threshold() -> f64 {
    30.0
}

fn default_sell_threshold() -> f64 {
    70.0
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

impl StrategyConfig {
    /// Build the validated core strategy this config describes.
    pub fn to_strategy(&self) -> Result<Strategy, StrategyError> {
        Ok(match *self {
            StrategyConfig::MaCross {
                short_window,
                long_window,
            } => MaCross::new(short_window, long_window)?.into(),
            StrategyConfig::EmaCross {
                short_window,
                long_window,
            } => EmaCross::new(short_window, long_window)?.into(),
            StrategyConfig::RsiReversion {
                window,
                buy_threshold,
                sell_threshold,
            } => RsiReversion::new(window, buy_threshold, sell_threshold)?.into(),
            StrategyConfig::BollingerReversion { window, num_std } => {
                BollingerReversion::new(window, num_std)?.into()
            }
            StrategyConfig::MacdCross {
                fast_window,
                slow_window,
                signal_window,
            } => MacdCross::new(fast_window, slow_window, signal_window)?.into(),
            StrategyConfig::Momentum { window, threshold } => {
                MomentumThreshold::new(window, threshold)?.into()
            }
            StrategyConfig::Roc { window, threshold } => {
                RocThreshold::new(window, threshold)?.into()
            }
            StrategyConfig::OptionBuyAndHold => OptionBuyAndHold::new().into(),
            StrategyConfig::OptionStraddle { threshold } => {
                OptionStraddle::new(threshold)?.into()
            }
        })
    }
}

/// Where the price series comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataConfig {
    /// Two-column `date,close` CSV.
    Csv { path: PathBuf },
    /// Seeded geometric random walk (demos and tests).
    Synthetic {
        bars: usize,
        #[serde(default)]
        seed: u64,
        #[serde(default = "default_start_price")]
        start_price: f64,
    },
}

fn default_start_price() -> f64 {
    100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [strategy]
        type = "MA_CROSS"
        short_window = 10
        long_window = 50

        [backtest]
        initial_cash = 25000.0

        [data]
        source = "SYNTHETIC"
        bars = 500
        seed = 7
    "#;

    #[test]
    fn parses_a_full_config() {
        let config = RunConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(
            config.strategy,
            StrategyConfig::MaCross {
                short_window: 10,
                long_window: 50
            }
        );
        assert_eq!(config.backtest.initial_cash, 25_000.0);
        // Omitted trading mode defaults to long/short.
        assert_eq!(config.backtest.trading_mode, TradingMode::LongShort);
        assert_eq!(
            config.data,
            DataConfig::Synthetic {
                bars: 500,
                seed: 7,
                start_price: 100.0
            }
        );
    }

    #[test]
    fn threshold_defaults_fill_in() {
        let raw = r#"
            [strategy]
            type = "RSI_REVERSION"
            window = 14

            [backtest]
            initial_cash = 1000.0

            [data]
            source = "SYNTHETIC"
            bars = 100
        "#;
        let config = RunConfig::from_toml_str(raw).unwrap();
        assert_eq!(
            config.strategy,
            StrategyConfig::RsiReversion {
                window: 14,
                buy_threshold: 30.0,
                sell_threshold: 70.0
            }
        );
    }

    #[test]
    fn run_id_is_stable_and_content_sensitive() {
        let a = RunConfig::from_toml_str(SAMPLE).unwrap();
        let b = RunConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(a.run_id(), b.run_id());

        let mut c = a.clone();
        c.backtest.initial_cash = 30_000.0;
        assert_ne!(a.run_id(), c.run_id());
    }

    #[test]
    fn to_strategy_rejects_bad_parameters() {
        let config = StrategyConfig::MaCross {
            short_window: 50,
            long_window: 10,
        };
        assert!(config.to_strategy().is_err());
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = RunConfig::from_toml_str(SAMPLE).unwrap();
        let json = serde_json::to_string(&config).unwrap();
        let back: RunConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
