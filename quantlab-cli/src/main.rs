//! QuantLab CLI — run, sweep, and synth commands.
//!
//! Commands:
//! - `run` — execute a backtest from a TOML config file
//! - `sweep` — grid-search MA crossover windows over a price CSV
//! - `synth` — write a seeded synthetic price CSV

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use quantlab_runner::{
    closes, load_close_series, run_single_backtest, synthetic_walk, write_equity_csv,
    write_prices_csv, write_trades_csv, BacktestSettings, DataConfig, ParamGrid, ParamSweep,
    RunConfig, RunResult, StrategyConfig, SyntheticConfig,
};

#[derive(Parser)]
#[command(name = "quantlab", about = "QuantLab CLI — signal-replay backtesting toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a backtest from a TOML config file.
    Run {
        /// Path to a TOML config file.
        #[arg(long)]
        config: PathBuf,

        /// Write the full result JSON here.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write equity.csv and trades.csv next to the JSON output.
        #[arg(long, default_value_t = false)]
        artifacts: bool,
    },
    /// Grid-search MA crossover windows over a price CSV.
    Sweep {
        /// Two-column date,close price CSV.
        #[arg(long)]
        csv: PathBuf,

        /// Short windows to test.
        #[arg(long, value_delimiter = ',', default_values_t = [5_usize, 10, 20])]
        short: Vec<usize>,

        /// Long windows to test.
        #[arg(long, value_delimiter = ',', default_values_t = [50_usize, 100, 200])]
        long: Vec<usize>,

        /// Initial cash per run.
        #[arg(long, default_value_t = 100_000.0)]
        cash: f64,

        /// How many ranked rows to print.
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
    /// Write a seeded synthetic price CSV.
    Synth {
        /// Number of bars to generate.
        #[arg(long, default_value_t = 504)]
        bars: usize,

        /// RNG seed — same seed, same series.
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// First price of the walk.
        #[arg(long, default_value_t = 100.0)]
        start_price: f64,

        /// Output CSV path.
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            output,
            artifacts,
        } => cmd_run(&config, output.as_deref(), artifacts),
        Commands::Sweep {
            csv,
            short,
            long,
            cash,
            top,
        } => cmd_sweep(&csv, &short, &long, cash, top),
        Commands::Synth {
            bars,
            seed,
            start_price,
            out,
        } => cmd_synth(bars, seed, start_price, &out),
    }
}

fn cmd_run(config_path: &Path, output: Option<&Path>, artifacts: bool) -> Result<()> {
    let config = RunConfig::from_toml_file(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let result = run_single_backtest(&config)?;

    print_summary(&result);

    if let Some(output) = output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(output, json)
            .with_context(|| format!("writing {}", output.display()))?;
        println!("result written to {}", output.display());

        if artifacts {
            let dir = output.parent().unwrap_or_else(|| Path::new("."));
            let equity_path = dir.join("equity.csv");
            let trades_path = dir.join("trades.csv");
            write_equity_csv(&equity_path, &result.report.equity_curve)?;
            write_trades_csv(&trades_path, &result.report.trades)?;
            println!(
                "artifacts written to {} and {}",
                equity_path.display(),
                trades_path.display()
            );
        }
    } else if artifacts {
        bail!("--artifacts requires --output");
    }

    Ok(())
}

fn cmd_sweep(csv: &Path, short: &[usize], long: &[usize], cash: f64, top: usize) -> Result<()> {
    let points = load_close_series(csv)
        .with_context(|| format!("loading {}", csv.display()))?;
    let prices = closes(&points);

    let base = RunConfig {
        strategy: StrategyConfig::MaCross {
            short_window: 2,
            long_window: 3,
        },
        backtest: BacktestSettings {
            initial_cash: cash,
            trading_mode: Default::default(),
        },
        data: DataConfig::Csv {
            path: csv.to_path_buf(),
        },
    };
    let grid = ParamGrid {
        short_windows: short.to_vec(),
        long_windows: long.to_vec(),
    };
    if grid.size() == 0 {
        bail!("grid has no valid short < long combinations");
    }

    let outcome = ParamSweep::new().sweep(&grid, &base, &prices)?;
    let ranked = outcome.ranked_by_total_return();

    println!(
        "{} bars, {} configurations, top {}:",
        prices.len(),
        ranked.len(),
        top.min(ranked.len())
    );
    println!(
        "{:<24} {:>10} {:>12} {:>10} {:>8}",
        "strategy", "return", "max dd", "sharpe", "trades"
    );
    for result in ranked.iter().take(top) {
        println!(
            "{:<24} {:>9.2}% {:>11.2}% {:>10.2} {:>8}",
            describe_strategy(&result.config),
            result.summary.total_return * 100.0,
            result.summary.max_drawdown_pct * 100.0,
            result.summary.sharpe,
            result.summary.trade_count
        );
    }

    Ok(())
}

/// One-line parameter rendering for leaderboard rows.
fn describe_strategy(config: &StrategyConfig) -> String {
    match config {
        StrategyConfig::MaCross {
            short_window,
            long_window,
        } => format!("ma_cross {short_window}/{long_window}"),
        StrategyConfig::EmaCross {
            short_window,
            long_window,
        } => format!("ema_cross {short_window}/{long_window}"),
        StrategyConfig::RsiReversion {
            window,
            buy_threshold,
            sell_threshold,
        } => format!("rsi {window} [{buy_threshold},{sell_threshold}]"),
        StrategyConfig::BollingerReversion { window, num_std } => {
            format!("bollinger {window}x{num_std}")
        }
        StrategyConfig::MacdCross {
            fast_window,
            slow_window,
            signal_window,
        } => format!("macd {fast_window}/{slow_window}/{signal_window}"),
        StrategyConfig::Momentum { window, threshold } => {
            format!("momentum {window}@{threshold}")
        }
        StrategyConfig::Roc { window, threshold } => format!("roc {window}@{threshold}"),
        StrategyConfig::OptionBuyAndHold => "buy_and_hold".to_string(),
        StrategyConfig::OptionStraddle { threshold } => format!("straddle iv>{threshold}"),
    }
}

fn cmd_synth(bars: usize, seed: u64, start_price: f64, out: &Path) -> Result<()> {
    if bars == 0 {
        bail!("--bars must be > 0");
    }
    if start_price <= 0.0 {
        bail!("--start-price must be > 0");
    }

    let points = synthetic_walk(&SyntheticConfig {
        bars,
        seed,
        start_price,
        ..SyntheticConfig::default()
    });
    write_prices_csv(out, &points)
        .with_context(|| format!("writing {}", out.display()))?;
    println!("{} bars written to {}", points.len(), out.display());
    Ok(())
}

fn print_summary(result: &RunResult) {
    println!("run        {}", &result.run_id[..16]);
    println!("strategy   {}", result.strategy);
    println!("bars       {}", result.bar_count);
    println!("initial    {:.2}", result.summary.initial_equity);
    println!("final      {:.2}", result.summary.final_equity);
    println!("return     {:.2}%", result.summary.total_return * 100.0);
    println!(
        "max dd     {:.2} ({:.2}%)",
        result.summary.max_drawdown,
        result.summary.max_drawdown_pct * 100.0
    );
    println!("sharpe     {:.2}", result.summary.sharpe);
    println!("trades     {}", result.summary.trade_count);
}
