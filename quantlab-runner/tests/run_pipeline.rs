//! End-to-end: TOML config → prices → run → export → reload.

use quantlab_runner::{
    load_close_series, run_single_backtest, write_equity_csv, write_prices_csv, ParamGrid,
    ParamSweep, RunConfig,
};

const CONFIG: &str = r#"
    [strategy]
    type = "MA_CROSS"
    short_window = 5
    long_window = 20

    [backtest]
    initial_cash = 50000.0

    [data]
    source = "SYNTHETIC"
    bars = 400
    seed = 21
"#;

#[test]
fn config_to_result_to_artifacts() {
    let config = RunConfig::from_toml_str(CONFIG).unwrap();
    let result = run_single_backtest(&config).unwrap();

    assert_eq!(result.bar_count, 400);
    assert_eq!(result.summary.initial_equity, 50_000.0);

    let dir = tempfile::tempdir().unwrap();
    let equity_path = dir.path().join("equity.csv");
    write_equity_csv(&equity_path, &result.report.equity_curve).unwrap();
    let contents = std::fs::read_to_string(&equity_path).unwrap();
    assert_eq!(contents.lines().count(), 401); // header + one row per step
}

#[test]
fn csv_fed_run_matches_synthetic_run() {
    // Materialize the synthetic series to disk, rerun from the CSV, and
    // the equity curves must agree: the loader is lossless.
    let config = RunConfig::from_toml_str(CONFIG).unwrap();
    let from_synthetic = run_single_backtest(&config).unwrap();

    let points = match &config.data {
        quantlab_runner::DataConfig::Synthetic { bars, seed, start_price } => {
            quantlab_runner::synthetic_walk(&quantlab_runner::SyntheticConfig {
                bars: *bars,
                seed: *seed,
                start_price: *start_price,
                ..quantlab_runner::SyntheticConfig::default()
            })
        }
        _ => unreachable!(),
    };
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("prices.csv");
    write_prices_csv(&csv_path, &points).unwrap();
    let reloaded = load_close_series(&csv_path).unwrap();
    assert_eq!(reloaded.len(), points.len());

    let mut csv_config = config.clone();
    csv_config.data = quantlab_runner::DataConfig::Csv {
        path: csv_path.clone(),
    };
    let from_csv = run_single_backtest(&csv_config).unwrap();

    assert_eq!(
        from_synthetic.report.equity_curve,
        from_csv.report.equity_curve
    );
}

#[test]
fn sweep_over_a_config_grid() {
    let config = RunConfig::from_toml_str(CONFIG).unwrap();
    let prices = quantlab_runner::runner::resolve_prices(&config.data).unwrap();

    let grid = ParamGrid {
        short_windows: vec![3, 5, 10],
        long_windows: vec![20, 40],
    };
    let outcome = ParamSweep::new().sweep(&grid, &config, &prices).unwrap();

    assert_eq!(outcome.results.len(), 6);
    let best = outcome.best().unwrap();
    for result in &outcome.results {
        assert!(best.summary.total_return >= result.summary.total_return);
        assert_eq!(result.bar_count, 400);
    }
}
