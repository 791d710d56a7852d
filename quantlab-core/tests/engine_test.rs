//! End-to-end scenarios for the strategy → replay → metrics pipeline.

use quantlab_core::metrics::{self, PerformanceSummary};
use quantlab_core::strategy::{MaCross, OptionBuyAndHold};
use quantlab_core::{BacktestError, Backtester, Signal, Strategy, StrategyError};

#[test]
fn ma_cross_rides_a_clean_uptrend() {
    let prices = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let strategy: Strategy = MaCross::new(2, 4).unwrap().into();

    let signals = strategy.generate_signals(&prices).unwrap();
    assert_eq!(
        signals,
        vec![
            Signal::Flat,
            Signal::Flat,
            Signal::Flat,
            Signal::Long,
            Signal::Long,
            Signal::Long,
        ]
    );

    let report = Backtester::new(10_000.0)
        .unwrap()
        .run(&strategy, &prices)
        .unwrap();

    // Flat through the warm-up, then long into a rising market: equity must
    // never fall from the entry step onward.
    assert_eq!(report.equity_curve[..3], [10_000.0, 10_000.0, 10_000.0]);
    for w in report.equity_curve[3..].windows(2) {
        assert!(w[1] >= w[0], "equity fell in an uptrend: {w:?}");
    }
    assert_eq!(report.trades.len(), 1);
    assert_eq!(report.equity_curve.len(), prices.len());
}

#[test]
fn constant_prices_leave_equity_at_initial_cash() {
    let prices = [5.0, 5.0, 5.0, 5.0, 5.0];
    let initial = 10_000.0;

    // Whatever stance a strategy takes, zero price movement means zero P&L.
    for strategy in [
        Strategy::from(MaCross::new(2, 4).unwrap()),
        Strategy::from(OptionBuyAndHold::new()),
    ] {
        let report = Backtester::new(initial)
            .unwrap()
            .run(&strategy, &prices)
            .unwrap();
        assert_eq!(report.equity_curve, vec![initial; prices.len()]);
        assert_eq!(metrics::max_drawdown(&report.equity_curve).unwrap(), 0.0);
    }
}

#[test]
fn empty_series_fails_everywhere() {
    let strategy: Strategy = MaCross::new(2, 4).unwrap().into();
    assert_eq!(
        strategy.generate_signals(&[]),
        Err(StrategyError::EmptyInput)
    );

    let bt = Backtester::new(10_000.0).unwrap();
    assert_eq!(bt.run(&strategy, &[]).unwrap_err(), BacktestError::EmptyInput);
    assert_eq!(
        bt.run_signals(&[], &[]).unwrap_err(),
        BacktestError::EmptyInput
    );
}

#[test]
fn zero_price_at_a_transition_fails_the_run() {
    let bt = Backtester::new(10_000.0).unwrap();
    let signals = [Signal::Flat, Signal::Flat, Signal::Long, Signal::Long];
    let prices = [2.0, 1.0, 0.0, 1.0];
    assert_eq!(
        bt.run_signals(&signals, &prices).unwrap_err(),
        BacktestError::ZeroPrice(2)
    );
}

#[test]
fn zero_price_without_a_transition_is_harmless() {
    // The zero lands where the stance does not change, so nothing is sized
    // against it; the mark-to-market just passes through.
    let bt = Backtester::new(10_000.0).unwrap();
    let signals = [Signal::Flat, Signal::Flat, Signal::Long];
    let prices = [2.0, 0.0, 1.0];
    let report = bt.run_signals(&signals, &prices).unwrap();
    assert_eq!(report.equity_curve.len(), 3);
}

#[test]
fn single_decline_drawdown_equals_total_loss() {
    let prices = [10.0, 8.0, 6.0, 4.0, 2.0];
    let initial = 10_000.0;
    let strategy: Strategy = OptionBuyAndHold::new().into();

    let report = Backtester::new(initial)
        .unwrap()
        .run(&strategy, &prices)
        .unwrap();

    // All-in long at 10, ridden straight down: the peak is the first entry
    // and the trough the last, so the drawdown is the whole loss.
    let dd = metrics::max_drawdown(&report.equity_curve).unwrap();
    assert_eq!(dd, initial - report.equity_curve.last().unwrap());
    assert_eq!(*report.equity_curve.last().unwrap(), 2_000.0);
}

#[test]
fn conservation_between_trades() {
    let prices = [10.0, 11.0, 9.5, 12.0, 12.5, 11.0];
    let signals = [
        Signal::Long,
        Signal::Long,
        Signal::Long,
        Signal::Long,
        Signal::Long,
        Signal::Long,
    ];
    let report = Backtester::new(1_000.0)
        .unwrap()
        .run_signals(&signals, &prices)
        .unwrap();

    // One entry at t=0, then no trades: every equity move must equal the
    // holding times the price move.
    let shares = report.final_shares_held;
    for t in 1..prices.len() {
        let expected = shares * (prices[t] - prices[t - 1]);
        let actual = report.equity_curve[t] - report.equity_curve[t - 1];
        assert!(
            (actual - expected).abs() < 1e-9,
            "step {t}: {actual} != {expected}"
        );
    }
}

#[test]
fn summary_over_a_full_run() {
    let prices = [10.0, 11.0, 12.0, 11.0, 13.0, 14.0];
    let strategy: Strategy = OptionBuyAndHold::new().into();
    let report = Backtester::new(1_000.0)
        .unwrap()
        .run(&strategy, &prices)
        .unwrap();

    let summary = PerformanceSummary::compute(&report.equity_curve, &report.trades).unwrap();
    assert_eq!(summary.initial_equity, 1_000.0);
    assert_eq!(summary.final_equity, 1_400.0);
    assert!((summary.total_return - 0.4).abs() < 1e-12);
    // Dip from 1200 to 1100.
    assert!((summary.max_drawdown - 100.0).abs() < 1e-9);
    assert_eq!(summary.trade_count, 1);
}
