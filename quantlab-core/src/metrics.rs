//! Performance metrics — pure functions over a completed equity curve.
//!
//! Every metric is a single pass: equity curve (and optionally the trade
//! log) in, scalar or derived series out. Each function fails on an empty
//! curve; nothing here touches the engine or holds state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TradeRecord;

/// Trading steps per year used for annualization.
const STEPS_PER_YEAR: f64 = 252.0;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("equity curve is empty")]
    EmptyCurve,
}

/// Maximum peak-to-trough decline, in equity units.
///
/// `max over t of (running_peak[t] - equity[t])` with the running peak
/// taken over `equity[0..=t]`. One linear scan, O(1) auxiliary space.
/// Zero for a non-decreasing curve (including a single-entry curve).
pub fn max_drawdown(equity_curve: &[f64]) -> Result<f64, MetricsError> {
    if equity_curve.is_empty() {
        return Err(MetricsError::EmptyCurve);
    }
    let mut peak = equity_curve[0];
    let mut max_dd = 0.0_f64;
    for &eq in equity_curve {
        if eq > peak {
            peak = eq;
        }
        let dd = peak - eq;
        if dd > max_dd {
            max_dd = dd;
        }
    }
    Ok(max_dd)
}

/// Maximum drawdown as a fraction of the running peak.
///
/// Same scan as [`max_drawdown`] but each decline is divided by its peak,
/// which makes runs of different capital comparable in a sweep. Peaks at
/// or below zero contribute nothing.
pub fn max_drawdown_pct(equity_curve: &[f64]) -> Result<f64, MetricsError> {
    if equity_curve.is_empty() {
        return Err(MetricsError::EmptyCurve);
    }
    let mut peak = equity_curve[0];
    let mut max_dd = 0.0_f64;
    for &eq in equity_curve {
        if eq > peak {
            peak = eq;
        }
        if peak > 0.0 {
            let dd = (peak - eq) / peak;
            if dd > max_dd {
                max_dd = dd;
            }
        }
    }
    Ok(max_dd)
}

/// Full drawdown trace: `running_peak[t] - equity[t]` per step.
pub fn drawdown_curve(equity_curve: &[f64]) -> Result<Vec<f64>, MetricsError> {
    if equity_curve.is_empty() {
        return Err(MetricsError::EmptyCurve);
    }
    let mut peak = equity_curve[0];
    Ok(equity_curve
        .iter()
        .map(|&eq| {
            if eq > peak {
                peak = eq;
            }
            peak - eq
        })
        .collect())
}

/// Total return as a fraction: (final - initial) / initial.
///
/// Zero when the curve starts at or below zero (ratio undefined).
pub fn total_return(equity_curve: &[f64]) -> Result<f64, MetricsError> {
    if equity_curve.is_empty() {
        return Err(MetricsError::EmptyCurve);
    }
    let initial = equity_curve[0];
    let final_eq = *equity_curve.last().unwrap();
    if initial <= 0.0 {
        return Ok(0.0);
    }
    Ok((final_eq - initial) / initial)
}

/// Per-step fractional returns; one entry fewer than the curve.
///
/// A zero previous value yields a zero return for that step rather than
/// an infinity.
pub fn step_returns(equity_curve: &[f64]) -> Result<Vec<f64>, MetricsError> {
    if equity_curve.is_empty() {
        return Err(MetricsError::EmptyCurve);
    }
    Ok(equity_curve
        .windows(2)
        .map(|w| if w[0] != 0.0 { (w[1] - w[0]) / w[0] } else { 0.0 })
        .collect())
}

/// Annualized Sharpe ratio over the step returns, zero risk-free rate.
///
/// mean / std * sqrt(252); zero when the curve is too short or the
/// return variance vanishes.
pub fn sharpe_ratio(equity_curve: &[f64]) -> Result<f64, MetricsError> {
    let returns = step_returns(equity_curve)?;
    if returns.len() < 2 {
        return Ok(0.0);
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    let variance =
        returns.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / returns.len() as f64;
    let std = variance.sqrt();
    if std < 1e-15 {
        return Ok(0.0);
    }
    Ok(mean / std * STEPS_PER_YEAR.sqrt())
}

/// Aggregate statistics for a single run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub initial_equity: f64,
    pub final_equity: f64,
    pub total_return: f64,
    pub max_drawdown: f64,
    pub max_drawdown_pct: f64,
    pub sharpe: f64,
    pub trade_count: usize,
}

impl PerformanceSummary {
    /// Compute every metric from an equity curve and trade log.
    pub fn compute(
        equity_curve: &[f64],
        trades: &[TradeRecord],
    ) -> Result<Self, MetricsError> {
        Ok(Self {
            initial_equity: *equity_curve.first().ok_or(MetricsError::EmptyCurve)?,
            final_equity: *equity_curve.last().unwrap(),
            total_return: total_return(equity_curve)?,
            max_drawdown: max_drawdown(equity_curve)?,
            max_drawdown_pct: max_drawdown_pct(equity_curve)?,
            sharpe: sharpe_ratio(equity_curve)?,
            trade_count: trades.len(),
        })
    }
}
