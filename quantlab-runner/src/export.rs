//! CSV export of run artifacts.
//!
//! Persistence is a caller concern, not an engine contract: these writers
//! exist so the CLI (and tests) can drop equity curves, trade logs, and
//! synthetic price files next to a run's JSON result.

use std::path::Path;

use thiserror::Error;

use crate::data_loader::PricePoint;
use quantlab_core::{TradeRecord, TradeSide};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write file: {0}")]
    Io(#[from] std::io::Error),
}

/// Write an equity curve as `step,equity` rows.
pub fn write_equity_csv(path: &Path, equity_curve: &[f64]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["step", "equity"])?;
    for (step, equity) in equity_curve.iter().enumerate() {
        writer.write_record([step.to_string(), equity.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a trade log as `time_index,side,quantity,price` rows.
pub fn write_trades_csv(path: &Path, trades: &[TradeRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["time_index", "side", "quantity", "price"])?;
    for trade in trades {
        let side = match trade.side {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        };
        writer.write_record([
            trade.time_index.to_string(),
            side.to_string(),
            trade.quantity.to_string(),
            trade.price.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write dated closes as `date,close` rows — the same shape the loader
/// reads back.
pub fn write_prices_csv(path: &Path, points: &[PricePoint]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "close"])?;
    for point in points {
        writer.write_record([point.date.to_string(), point.close.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}
