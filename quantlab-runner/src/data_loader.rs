//! Price loading and synthetic fallback.
//!
//! Real data comes in as a two-column `date,close` CSV. When no file is
//! available (demos, tests, CI) a seeded geometric random walk stands in;
//! the seed makes every generated series reproducible regardless of where
//! it is generated.

use std::path::Path;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the price loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read price file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse price file: {0}")]
    Csv(#[from] csv::Error),

    #[error("non-finite or non-positive close {close} at row {row}")]
    BadClose { row: usize, close: f64 },

    #[error("dates out of order at row {row} ({date})")]
    OutOfOrder { row: usize, date: NaiveDate },
}

/// One dated close price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Load a `date,close` CSV into dated price points.
///
/// Rows must be dated in strictly increasing order and closes must be
/// finite and positive — bad rows fail the whole load rather than being
/// skipped silently.
pub fn load_close_series(path: &Path) -> Result<Vec<PricePoint>, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut points = Vec::new();
    let mut last_date: Option<NaiveDate> = None;

    for (i, record) in reader.deserialize::<PricePoint>().enumerate() {
        let point = record?;
        let row = i + 2; // header is row 1
        if !point.close.is_finite() || point.close <= 0.0 {
            return Err(LoadError::BadClose {
                row,
                close: point.close,
            });
        }
        if let Some(prev) = last_date {
            if point.date <= prev {
                return Err(LoadError::OutOfOrder {
                    row,
                    date: point.date,
                });
            }
        }
        last_date = Some(point.date);
        points.push(point);
    }

    Ok(points)
}

/// Strip the dates off a loaded series for the engine.
pub fn closes(points: &[PricePoint]) -> Vec<f64> {
    points.iter().map(|p| p.close).collect()
}

/// Parameters for the synthetic walk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticConfig {
    pub bars: usize,
    pub seed: u64,
    pub start_price: f64,
    /// Per-step drift as a fraction (e.g. 0.0002 ≈ 5%/year).
    pub drift: f64,
    /// Half-width of the uniform per-step return noise.
    pub volatility: f64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            bars: 252,
            seed: 0,
            start_price: 100.0,
            drift: 0.0002,
            volatility: 0.02,
        }
    }
}

/// Generate a seeded geometric random walk of dated closes.
///
/// Same seed, same series — on any machine and in any thread order.
pub fn synthetic_walk(config: &SyntheticConfig) -> Vec<PricePoint> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let base_date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();

    let mut points = Vec::with_capacity(config.bars);
    let mut price = config.start_price;
    for i in 0..config.bars {
        let noise = (rng.gen::<f64>() * 2.0 - 1.0) * config.volatility;
        price *= 1.0 + config.drift + noise;
        // A hard floor keeps pathological parameter choices representable.
        price = price.max(0.01);
        points.push(PricePoint {
            date: base_date + chrono::Duration::days(i as i64),
            close: price,
        });
    }
    points
}
