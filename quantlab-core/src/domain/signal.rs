//! Signal — the desired position state for a single time step.

use serde::{Deserialize, Serialize};

/// Desired position state at a time step, as produced by a strategy.
///
/// A signal is a *stance*, not an instantaneous order: two consecutive
/// `Long` entries mean "stay long", and the engine trades only when the
/// stance changes. Signal sequences are always aligned 1:1 with the price
/// series that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Long,
    Short,
    Flat,
}

impl Signal {
    /// Numeric encoding: `Long = +1`, `Short = -1`, `Flat = 0`.
    pub fn as_i8(self) -> i8 {
        match self {
            Signal::Long => 1,
            Signal::Short => -1,
            Signal::Flat => 0,
        }
    }

    /// Sign of a derived series value relative to a neutral band.
    ///
    /// Returns `Long` above `+threshold`, `Short` below `-threshold`,
    /// `None` inside the band (callers decide what a neutral reading means).
    pub fn from_threshold(value: f64, threshold: f64) -> Option<Signal> {
        if value > threshold {
            Some(Signal::Long)
        } else if value < -threshold {
            Some(Signal::Short)
        } else {
            None
        }
    }
}
