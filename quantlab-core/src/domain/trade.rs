//! TradeRecord — one fill in the simulated ledger.

use serde::{Deserialize, Serialize};

/// Direction of a fill. Opening a short and liquidating a long are both
/// `Sell`; covering a short is `Buy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeSide {
    Buy,
    Sell,
}

/// A single fill recorded whenever the engine changes its holding.
///
/// A stance reversal (long → short) records two fills at the same index and
/// price: the liquidation of the old position, then the new entry. Quantity
/// is always positive; `side` carries the direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub time_index: usize,
    pub side: TradeSide,
    pub quantity: f64,
    pub price: f64,
}

impl TradeRecord {
    /// Cash notional of the fill (`quantity * price`).
    pub fn notional(&self) -> f64 {
        self.quantity * self.price
    }

    /// Signed share delta this fill applied to the holding.
    pub fn signed_quantity(&self) -> f64 {
        match self.side {
            TradeSide::Buy => self.quantity,
            TradeSide::Sell => -self.quantity,
        }
    }
}
