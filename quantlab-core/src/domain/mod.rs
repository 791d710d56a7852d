//! Domain types shared by strategies, the engine, and downstream reporting.

pub mod signal;
pub mod trade;

pub use signal::Signal;
pub use trade::{TradeRecord, TradeSide};
