//! Execution-handler seam for live order paths.
//!
//! The replay engine never sends orders; live trading shares only the
//! signal vocabulary with the research side and goes through this trait.
//! Broker-specific implementations wrap their vendor SDKs elsewhere — the
//! in-repo `PaperExecutionHandler` just records what it is asked to do.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by an execution backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrokerError {
    #[error("rejected order for '{symbol}': {reason}")]
    Rejected { symbol: String, reason: String },

    #[error("broker unavailable: {0}")]
    Unavailable(String),
}

/// Acknowledgement returned for an accepted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: u64,
    pub symbol: String,
    /// Units bought (> 0) or sold (< 0).
    pub quantity: i64,
}

/// Something that can route an order to a market or simulator.
pub trait ExecutionHandler {
    /// Send a market order: positive quantity buys, negative sells.
    fn send_order(&mut self, symbol: &str, quantity: i64)
        -> Result<OrderConfirmation, BrokerError>;
}

/// Records orders instead of routing them anywhere.
#[derive(Debug, Default)]
pub struct PaperExecutionHandler {
    confirmations: Vec<OrderConfirmation>,
}

impl PaperExecutionHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every order accepted so far, in submission order.
    pub fn confirmations(&self) -> &[OrderConfirmation] {
        &self.confirmations
    }
}

impl ExecutionHandler for PaperExecutionHandler {
    fn send_order(
        &mut self,
        symbol: &str,
        quantity: i64,
    ) -> Result<OrderConfirmation, BrokerError> {
        if quantity == 0 {
            return Err(BrokerError::Rejected {
                symbol: symbol.to_string(),
                reason: "zero quantity".into(),
            });
        }
        let confirmation = OrderConfirmation {
            order_id: self.confirmations.len() as u64 + 1,
            symbol: symbol.to_string(),
            quantity,
        };
        self.confirmations.push(confirmation.clone());
        Ok(confirmation)
    }
}
