//! Mutable ledger state threaded through a backtest replay.

use crate::domain::{Signal, TradeRecord, TradeSide};
use crate::engine::BacktestError;

/// Cash, holding, and current stance at one point in a replay.
///
/// This is an explicit value struct rather than hidden engine internals so
/// the transition rule can be exercised directly with synthetic
/// (signal, price) pairs — no strategy required.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionState {
    pub cash: f64,
    pub shares_held: f64,
    pub current_signal: Signal,
}

impl PositionState {
    /// Fresh state: all cash, no holding, flat stance.
    pub fn new(initial_cash: f64) -> Self {
        Self {
            cash: initial_cash,
            shares_held: 0.0,
            current_signal: Signal::Flat,
        }
    }

    /// Mark-to-market equity at the given price.
    pub fn equity(&self, price: f64) -> f64 {
        self.cash + self.shares_held * price
    }

    /// Apply one (signal, price) step of the transition rule.
    ///
    /// A matching stance is a no-op. A changed stance liquidates any
    /// holding at `price`, then — unless the new stance is flat — commits
    /// the entire cash balance to the new position (fractional shares, no
    /// margin reserve). A long spends the cash: `shares_held = cash /
    /// price`, cash drops to zero. A short sells the same notional:
    /// `shares_held = -cash / price`, and the sale proceeds are credited,
    /// so equity is conserved through the entry either way. Fills are
    /// appended to `trades`, one per change of holding, so a reversal
    /// appends two.
    ///
    /// Fails with `ZeroPrice` when asked to open a position at a zero
    /// price; liquidation proceeds of zero are representable and allowed.
    pub fn step(
        &mut self,
        time_index: usize,
        signal: Signal,
        price: f64,
        trades: &mut Vec<TradeRecord>,
    ) -> Result<(), BacktestError> {
        if signal == self.current_signal {
            return Ok(());
        }

        if self.shares_held != 0.0 {
            let quantity = self.shares_held.abs();
            let side = if self.shares_held > 0.0 {
                TradeSide::Sell
            } else {
                TradeSide::Buy
            };
            self.cash += self.shares_held * price;
            self.shares_held = 0.0;
            trades.push(TradeRecord {
                time_index,
                side,
                quantity,
                price,
            });
        }

        if signal != Signal::Flat {
            if price == 0.0 {
                return Err(BacktestError::ZeroPrice(time_index));
            }
            let quantity = self.cash / price;
            let side = match signal {
                Signal::Long => {
                    self.shares_held = quantity;
                    self.cash = 0.0;
                    TradeSide::Buy
                }
                Signal::Short => {
                    self.shares_held = -quantity;
                    self.cash += quantity * price;
                    TradeSide::Sell
                }
                Signal::Flat => unreachable!(),
            };
            trades.push(TradeRecord {
                time_index,
                side,
                quantity,
                price,
            });
        }

        self.current_signal = signal;
        Ok(())
    }
}
