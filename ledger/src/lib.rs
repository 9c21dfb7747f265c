//! Paper-trading account core: cash, positions, and fill history for a
//! single simulated account.
//!
//! The one mutating entry point is [`Ledger::execute`], which validates an
//! order against the reference data and current holdings, prices the fill,
//! and applies it as a single accept-or-reject decision. Rejections leave
//! the ledger untouched; accepted orders fill completely at the computed
//! price. Snapshot builders in [`snapshot`] derive read-only views.
//!
//! Not thread-safe - wrap in RwLock for concurrent access.

pub mod instruments;
pub mod snapshot;
pub mod types;

pub use instruments::{Instrument, InstrumentTable, MarketMeta};
pub use snapshot::{
    market_snapshot, portfolio_snapshot, MarketSnapshot, PortfolioSnapshot, PositionView,
};
pub use types::{Order, OrderKind, OrderRequest, OrderStatus, Position, Side};

use std::collections::VecDeque;

use chrono::Utc;
use thiserror::Error;

/// Cash balance a fresh account starts with.
pub const STARTING_CASH: f64 = 1_000_000.0;

/// Most-recent orders retained in history; older entries are evicted.
pub const ORDER_HISTORY_LIMIT: usize = 25;

/// Why an order was turned away. Every variant is a clean rejection carrying
/// its user-facing message; nothing is recorded and no state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("Unknown symbol.")]
    UnknownSymbol,
    #[error("Quantity must be greater than zero.")]
    InvalidQuantity,
    #[error("Limit price must be greater than zero.")]
    InvalidLimitPrice,
    #[error("Insufficient cash balance for this order.")]
    InsufficientCash,
    #[error("Not enough shares to sell.")]
    InsufficientShares,
}

/// Single shared account state: cash balance, open positions, bounded fill
/// history (newest first), and the next-order-id counter.
///
/// Positions keep insertion order and hold one entry per symbol. Order ids
/// are assigned sequentially and never reused.
#[derive(Clone, Debug, PartialEq)]
pub struct Ledger {
    cash: f64,
    positions: Vec<Position>,
    orders: VecDeque<Order>,
    next_order_id: u64,
}

impl Ledger {
    /// Creates an account holding only cash.
    pub fn new(starting_cash: f64) -> Self {
        Self {
            cash: starting_cash,
            positions: Vec::new(),
            orders: VecDeque::new(),
            next_order_id: 1,
        }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    /// Open positions in insertion order.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Fill history, newest first, at most [`ORDER_HISTORY_LIMIT`] entries.
    pub fn orders(&self) -> &VecDeque<Order> {
        &self.orders
    }

    pub fn position(&self, symbol: &str) -> Option<&Position> {
        self.positions.iter().find(|p| p.symbol == symbol)
    }

    /// Validates, prices, and fills one order against current state.
    ///
    /// Checks run in a fixed sequence and the first failure wins: symbol,
    /// quantity, limit price (when supplied), then cash or holdings for the
    /// requested side. A failed check returns before anything is mutated.
    ///
    /// Pricing: a limit order with a supplied limit price fills at that
    /// price; market orders and limit orders without one fill at the
    /// instrument's last price. There is no partial-fill or resting logic.
    pub fn execute(
        &mut self,
        request: &OrderRequest,
        instruments: &InstrumentTable,
    ) -> Result<Order, RejectReason> {
        let instrument = instruments
            .get(&request.symbol)
            .ok_or(RejectReason::UnknownSymbol)?;

        if !request.qty.is_finite() || request.qty <= 0.0 {
            return Err(RejectReason::InvalidQuantity);
        }

        let price = match (request.kind, request.limit_price) {
            (OrderKind::Limit, Some(limit)) => {
                if !limit.is_finite() || limit <= 0.0 {
                    return Err(RejectReason::InvalidLimitPrice);
                }
                limit
            }
            _ => instrument.last,
        };
        let notional = price * request.qty;

        match request.side {
            Side::Buy => {
                if self.cash < notional {
                    return Err(RejectReason::InsufficientCash);
                }
            }
            Side::Sell => {
                let held = self.position(&request.symbol).map_or(0.0, |p| p.qty);
                if held < request.qty {
                    return Err(RejectReason::InsufficientShares);
                }
            }
        }

        let order = Order {
            id: self.next_order_id,
            symbol: request.symbol.clone(),
            side: request.side,
            kind: request.kind,
            qty: request.qty,
            price,
            status: OrderStatus::Filled,
            created_at: Utc::now(),
        };
        self.next_order_id += 1;

        match request.side {
            Side::Buy => {
                self.cash -= notional;
                match self.positions.iter_mut().find(|p| p.symbol == request.symbol) {
                    Some(position) => {
                        let total_qty = position.qty + request.qty;
                        position.avg_price =
                            (position.avg_price * position.qty + notional) / total_qty;
                        position.qty = total_qty;
                    }
                    None => self.positions.push(Position {
                        symbol: request.symbol.clone(),
                        qty: request.qty,
                        avg_price: price,
                    }),
                }
            }
            Side::Sell => {
                self.cash += notional;
                if let Some(position) =
                    self.positions.iter_mut().find(|p| p.symbol == request.symbol)
                {
                    position.qty -= request.qty;
                }
                // Sold out entirely: drop the entry rather than keep qty = 0
                self.positions.retain(|p| p.qty > 0.0);
            }
        }

        self.orders.push_front(order.clone());
        self.orders.truncate(ORDER_HISTORY_LIMIT);

        Ok(order)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new(STARTING_CASH)
    }
}
