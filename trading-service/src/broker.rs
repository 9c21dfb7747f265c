//! Shared broker state for the HTTP handlers.

use ledger::{
    market_snapshot, portfolio_snapshot, InstrumentTable, Ledger, MarketSnapshot, Order,
    OrderRequest, PortfolioSnapshot, RejectReason,
};
use tokio::sync::RwLock;

/// Owns the account ledger behind a lock, next to the immutable reference
/// data. Constructed once at startup and shared via `Arc`.
///
/// Order submission takes the write lock, so concurrent submissions
/// serialize into single atomic accept-or-reject decisions; snapshot reads
/// share the read lock.
pub struct PaperBroker {
    instruments: InstrumentTable,
    ledger: RwLock<Ledger>,
}

impl PaperBroker {
    /// Creates a broker over the NEPSE reference table and a fresh account.
    pub fn new(starting_cash: f64) -> Self {
        Self {
            instruments: InstrumentTable::nepse(),
            ledger: RwLock::new(Ledger::new(starting_cash)),
        }
    }

    /// Reference data is immutable, so no lock is needed here.
    pub fn market_snapshot(&self) -> MarketSnapshot {
        market_snapshot(&self.instruments)
    }

    pub async fn portfolio_snapshot(&self) -> PortfolioSnapshot {
        let ledger = self.ledger.read().await;
        portfolio_snapshot(&ledger, &self.instruments)
    }

    pub async fn place_order(&self, request: &OrderRequest) -> Result<Order, RejectReason> {
        let mut ledger = self.ledger.write().await;
        ledger.execute(request, &self.instruments)
    }
}
