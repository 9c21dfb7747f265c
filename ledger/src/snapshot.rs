//! Read-only views derived from the ledger and the reference data.
//!
//! Builders never mutate: the market snapshot stamps the read time onto the
//! static quote table, and the portfolio snapshot marks each position to the
//! current reference price.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::instruments::{Instrument, InstrumentTable};
use crate::types::{Order, Position};
use crate::Ledger;

/// Session metadata plus the full quote table, stamped at read time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub market: String,
    pub currency: String,
    pub timezone: String,
    pub session: String,
    pub is_open: bool,
    pub as_of: DateTime<Utc>,
    pub instruments: Vec<Instrument>,
}

/// A held position marked to the current reference price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionView {
    pub symbol: String,
    pub qty: f64,
    pub avg_price: f64,
    pub market_price: f64,
    pub market_value: f64,
    pub unrealized_pnl: f64,
}

/// Cash, fill history (newest first), and marked positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub cash: f64,
    pub orders: Vec<Order>,
    pub positions: Vec<PositionView>,
}

/// Passes the reference table through unchanged under a fresh timestamp.
pub fn market_snapshot(instruments: &InstrumentTable) -> MarketSnapshot {
    let meta = instruments.meta();
    MarketSnapshot {
        market: meta.market.clone(),
        currency: meta.currency.clone(),
        timezone: meta.timezone.clone(),
        session: meta.session.clone(),
        is_open: meta.is_open,
        as_of: Utc::now(),
        instruments: instruments.instruments().to_vec(),
    }
}

fn mark_to_market(position: &Position, instruments: &InstrumentTable) -> PositionView {
    // A symbol missing from the table marks at its own cost basis
    let market_price = instruments
        .get(&position.symbol)
        .map_or(position.avg_price, |i| i.last);

    PositionView {
        symbol: position.symbol.clone(),
        qty: position.qty,
        avg_price: position.avg_price,
        market_price,
        market_value: market_price * position.qty,
        unrealized_pnl: (market_price - position.avg_price) * position.qty,
    }
}

/// Pure function of the current ledger and reference state.
pub fn portfolio_snapshot(ledger: &Ledger, instruments: &InstrumentTable) -> PortfolioSnapshot {
    PortfolioSnapshot {
        cash: ledger.cash(),
        orders: ledger.orders().iter().cloned().collect(),
        positions: ledger
            .positions()
            .iter()
            .map(|p| mark_to_market(p, instruments))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OrderKind, OrderRequest, Side};

    fn buy(symbol: &str, qty: f64, limit_price: Option<f64>) -> OrderRequest {
        OrderRequest {
            symbol: symbol.to_string(),
            side: Side::Buy,
            qty,
            kind: if limit_price.is_some() {
                OrderKind::Limit
            } else {
                OrderKind::Market
            },
            limit_price,
        }
    }

    #[test]
    fn positions_are_marked_to_reference_price() {
        let instruments = InstrumentTable::nepse();
        let mut ledger = Ledger::default();
        ledger
            .execute(&buy("NABIL", 10.0, Some(600.0)), &instruments)
            .unwrap();

        let portfolio = portfolio_snapshot(&ledger, &instruments);
        let view = &portfolio.positions[0];

        assert_eq!(view.market_price, 612.4);
        assert!((view.market_value - 6_124.0).abs() < 1e-6);
        assert!((view.unrealized_pnl - 124.0).abs() < 1e-6);
    }

    /// A position whose symbol has left the reference table falls back to
    /// its own cost basis, showing flat PnL rather than failing.
    #[test]
    fn missing_instrument_marks_at_cost() {
        let instruments = InstrumentTable::nepse();
        let mut ledger = Ledger::default();
        ledger
            .execute(&buy("NABIL", 10.0, Some(600.0)), &instruments)
            .unwrap();

        let empty = InstrumentTable::new(instruments.meta().clone(), Vec::new());
        let portfolio = portfolio_snapshot(&ledger, &empty);
        let view = &portfolio.positions[0];

        assert_eq!(view.market_price, 600.0);
        assert_eq!(view.unrealized_pnl, 0.0);
    }

    /// Two reads with no order in between are identical.
    #[test]
    fn portfolio_snapshot_is_idempotent() {
        let instruments = InstrumentTable::nepse();
        let mut ledger = Ledger::default();
        ledger.execute(&buy("SCB", 5.0, None), &instruments).unwrap();

        let first = portfolio_snapshot(&ledger, &instruments);
        let second = portfolio_snapshot(&ledger, &instruments);

        assert_eq!(first, second);
    }

    #[test]
    fn market_snapshot_carries_meta_and_full_table() {
        let instruments = InstrumentTable::nepse();
        let snapshot = market_snapshot(&instruments);

        assert_eq!(snapshot.market, "NEPSE");
        assert_eq!(snapshot.currency, "NPR");
        assert!(snapshot.is_open);
        assert_eq!(snapshot.instruments.len(), 8);
    }

    /// Wire names must match the dashboard contract exactly.
    #[test]
    fn serializes_with_camel_case_field_names() {
        let instruments = InstrumentTable::nepse();
        let mut ledger = Ledger::default();
        ledger.execute(&buy("NABIL", 10.0, None), &instruments).unwrap();

        let json = serde_json::to_value(portfolio_snapshot(&ledger, &instruments)).unwrap();
        let position = &json["positions"][0];
        for key in ["avgPrice", "marketPrice", "marketValue", "unrealizedPnl"] {
            assert!(position.get(key).is_some(), "missing {key}");
        }

        let order = &json["orders"][0];
        assert_eq!(order["type"], "market");
        assert_eq!(order["side"], "buy");
        assert_eq!(order["status"], "filled");
        assert!(order.get("createdAt").is_some());

        let market = serde_json::to_value(market_snapshot(&instruments)).unwrap();
        assert!(market.get("asOf").is_some());
        assert!(market["instruments"][0].get("changePct").is_some());
        assert!(market["instruments"][0].get("prevClose").is_some());
    }
}
