use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Buy,
    Sell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    #[default]
    Market,
    Limit,
}

/// Terminal status assigned once at creation. Rejected submissions are
/// returned to the caller but never recorded, so stored orders are always
/// `Filled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Filled,
    Rejected,
}

/// Incoming order submission.
///
/// Absent fields take the defaults the wire contract promises: side buy,
/// kind market, qty 0 (which the engine then rejects as non-positive).
/// A field of the wrong shape is a parse error upstream, not a silent
/// coercion here.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub side: Side,
    #[serde(default)]
    pub qty: f64,
    #[serde(rename = "type", default)]
    pub kind: OrderKind,
    #[serde(default)]
    pub limit_price: Option<f64>,
}

/// Executed order. Append-only: never mutated after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub symbol: String,
    pub side: Side,
    #[serde(rename = "type")]
    pub kind: OrderKind,
    pub qty: f64,
    /// Fill price, not the requested limit price
    pub price: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Held position. qty stays > 0 for as long as the entry exists; a sell
/// that empties it removes the entry instead of leaving qty = 0 behind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub symbol: String,
    pub qty: f64,
    /// Quantity-weighted average cost basis
    pub avg_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_match_wire_contract() {
        let request: OrderRequest = serde_json::from_str(r#"{"symbol":"NABIL"}"#).unwrap();

        assert_eq!(request.side, Side::Buy);
        assert_eq!(request.kind, OrderKind::Market);
        assert_eq!(request.qty, 0.0);
        assert!(request.limit_price.is_none());
    }

    #[test]
    fn order_kind_rides_the_type_field() {
        let request: OrderRequest =
            serde_json::from_str(r#"{"symbol":"HDL","type":"limit","limitPrice":2200}"#).unwrap();

        assert_eq!(request.kind, OrderKind::Limit);
        assert_eq!(request.limit_price, Some(2200.0));
    }
}
