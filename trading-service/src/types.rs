//! API envelopes for the JSON endpoints.

use ledger::Order;
use serde::{Deserialize, Serialize};

/// Returned by `POST /orders` on a fill.
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderResult {
    pub ok: bool,
    pub message: String,
    pub order: Order,
}

/// Returned for every rejection class, including unparseable payloads.
#[derive(Debug, Serialize, Deserialize)]
pub struct Rejection {
    pub ok: bool,
    pub message: String,
}
