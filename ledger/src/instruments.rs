//! Immutable reference data: the exchange's stock list and session metadata.
//!
//! Quotes are synthetic and never move while the process runs; they exist so
//! the execution engine has a reference price to fill against. Symbol is the
//! only lookup key.

use serde::{Deserialize, Serialize};

/// One tradable symbol and its current quote fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    pub symbol: String,
    pub name: String,
    /// Last traded price, used as the fill price for market orders
    pub last: f64,
    pub change: f64,
    pub change_pct: f64,
    pub volume: u64,
    pub day_high: f64,
    pub day_low: f64,
    pub open: f64,
    pub prev_close: f64,
}

/// Exchange session metadata reported alongside the quote table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketMeta {
    pub market: String,
    pub currency: String,
    pub timezone: String,
    pub session: String,
    pub is_open: bool,
}

/// The full reference table. One entry per symbol.
pub struct InstrumentTable {
    meta: MarketMeta,
    instruments: Vec<Instrument>,
}

#[allow(clippy::too_many_arguments)]
fn quote(
    symbol: &str,
    name: &str,
    last: f64,
    change: f64,
    change_pct: f64,
    volume: u64,
    day_high: f64,
    day_low: f64,
    open: f64,
    prev_close: f64,
) -> Instrument {
    Instrument {
        symbol: symbol.to_string(),
        name: name.to_string(),
        last,
        change,
        change_pct,
        volume,
        day_high,
        day_low,
        open,
        prev_close,
    }
}

impl InstrumentTable {
    /// Builds a table from explicit metadata and quotes.
    pub fn new(meta: MarketMeta, instruments: Vec<Instrument>) -> Self {
        Self { meta, instruments }
    }

    /// The NEPSE demo universe: eight liquid symbols with a fixed snapshot
    /// of their quote fields.
    pub fn nepse() -> Self {
        let meta = MarketMeta {
            market: "NEPSE".to_string(),
            currency: "NPR".to_string(),
            timezone: "Asia/Kathmandu".to_string(),
            session: "Regular".to_string(),
            is_open: true,
        };

        let instruments = vec![
            quote("NABIL", "Nabil Bank", 612.4, 8.7, 1.44, 382_140, 615.0, 603.5, 606.2, 603.7),
            quote("NLIC", "Nepal Life Insurance", 894.2, -10.6, -1.17, 168_990, 905.0, 889.5, 902.8, 904.8),
            quote("NRIC", "Nepal Reinsurance", 1024.5, 22.8, 2.28, 210_430, 1030.0, 1001.0, 1006.7, 1001.7),
            quote("ADBL", "Agricultural Development Bank", 305.1, -2.4, -0.78, 514_820, 309.5, 301.2, 306.4, 307.5),
            quote("HDL", "Himalayan Distillery", 2245.0, 54.0, 2.46, 45_210, 2260.0, 2204.0, 2210.0, 2191.0),
            quote("SCB", "Standard Chartered Bank", 455.2, 4.1, 0.91, 92_210, 458.0, 448.5, 451.5, 451.1),
            quote("UPPER", "Upper Tamakoshi Hydropower", 206.7, -1.9, -0.91, 610_340, 210.2, 204.1, 208.8, 208.6),
            quote("CHCL", "Chilime Hydropower", 593.4, 12.2, 2.1, 145_120, 597.0, 584.2, 586.8, 581.2),
        ];

        Self::new(meta, instruments)
    }

    pub fn meta(&self) -> &MarketMeta {
        &self.meta
    }

    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    /// Looks up an instrument by its exact symbol.
    pub fn get(&self, symbol: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.symbol == symbol)
    }
}
