//! HTTP surface of the paper-trading sandbox.
//!
//! Three JSON operations over a single shared account: market snapshot,
//! order placement, portfolio snapshot. State lives only for the life of
//! the process and resets to the starting cash on restart.

pub mod broker;
pub mod routes;
pub mod types;

pub use broker::PaperBroker;
pub use routes::router;
