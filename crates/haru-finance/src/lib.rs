//! Profit and loss calculation for a round-trip trade.
//!
//! Broker fees apply to both the buy and the sell leg; transaction tax
//! applies to the sell leg only.

pub mod trade;

pub use trade::{Outcome, TradeInput, TradeSummary, settle};
