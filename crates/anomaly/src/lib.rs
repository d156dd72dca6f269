//! # market-anomaly
//!
//! Flags price, volume, volatility and gap bars that break from their
//! trailing baseline, plus an aggregate score for ranking symbols.

pub use anomaly_facade::*;
pub use series::{Bar, Bars};
