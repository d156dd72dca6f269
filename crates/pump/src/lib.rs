//! # market-pump
//!
//! Pump-and-dump detection: fuses social, volume, price, account-age,
//! keyword and coordination signals into one graded alert.

pub use pump_facade::*;
