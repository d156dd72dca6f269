//! Pump Detection Facade
//!
//! Single entry point to the pump-and-dump detection module:
//! - Signal, alert and snapshot models plus `BaselineStore` from SPI
//! - `PumpConfig`, weights and keyword lists from API
//! - `PumpDetector` and the baseline stores from Core

pub use pump_spi::*;

pub use pump_api::*;

pub use pump_core::*;
