//! Pump Detection Service Provider Interface
//!
//! Defines the signal and alert records, the social/market snapshot
//! inputs, the baseline store contract, and the error type shared by the
//! pump crates.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::BaselineStore;
pub use error::{invalid_parameter, PumpError, Result};
pub use model::{
    AlertSeverity, Baseline, MarketMetrics, PumpAlert, PumpSignal, PumpSignalKind, SocialMetrics,
    TextScreen,
};
