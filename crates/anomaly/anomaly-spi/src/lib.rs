//! Anomaly Detection Service Provider Interface
//!
//! Defines the market anomaly record, the outlier-model capability trait,
//! and the error type shared by the anomaly crates.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::OutlierModel;
pub use error::{invalid_parameter, AnomalyError, Result};
pub use model::{Anomaly, AnomalyKind, Verdict};
