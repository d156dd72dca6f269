//! Anomaly Detection Core
//!
//! Implementations for market anomaly detection and outlier models.

mod detectors;
mod features;
mod outlier;

pub use detectors::*;
pub use features::bar_features;
pub use outlier::*;
