//! Anomaly Detection Facade
//!
//! Single entry point to the anomaly detection module:
//! - `Anomaly`, `AnomalyKind`, `OutlierModel` and errors from SPI
//! - `AnomalyConfig` and `IsolationForestConfig` from API
//! - `MarketAnomalyDetector` and the outlier models from Core

pub use anomaly_spi::*;

pub use anomaly_api::*;

pub use anomaly_core::*;
