//! Error types for anomaly detection.
//!
//! This module contains error types and the Result alias.

mod anomaly_error;

pub use anomaly_error::{invalid_parameter, AnomalyError, Result};
