//! Contract definitions for anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod outlier_model;

pub use outlier_model::OutlierModel;
