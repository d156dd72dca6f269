//! Data models for anomaly detection.
//!
//! This module contains data structures used throughout the anomaly detection system.

mod anomaly;
mod verdict;

pub use anomaly::{Anomaly, AnomalyKind};
pub use verdict::Verdict;
