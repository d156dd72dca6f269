//! Data models for pump detection.

mod alert;
mod baseline;
mod metrics;
mod signal;

pub use alert::{AlertSeverity, PumpAlert};
pub use baseline::{Baseline, TextScreen};
pub use metrics::{MarketMetrics, SocialMetrics};
pub use signal::{PumpSignal, PumpSignalKind};
