//! Pump alerts.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::signal::PumpSignal;

/// Alert severity, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertSeverity::Low => "low",
            AlertSeverity::Medium => "medium",
            AlertSeverity::High => "high",
            AlertSeverity::Critical => "critical",
        }
    }

    /// Fixed guidance shown with an alert of this severity.
    pub fn recommended_action(&self) -> &'static str {
        match self {
            AlertSeverity::Critical => "Avoid trading. Report to authorities if applicable.",
            AlertSeverity::High => "Avoid buying. Wait for activity to normalize.",
            AlertSeverity::Medium => "Exercise caution. Do additional research.",
            AlertSeverity::Low => "Monitor situation. Normal trading with awareness.",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Aggregated pump-and-dump alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpAlert {
    pub symbol: String,
    pub severity: AlertSeverity,
    /// Weighted, possibly dampened, 0-1 confidence.
    pub confidence: f64,
    pub signals: Vec<PumpSignal>,
    pub message: String,
    pub recommended_action: String,
    /// Detection time, unix seconds.
    pub timestamp: u64,
}
