//! Baselines and text screening results.

use serde::{Deserialize, Serialize};

/// Historical per-symbol averages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Baseline {
    /// Average post count per analysis window.
    pub social_avg: f64,
    /// Average traded volume.
    pub volume_avg: f64,
}

impl Baseline {
    pub fn new(social_avg: f64, volume_avg: f64) -> Self {
        Self {
            social_avg,
            volume_avg,
        }
    }
}

/// Outcome of screening a single message for pump keywords.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextScreen {
    pub suspicious: bool,
    /// Matched keywords, in keyword-list order.
    pub matched: Vec<String>,
}
