//! Market anomaly records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of statistically abnormal bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnomalyKind {
    /// Abnormal close-to-close return, either direction.
    PriceSpike,
    /// Abnormally high volume.
    VolumeSpike,
    /// Abnormally wide true range.
    VolatilityExplosion,
    /// Abnormal open versus previous close, either direction.
    GapAnomaly,
}

impl AnomalyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyKind::PriceSpike => "price_spike",
            AnomalyKind::VolumeSpike => "volume_spike",
            AnomalyKind::VolatilityExplosion => "volatility_explosion",
            AnomalyKind::GapAnomaly => "gap_anomaly",
        }
    }
}

impl fmt::Display for AnomalyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A detected market anomaly. Read-only once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub kind: AnomalyKind,
    pub symbol: String,
    /// Detection time, unix seconds.
    pub timestamp: u64,
    /// Bar position in the caller's arrays.
    pub index: usize,
    /// 0-1 scale.
    pub severity: f64,
    pub z_score: f64,
    /// The observed metric value (return, volume, true range or gap).
    pub value: f64,
    /// Trailing window `mean ± 2σ`.
    pub expected_range: (f64, f64),
    pub description: String,
}

impl Anomaly {
    /// True when `value` falls outside `expected_range`.
    pub fn is_outside_expected(&self) -> bool {
        self.value < self.expected_range.0 || self.value > self.expected_range.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(AnomalyKind::PriceSpike.to_string(), "price_spike");
        assert_eq!(AnomalyKind::VolatilityExplosion.as_str(), "volatility_explosion");
    }

    #[test]
    fn test_outside_expected() {
        let anomaly = Anomaly {
            kind: AnomalyKind::VolumeSpike,
            symbol: "BBCA".to_string(),
            timestamp: 0,
            index: 61,
            severity: 0.6,
            z_score: 5.0,
            value: 5_000.0,
            expected_range: (800.0, 1_200.0),
            description: "Volume 5.0x normal".to_string(),
        };
        assert!(anomaly.is_outside_expected());
    }
}
