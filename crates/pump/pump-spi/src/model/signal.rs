//! Pump signals.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of pump indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PumpSignalKind {
    /// Sudden increase in social mentions.
    SocialSpike,
    /// Abnormal trading volume.
    VolumeSpike,
    /// Rapid price increase.
    PriceSpike,
    /// Many posts from few authors.
    CoordinatedPosts,
    /// Activity from recently created accounts.
    NewAccounts,
    /// Pump-related keywords.
    KeywordPattern,
    /// Suspicious timing. No generator produces it yet.
    TimePattern,
}

impl PumpSignalKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PumpSignalKind::SocialSpike => "social_spike",
            PumpSignalKind::VolumeSpike => "volume_spike",
            PumpSignalKind::PriceSpike => "price_spike",
            PumpSignalKind::CoordinatedPosts => "coordinated_posts",
            PumpSignalKind::NewAccounts => "new_accounts",
            PumpSignalKind::KeywordPattern => "keyword_pattern",
            PumpSignalKind::TimePattern => "time_pattern",
        }
    }
}

impl fmt::Display for PumpSignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One fired pump indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpSignal {
    pub kind: PumpSignalKind,
    pub symbol: String,
    /// 0-1 scale.
    pub confidence: f64,
    pub evidence: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl PumpSignal {
    pub fn new(kind: PumpSignalKind, symbol: &str, confidence: f64, evidence: String) -> Self {
        Self {
            kind,
            symbol: symbol.to_string(),
            confidence,
            evidence,
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.to_string(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&PumpSignalKind::CoordinatedPosts).unwrap();
        assert_eq!(json, "\"coordinated_posts\"");
        assert_eq!(PumpSignalKind::TimePattern.to_string(), "time_pattern");
    }

    #[test]
    fn test_metadata_builder() {
        let signal = PumpSignal::new(PumpSignalKind::VolumeSpike, "GOTO", 0.9, "Volume 10.0x average".into())
            .with_metadata("volume_ratio", 10.0);
        assert_eq!(signal.metadata["volume_ratio"], serde_json::json!(10.0));
    }
}
