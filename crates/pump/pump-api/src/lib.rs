//! Pump Detection API
//!
//! Configuration for the pump-and-dump detector: spike thresholds, the
//! per-signal weight table, severity cut-offs and keyword lists.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use pump_spi::{
    invalid_parameter, AlertSeverity, Baseline, BaselineStore, MarketMetrics, PumpAlert, PumpError,
    PumpSignal, PumpSignalKind, Result, SocialMetrics, TextScreen,
};

/// Urgency, guarantee, insider, hype and coordination phrases (Indonesian + English).
pub const DEFAULT_PUMP_KEYWORDS: &[&str] = &[
    // Urgent calls to action
    "buruan beli",
    "cepat beli",
    "jangan sampai ketinggalan",
    "last chance",
    "limited time",
    "hari ini saja",
    "sekarang atau tidak",
    // Guarantees
    "pasti naik",
    "guaranteed",
    "100% profit",
    "no risk",
    "tanpa risiko",
    // Insider claims
    "insider info",
    "info dalam",
    "rahasia",
    "secret",
    "belum tersebar",
    // Extreme predictions
    "to the moon",
    "moon",
    "1000%",
    "10x",
    "100x",
    "terbang",
    "rocket",
    // Group coordination
    "mari borong",
    "ayo beli bareng",
    "pompa",
    "pump it",
];

/// Phrases typical of fundamental discussion.
pub const DEFAULT_LEGITIMATE_KEYWORDS: &[&str] = &[
    "laporan keuangan",
    "financial report",
    "earning",
    "fundamental",
    "dividen",
    "dividend",
    "annual report",
    "quarterly",
    "analyst",
];

// ============================================================================
// Signal Weights
// ============================================================================

/// Per-kind weights for the confidence average.
///
/// Kinds without a dedicated field use `fallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalWeights {
    pub social_spike: f64,
    pub volume_spike: f64,
    pub price_spike: f64,
    pub new_accounts: f64,
    pub keyword_pattern: f64,
    pub coordinated_posts: f64,
    pub fallback: f64,
}

impl Default for SignalWeights {
    fn default() -> Self {
        Self {
            social_spike: 0.20,
            volume_spike: 0.25,
            price_spike: 0.20,
            new_accounts: 0.10,
            keyword_pattern: 0.15,
            coordinated_posts: 0.10,
            fallback: 0.10,
        }
    }
}

impl SignalWeights {
    pub fn weight(&self, kind: PumpSignalKind) -> f64 {
        match kind {
            PumpSignalKind::SocialSpike => self.social_spike,
            PumpSignalKind::VolumeSpike => self.volume_spike,
            PumpSignalKind::PriceSpike => self.price_spike,
            PumpSignalKind::NewAccounts => self.new_accounts,
            PumpSignalKind::KeywordPattern => self.keyword_pattern,
            PumpSignalKind::CoordinatedPosts => self.coordinated_posts,
            PumpSignalKind::TimePattern => self.fallback,
        }
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("weights.social_spike", self.social_spike),
            ("weights.volume_spike", self.volume_spike),
            ("weights.price_spike", self.price_spike),
            ("weights.new_accounts", self.new_accounts),
            ("weights.keyword_pattern", self.keyword_pattern),
            ("weights.coordinated_posts", self.coordinated_posts),
            ("weights.fallback", self.fallback),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(invalid_parameter(name, "must be positive"));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Severity Cut-offs
// ============================================================================

/// Minimum confidence for each severity above `Low`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityCutoffs {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
}

impl Default for SeverityCutoffs {
    fn default() -> Self {
        Self {
            critical: 0.9,
            high: 0.75,
            medium: 0.6,
        }
    }
}

impl SeverityCutoffs {
    pub fn classify(&self, confidence: f64) -> AlertSeverity {
        if confidence >= self.critical {
            AlertSeverity::Critical
        } else if confidence >= self.high {
            AlertSeverity::High
        } else if confidence >= self.medium {
            AlertSeverity::Medium
        } else {
            AlertSeverity::Low
        }
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.critical)
            || !(0.0..=1.0).contains(&self.high)
            || !(0.0..=1.0).contains(&self.medium)
        {
            return Err(invalid_parameter("severity_cutoffs", "must be in range [0, 1]"));
        }
        if !(self.critical >= self.high && self.high >= self.medium) {
            return Err(invalid_parameter(
                "severity_cutoffs",
                "must satisfy critical >= high >= medium",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Detector Configuration
// ============================================================================

/// Pump-and-dump detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PumpConfig {
    /// Post count multiple of the baseline that counts as a spike (default: 3.0).
    pub social_spike_threshold: f64,
    /// Volume ratio that counts as a spike (default: 5.0).
    pub volume_spike_threshold: f64,
    /// Fractional price change that counts as a spike (default: 0.15).
    pub price_spike_threshold: f64,
    /// Alerts below this confidence are suppressed (default: 0.5).
    pub min_confidence_threshold: f64,
    /// Accounts younger than this are "new" (default: 30).
    pub new_account_days: f64,
    /// Social baseline when neither caller nor store supplies one (default: 10).
    pub default_social_baseline: f64,
    /// Posts per author above which posting looks coordinated (default: 3.0).
    pub coordinated_posts_per_author: f64,
    /// Confidence multiplier when legitimate keywords are present (default: 0.7).
    pub legitimate_dampening: f64,
    /// Keyword matches needed for `check_text_for_pump` (default: 2).
    pub text_screen_min_hits: usize,
    pub weights: SignalWeights,
    pub severity_cutoffs: SeverityCutoffs,
    pub pump_keywords: Vec<String>,
    pub legitimate_keywords: Vec<String>,
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            social_spike_threshold: 3.0,
            volume_spike_threshold: 5.0,
            price_spike_threshold: 0.15,
            min_confidence_threshold: 0.5,
            new_account_days: 30.0,
            default_social_baseline: 10.0,
            coordinated_posts_per_author: 3.0,
            legitimate_dampening: 0.7,
            text_screen_min_hits: 2,
            weights: SignalWeights::default(),
            severity_cutoffs: SeverityCutoffs::default(),
            pump_keywords: DEFAULT_PUMP_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            legitimate_keywords: DEFAULT_LEGITIMATE_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }
}

impl PumpConfig {
    pub fn new(social_spike: f64, volume_spike: f64, price_spike: f64) -> Self {
        Self {
            social_spike_threshold: social_spike,
            volume_spike_threshold: volume_spike,
            price_spike_threshold: price_spike,
            ..Self::default()
        }
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence_threshold = min_confidence;
        self
    }

    pub fn with_new_account_days(mut self, days: f64) -> Self {
        self.new_account_days = days;
        self
    }

    pub fn with_weights(mut self, weights: SignalWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_severity_cutoffs(mut self, cutoffs: SeverityCutoffs) -> Self {
        self.severity_cutoffs = cutoffs;
        self
    }

    /// Append extra pump keywords.
    pub fn with_pump_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pump_keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("social_spike_threshold", self.social_spike_threshold),
            ("volume_spike_threshold", self.volume_spike_threshold),
            ("price_spike_threshold", self.price_spike_threshold),
            ("new_account_days", self.new_account_days),
            ("default_social_baseline", self.default_social_baseline),
            ("coordinated_posts_per_author", self.coordinated_posts_per_author),
        ] {
            if !(value > 0.0 && value.is_finite()) {
                return Err(invalid_parameter(name, "must be positive"));
            }
        }
        if !(0.0..=1.0).contains(&self.min_confidence_threshold) {
            return Err(invalid_parameter(
                "min_confidence_threshold",
                "must be in range [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.legitimate_dampening) {
            return Err(invalid_parameter("legitimate_dampening", "must be in range [0, 1]"));
        }
        if self.text_screen_min_hits == 0 {
            return Err(invalid_parameter("text_screen_min_hits", "must be at least 1"));
        }
        if self.pump_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(invalid_parameter("pump_keywords", "must not contain empty keywords"));
        }
        self.weights.validate()?;
        self.severity_cutoffs.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PumpConfig::default();
        assert_eq!(config.social_spike_threshold, 3.0);
        assert_eq!(config.volume_spike_threshold, 5.0);
        assert_eq!(config.price_spike_threshold, 0.15);
        assert_eq!(config.pump_keywords.len(), 28);
        assert_eq!(config.legitimate_keywords.len(), 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_weight_table() {
        let weights = SignalWeights::default();
        assert_eq!(weights.weight(PumpSignalKind::VolumeSpike), 0.25);
        assert_eq!(weights.weight(PumpSignalKind::KeywordPattern), 0.15);
        assert_eq!(weights.weight(PumpSignalKind::TimePattern), 0.10);
    }

    #[test]
    fn test_severity_buckets() {
        let cutoffs = SeverityCutoffs::default();
        assert_eq!(cutoffs.classify(0.95), AlertSeverity::Critical);
        assert_eq!(cutoffs.classify(0.9), AlertSeverity::Critical);
        assert_eq!(cutoffs.classify(0.75), AlertSeverity::High);
        assert_eq!(cutoffs.classify(0.6), AlertSeverity::Medium);
        assert_eq!(cutoffs.classify(0.59), AlertSeverity::Low);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(PumpConfig::default().with_min_confidence(1.5).validate().is_err());
        assert!(PumpConfig::new(0.0, 5.0, 0.15).validate().is_err());

        let cutoffs = SeverityCutoffs {
            critical: 0.5,
            high: 0.75,
            medium: 0.6,
        };
        assert!(PumpConfig::default()
            .with_severity_cutoffs(cutoffs)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: PumpConfig =
            serde_json::from_str(r#"{"volume_spike_threshold": 4.0, "weights": {"volume_spike": 0.5}}"#)
                .unwrap();
        assert_eq!(config.volume_spike_threshold, 4.0);
        assert_eq!(config.weights.volume_spike, 0.5);
        assert_eq!(config.weights.price_spike, 0.20);
        assert_eq!(config.pump_keywords.len(), 28);
    }
}
