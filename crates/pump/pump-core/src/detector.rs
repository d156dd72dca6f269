//! Pump-and-dump detector implementation.

use std::time::{SystemTime, UNIX_EPOCH};

use pump_api::PumpConfig;
use pump_spi::{
    Baseline, BaselineStore, MarketMetrics, PumpAlert, PumpSignal, Result, SocialMetrics,
    TextScreen,
};
use tracing::{debug, info, warn};

use crate::signals::{self, KeywordSet};
use crate::store::InMemoryBaselineStore;

// ============================================================================
// Pump Detector
// ============================================================================

/// Fuses social and market signals into a severity-graded alert.
///
/// Signals are averaged with per-kind weights normalized over the kinds
/// that actually fired. Legitimate keywords dampen the result; alerts
/// below `min_confidence_threshold` are suppressed.
///
/// The baseline store is the detector's only mutable state. The default
/// [`InMemoryBaselineStore`] is owned by this detector; use
/// [`SharedBaselineStore`](crate::SharedBaselineStore) to share baselines
/// across detectors or threads.
#[derive(Debug, Clone)]
pub struct PumpDetector<S: BaselineStore = InMemoryBaselineStore> {
    config: PumpConfig,
    store: S,
    pump_keywords: KeywordSet,
    legitimate_keywords: KeywordSet,
}

impl PumpDetector {
    /// Create a detector with an empty in-memory baseline store.
    pub fn new(config: PumpConfig) -> Result<Self> {
        Self::with_store(config, InMemoryBaselineStore::new())
    }
}

impl Default for PumpDetector {
    fn default() -> Self {
        let config = PumpConfig::default();
        Self {
            pump_keywords: KeywordSet::new(&config.pump_keywords),
            legitimate_keywords: KeywordSet::new(&config.legitimate_keywords),
            config,
            store: InMemoryBaselineStore::new(),
        }
    }
}

impl<S: BaselineStore> PumpDetector<S> {
    /// Create a detector backed by the given baseline store.
    pub fn with_store(config: PumpConfig, store: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pump_keywords: KeywordSet::new(&config.pump_keywords),
            legitimate_keywords: KeywordSet::new(&config.legitimate_keywords),
            config,
            store,
        })
    }

    pub fn config(&self) -> &PumpConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Analyze one symbol snapshot.
    ///
    /// `historical_social` overrides the stored social baseline when it is
    /// positive. Returns `None` when nothing fires or the fused confidence
    /// stays below the gate.
    pub fn analyze(
        &self,
        social: &SocialMetrics,
        market: &MarketMetrics,
        historical_social: Option<f64>,
    ) -> Option<PumpAlert> {
        let symbol = social.symbol.as_str();
        let signals = self.collect_signals(social, market, historical_social);
        if signals.is_empty() {
            debug!(symbol, "no pump signals");
            return None;
        }

        let mut confidence = self.fuse(&signals);
        let legitimate = social
            .keyword_flags
            .iter()
            .any(|flag| self.legitimate_keywords.contains(flag));
        if legitimate {
            confidence *= self.config.legitimate_dampening;
        }

        if confidence < self.config.min_confidence_threshold {
            debug!(
                symbol,
                signals = signals.len(),
                confidence,
                legitimate,
                "pump confidence below threshold"
            );
            return None;
        }

        let severity = self.config.severity_cutoffs.classify(confidence);
        let summary: Vec<&str> = signals.iter().take(3).map(|s| s.evidence.as_str()).collect();
        let message = format!(
            "Potential pump-and-dump detected for {}. Severity: {}. Signals: {}",
            symbol,
            severity,
            summary.join("; ")
        );

        info!(
            symbol,
            %severity,
            confidence,
            signals = signals.len(),
            "pump alert raised"
        );

        Some(PumpAlert {
            symbol: symbol.to_string(),
            severity,
            confidence,
            message,
            recommended_action: severity.recommended_action().to_string(),
            signals,
            timestamp: now_unix(),
        })
    }

    /// Every signal that fires for the snapshot, in generation order:
    /// social, volume, price, new accounts, keywords, coordinated posts.
    pub fn collect_signals(
        &self,
        social: &SocialMetrics,
        market: &MarketMetrics,
        historical_social: Option<f64>,
    ) -> Vec<PumpSignal> {
        let symbol = social.symbol.as_str();
        let baseline = self.social_baseline(symbol, historical_social);

        [
            signals::social_spike(&self.config, social, baseline),
            signals::volume_spike(&self.config, market, symbol),
            signals::price_spike(&self.config, market, symbol),
            signals::new_accounts(&self.config, social),
            signals::keyword_pattern(&self.pump_keywords, social),
            signals::coordinated_posts(&self.config, social),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Quick triage of a single message: suspicious when at least
    /// `text_screen_min_hits` pump keywords occur (case-insensitive substring).
    pub fn check_text_for_pump(&self, text: &str) -> TextScreen {
        let lower = text.to_lowercase();
        let matched: Vec<String> = self.pump_keywords.found_in(&lower).cloned().collect();
        TextScreen {
            suspicious: matched.len() >= self.config.text_screen_min_hits,
            matched,
        }
    }

    /// Overwrite the stored baseline for `symbol`.
    pub fn update_baseline(&mut self, symbol: &str, social_avg: f64, volume_avg: f64) {
        debug!(symbol, social_avg, volume_avg, "baseline updated");
        self.store.set(symbol, Baseline::new(social_avg, volume_avg));
    }

    pub fn baseline(&self, symbol: &str) -> Option<Baseline> {
        self.store.get(symbol)
    }

    fn social_baseline(&self, symbol: &str, historical_social: Option<f64>) -> f64 {
        if let Some(historical) = historical_social.filter(|h| *h > 0.0) {
            return historical;
        }
        match self.store.get(symbol) {
            Some(stored) if stored.social_avg > 0.0 => stored.social_avg,
            Some(stored) => {
                warn!(
                    symbol,
                    social_avg = stored.social_avg,
                    default = self.config.default_social_baseline,
                    "non-positive stored social baseline, using default"
                );
                self.config.default_social_baseline
            }
            None => self.config.default_social_baseline,
        }
    }

    fn fuse(&self, signals: &[PumpSignal]) -> f64 {
        let weights = &self.config.weights;
        let total_weight: f64 = signals.iter().map(|s| weights.weight(s.kind)).sum();
        let weighted: f64 = signals
            .iter()
            .map(|s| s.confidence * weights.weight(s.kind))
            .sum();
        weighted / total_weight
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pump_spi::{AlertSeverity, PumpSignalKind};

    fn quiet_social() -> SocialMetrics {
        SocialMetrics::new("BUMI", 8, 8, 400.0)
    }

    fn quiet_market() -> MarketMetrics {
        MarketMetrics::new("BUMI", 100.0, 0.01, 1_000.0, 1_000.0)
    }

    #[test]
    fn test_quiet_snapshot_is_none() {
        let detector = PumpDetector::default();
        assert!(detector.analyze(&quiet_social(), &quiet_market(), None).is_none());
    }

    #[test]
    fn test_volume_and_price_spike_is_high() {
        let detector = PumpDetector::default();
        let market = MarketMetrics::new("BUMI", 125.0, 0.25, 10_000.0, 1_000.0);

        let alert = detector.analyze(&quiet_social(), &market, None).unwrap();
        // (0.9 * 0.25 + 0.8333 * 0.20) / 0.45
        assert!((alert.confidence - 0.87037).abs() < 1e-4);
        assert_eq!(alert.severity, AlertSeverity::High);
        assert_eq!(alert.signals.len(), 2);
        assert_eq!(alert.signals[0].kind, PumpSignalKind::VolumeSpike);
        assert_eq!(
            alert.message,
            "Potential pump-and-dump detected for BUMI. Severity: high. Signals: Volume 10.0x average; Price up 25.0%"
        );
        assert_eq!(alert.recommended_action, "Avoid buying. Wait for activity to normalize.");
    }

    #[test]
    fn test_legitimate_keyword_dampens_by_exactly_point_seven() {
        let detector = PumpDetector::new(PumpConfig::default().with_min_confidence(0.0)).unwrap();
        let market = MarketMetrics::new("BUMI", 125.0, 0.25, 10_000.0, 1_000.0);
        let plain = quiet_social().with_keywords(["moon"]);
        let dampened = quiet_social().with_keywords(["moon", "laporan keuangan"]);

        let a = detector.analyze(&plain, &market, None).unwrap();
        let b = detector.analyze(&dampened, &market, None).unwrap();
        assert!((b.confidence - a.confidence * 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_weak_signals_never_alert() {
        // Volume 5x gives 0.4, new accounts at 25 days gives 1/6.
        let detector = PumpDetector::default();
        let social = SocialMetrics::new("BUMI", 8, 8, 25.0);
        let market = MarketMetrics::new("BUMI", 100.0, 0.0, 5_000.0, 1_000.0);
        assert_eq!(detector.collect_signals(&social, &market, None).len(), 2);
        assert!(detector.analyze(&social, &market, None).is_none());
    }

    #[test]
    fn test_historical_social_overrides_store() {
        let mut detector = PumpDetector::default();
        detector.update_baseline("BUMI", 100.0, 1_000.0);
        let social = SocialMetrics::new("BUMI", 50, 50, 400.0);

        let stored = detector.collect_signals(&social, &quiet_market(), None);
        assert!(stored.iter().all(|s| s.kind != PumpSignalKind::SocialSpike));

        let explicit = detector.collect_signals(&social, &quiet_market(), Some(10.0));
        assert_eq!(explicit[0].kind, PumpSignalKind::SocialSpike);
        assert!((explicit[0].confidence - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_non_positive_baseline_uses_default() {
        let mut detector = PumpDetector::default();
        detector.update_baseline("BUMI", 0.0, 0.0);
        let social = SocialMetrics::new("BUMI", 50, 50, 400.0);

        let signals = detector.collect_signals(&social, &quiet_market(), Some(0.0));
        assert_eq!(signals[0].evidence, "Social mentions 50 vs baseline 10");
    }

    #[test]
    fn test_update_baseline_overwrites() {
        let mut detector = PumpDetector::default();
        detector.update_baseline("BUMI", 10.0, 1_000.0);
        detector.update_baseline("BUMI", 25.0, 3_000.0);
        assert_eq!(detector.baseline("BUMI"), Some(Baseline::new(25.0, 3_000.0)));
        assert_eq!(detector.baseline("ANTM"), None);
    }

    #[test]
    fn test_check_text_for_pump() {
        let detector = PumpDetector::default();

        let screen = detector.check_text_for_pump("BUMI PASTI NAIK, buruan beli sebelum terbang!");
        assert!(screen.suspicious);
        assert_eq!(screen.matched, vec!["buruan beli", "pasti naik", "terbang"]);

        let single = detector.check_text_for_pump("Laporan keuangan Q3 bagus, target 10x?");
        assert!(!single.suspicious);
        assert_eq!(single.matched, vec!["10x"]);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        assert!(PumpDetector::new(PumpConfig::default().with_min_confidence(-0.1)).is_err());
    }
}
