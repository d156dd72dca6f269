//! Anomaly Detection API
//!
//! Configuration types for market anomaly detection and the optional
//! isolation-forest outlier model.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use anomaly_spi::{
    invalid_parameter, Anomaly, AnomalyError, AnomalyKind, OutlierModel, Result, Verdict,
};

// ============================================================================
// Severity Scales
// ============================================================================

/// Divisors mapping `|z|` onto the 0-1 severity scale.
///
/// Empirical tuning constants, not derived from data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeverityScales {
    pub price: f64,
    pub volume: f64,
    pub volatility: f64,
    pub gap: f64,
    /// Divisor for the aggregate anomaly score components.
    pub aggregate: f64,
}

impl Default for SeverityScales {
    fn default() -> Self {
        Self {
            price: 5.0,
            volume: 8.0,
            volatility: 6.0,
            gap: 5.0,
            aggregate: 3.0,
        }
    }
}

impl SeverityScales {
    /// `min(|z| / scale, 1.0)`.
    pub fn severity(z: f64, scale: f64) -> f64 {
        (z.abs() / scale).min(1.0)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("severity_scales.price", self.price),
            ("severity_scales.volume", self.volume),
            ("severity_scales.volatility", self.volatility),
            ("severity_scales.gap", self.gap),
            ("severity_scales.aggregate", self.aggregate),
        ] {
            if !(value > 0.0) {
                return Err(invalid_parameter(name, "must be positive"));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Detector Configuration
// ============================================================================

/// Market anomaly detector configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnomalyConfig {
    /// Two-sided z threshold on returns (default: 3.0).
    pub price_z_threshold: f64,
    /// One-sided z threshold on volume (default: 4.0).
    pub volume_z_threshold: f64,
    /// One-sided z threshold on true range (default: 3.5).
    pub volatility_z_threshold: f64,
    /// Two-sided z threshold on overnight gaps (default: 3.0).
    pub gap_z_threshold: f64,
    /// Trailing window length in bars (default: 60).
    pub lookback_period: usize,
    /// Anomalies below this severity are dropped by `detect_all` (default: 0.5).
    pub min_severity: f64,
    /// Bars treated as "recent" by the aggregate anomaly score (default: 5).
    pub recent_window: usize,
    /// Window std below this is treated as constant (default: 1e-10).
    pub std_epsilon: f64,
    pub severity_scales: SeverityScales,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            price_z_threshold: 3.0,
            volume_z_threshold: 4.0,
            volatility_z_threshold: 3.5,
            gap_z_threshold: 3.0,
            lookback_period: 60,
            min_severity: 0.5,
            recent_window: 5,
            std_epsilon: series::STD_EPSILON,
            severity_scales: SeverityScales::default(),
        }
    }
}

impl AnomalyConfig {
    pub fn new(lookback_period: usize) -> Self {
        Self {
            lookback_period,
            ..Self::default()
        }
    }

    pub fn with_lookback(mut self, lookback_period: usize) -> Self {
        self.lookback_period = lookback_period;
        self
    }

    pub fn with_min_severity(mut self, min_severity: f64) -> Self {
        self.min_severity = min_severity;
        self
    }

    /// Set all four z thresholds at once.
    pub fn with_thresholds(mut self, price: f64, volume: f64, volatility: f64, gap: f64) -> Self {
        self.price_z_threshold = price;
        self.volume_z_threshold = volume;
        self.volatility_z_threshold = volatility;
        self.gap_z_threshold = gap;
        self
    }

    pub fn with_severity_scales(mut self, scales: SeverityScales) -> Self {
        self.severity_scales = scales;
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if self.lookback_period < 2 {
            return Err(invalid_parameter("lookback_period", "must be at least 2"));
        }
        if self.recent_window == 0 {
            return Err(invalid_parameter("recent_window", "must be at least 1"));
        }
        for (name, value) in [
            ("price_z_threshold", self.price_z_threshold),
            ("volume_z_threshold", self.volume_z_threshold),
            ("volatility_z_threshold", self.volatility_z_threshold),
            ("gap_z_threshold", self.gap_z_threshold),
        ] {
            if !(value > 0.0) {
                return Err(invalid_parameter(name, "must be positive"));
            }
        }
        if !(0.0..=1.0).contains(&self.min_severity) {
            return Err(invalid_parameter("min_severity", "must be in range [0, 1]"));
        }
        if !(self.std_epsilon >= 0.0) {
            return Err(invalid_parameter("std_epsilon", "must be non-negative"));
        }
        self.severity_scales.validate()
    }
}

// ============================================================================
// Isolation Forest Configuration
// ============================================================================

/// Isolation forest outlier model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsolationForestConfig {
    /// Number of trees (default: 100).
    pub n_estimators: usize,
    /// Expected proportion of outliers (default: 0.05).
    pub contamination: f64,
    /// Sub-sample size per tree (default: 256).
    pub max_samples: usize,
    /// RNG seed (default: 42).
    pub seed: u64,
}

impl Default for IsolationForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            contamination: 0.05,
            max_samples: 256,
            seed: 42,
        }
    }
}

impl IsolationForestConfig {
    pub fn new(n_estimators: usize, contamination: f64) -> Self {
        Self {
            n_estimators,
            contamination,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.n_estimators == 0 {
            return Err(invalid_parameter("n_estimators", "must be at least 1"));
        }
        if self.max_samples < 2 {
            return Err(invalid_parameter("max_samples", "must be at least 2"));
        }
        if !(self.contamination > 0.0 && self.contamination < 0.5) {
            return Err(invalid_parameter("contamination", "must be in range (0, 0.5)"));
        }
        Ok(())
    }
}
