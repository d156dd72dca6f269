//! Market anomaly detector implementation.

use std::time::{SystemTime, UNIX_EPOCH};

use anomaly_api::{AnomalyConfig, SeverityScales};
use anomaly_spi::{Anomaly, AnomalyKind, OutlierModel, Result, Verdict};
use series::{gaps, mean, rolling_zscores, simple_returns, std_dev, true_range, Bars, RollingZScore};
use tracing::debug;

use crate::features::bar_features;
use crate::outlier::NoopOutlierModel;

// ============================================================================
// Market Anomaly Detector
// ============================================================================

/// Rolling z-score detector over returns, volume, true range and gaps.
///
/// Each metric is scored against the `lookback_period` bars that precede
/// it, so a bar never contributes to its own baseline. Detection never
/// fails: short or constant input yields an empty list.
///
/// The optional outlier model is fixed at construction time; the default
/// [`NoopOutlierModel`] classifies everything as normal.
#[derive(Debug, Clone)]
pub struct MarketAnomalyDetector<M: OutlierModel = NoopOutlierModel> {
    config: AnomalyConfig,
    outlier_model: M,
}

impl MarketAnomalyDetector {
    /// Create a detector with the no-op outlier model.
    pub fn new(config: AnomalyConfig) -> Result<Self> {
        Self::with_outlier_model(config, NoopOutlierModel)
    }
}

impl Default for MarketAnomalyDetector {
    fn default() -> Self {
        Self {
            config: AnomalyConfig::default(),
            outlier_model: NoopOutlierModel,
        }
    }
}

impl<M: OutlierModel> MarketAnomalyDetector<M> {
    /// Create a detector backed by the given outlier model.
    pub fn with_outlier_model(config: AnomalyConfig, outlier_model: M) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            outlier_model,
        })
    }

    pub fn config(&self) -> &AnomalyConfig {
        &self.config
    }

    pub fn outlier_model(&self) -> &M {
        &self.outlier_model
    }

    /// Run all four detectors and keep anomalies at or above `min_severity`.
    pub fn detect_all(
        &self,
        symbol: &str,
        prices: &[f64],
        volumes: &[f64],
        highs: &[f64],
        lows: &[f64],
        opens: &[f64],
    ) -> Vec<Anomaly> {
        let mut anomalies = self.detect_price_anomalies(symbol, prices);
        anomalies.extend(self.detect_volume_anomalies(symbol, volumes));
        anomalies.extend(self.detect_volatility_anomalies(symbol, highs, lows, prices));
        anomalies.extend(self.detect_gap_anomalies(symbol, opens, prices));

        let found = anomalies.len();
        anomalies.retain(|a| a.severity >= self.config.min_severity);

        debug!(
            symbol,
            bars = prices.len(),
            found,
            reported = anomalies.len(),
            min_severity = self.config.min_severity,
            "anomaly scan complete"
        );
        anomalies
    }

    /// [`detect_all`](Self::detect_all) over a [`Bars`] container.
    pub fn detect_bars(&self, symbol: &str, bars: &Bars) -> Vec<Anomaly> {
        self.detect_all(symbol, &bars.close, &bars.volume, &bars.high, &bars.low, &bars.open)
    }

    /// Abnormal close-to-close returns, flagged on `|z| >= price_z_threshold`.
    pub fn detect_price_anomalies(&self, symbol: &str, prices: &[f64]) -> Vec<Anomaly> {
        if prices.len() < self.config.lookback_period + 1 {
            return Vec::new();
        }

        let returns = simple_returns(prices);
        self.zscores(&returns)
            .into_iter()
            .filter(|s| s.z.abs() >= self.config.price_z_threshold)
            .map(|s| {
                self.anomaly(
                    AnomalyKind::PriceSpike,
                    symbol,
                    s.index + 1,
                    &s,
                    self.config.severity_scales.price,
                    format!("Price moved {:.1} std from normal", s.z),
                )
            })
            .collect()
    }

    /// Abnormally high volume, flagged on `z >= volume_z_threshold`.
    pub fn detect_volume_anomalies(&self, symbol: &str, volumes: &[f64]) -> Vec<Anomaly> {
        if volumes.len() < self.config.lookback_period + 1 {
            return Vec::new();
        }

        self.zscores(volumes)
            .into_iter()
            .filter(|s| s.mean >= self.config.std_epsilon)
            .filter(|s| s.z >= self.config.volume_z_threshold)
            .map(|s| {
                self.anomaly(
                    AnomalyKind::VolumeSpike,
                    symbol,
                    s.index,
                    &s,
                    self.config.severity_scales.volume,
                    format!("Volume {:.1}x normal", s.value / s.mean),
                )
            })
            .collect()
    }

    /// Abnormally wide true range, flagged on `z >= volatility_z_threshold`.
    pub fn detect_volatility_anomalies(
        &self,
        symbol: &str,
        highs: &[f64],
        lows: &[f64],
        closes: &[f64],
    ) -> Vec<Anomaly> {
        if highs.len() < self.config.lookback_period + 1 {
            return Vec::new();
        }

        let tr = true_range(highs, lows, closes);
        self.zscores(&tr)
            .into_iter()
            .filter(|s| s.z >= self.config.volatility_z_threshold)
            .map(|s| {
                self.anomaly(
                    AnomalyKind::VolatilityExplosion,
                    symbol,
                    s.index + 1,
                    &s,
                    self.config.severity_scales.volatility,
                    format!("Volatility {:.1}x normal", s.value / s.mean),
                )
            })
            .collect()
    }

    /// Abnormal overnight gaps, flagged on `|z| >= gap_z_threshold`.
    pub fn detect_gap_anomalies(&self, symbol: &str, opens: &[f64], closes: &[f64]) -> Vec<Anomaly> {
        if opens.len() < self.config.lookback_period + 2 {
            return Vec::new();
        }

        let gap_series = gaps(opens, closes);
        self.zscores(&gap_series)
            .into_iter()
            .filter(|s| s.z.abs() >= self.config.gap_z_threshold)
            .map(|s| {
                let direction = if s.value > 0.0 { "up" } else { "down" };
                self.anomaly(
                    AnomalyKind::GapAnomaly,
                    symbol,
                    s.index + 1,
                    &s,
                    self.config.severity_scales.gap,
                    format!("Gap {} {:.1}%", direction, s.value.abs() * 100.0),
                )
            })
            .collect()
    }

    /// Aggregate 0-1 score of how unusual the most recent bars are.
    ///
    /// Blends two components: the mean return of the last `recent_window`
    /// bars standardized against the older returns, and the recent mean
    /// volume relative to the older mean volume. Intended for ranking.
    ///
    /// Both return series divide by the earlier price of each pair, the
    /// same convention the per-bar price detector uses.
    pub fn compute_anomaly_score(&self, prices: &[f64], volumes: &[f64]) -> f64 {
        let recent = self.config.recent_window;
        if prices.len() < self.config.lookback_period + recent {
            return 0.0;
        }

        let scale = self.config.severity_scales.aggregate;
        let mut scores = Vec::with_capacity(2);

        let recent_returns = simple_returns(&prices[prices.len() - recent - 1..]);
        let older_returns = simple_returns(&prices[..prices.len() - recent]);
        let older_std = std_dev(&older_returns);
        if !older_returns.is_empty() && older_std > 0.0 {
            let price_z = (mean(&recent_returns) - mean(&older_returns)) / older_std;
            scores.push((price_z.abs() / scale).min(1.0));
        }

        if volumes.len() > recent {
            let recent_volume = mean(&volumes[volumes.len() - recent..]);
            let older_volume = mean(&volumes[..volumes.len() - recent]);
            if older_volume > 0.0 {
                let ratio = recent_volume / older_volume;
                scores.push(((ratio - 1.0).max(0.0) / scale).min(1.0));
            }
        }

        if scores.is_empty() {
            0.0
        } else {
            mean(&scores)
        }
    }

    /// Fit the outlier model on per-bar features.
    pub fn fit_outliers(&mut self, bars: &Bars) -> Result<()> {
        let features = bar_features(bars, self.config.lookback_period);
        self.outlier_model.fit(&features)
    }

    /// Classify bars `1..n` with the outlier model.
    ///
    /// Element `k` describes bar `k + 1`.
    pub fn outlier_verdicts(&self, bars: &Bars) -> Vec<Verdict> {
        let features = bar_features(bars, self.config.lookback_period);
        self.outlier_model.predict(&features)
    }

    fn zscores(&self, values: &[f64]) -> Vec<RollingZScore> {
        rolling_zscores(values, self.config.lookback_period, self.config.std_epsilon)
    }

    fn anomaly(
        &self,
        kind: AnomalyKind,
        symbol: &str,
        index: usize,
        score: &RollingZScore,
        scale: f64,
        description: String,
    ) -> Anomaly {
        Anomaly {
            kind,
            symbol: symbol.to_string(),
            timestamp: now_unix(),
            index,
            severity: SeverityScales::severity(score.z, scale),
            z_score: score.z,
            value: score.value,
            expected_range: score.expected_range(),
            description,
        }
    }
}

fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
