//! Outlier model implementations.

use anomaly_api::IsolationForestConfig;
use anomaly_spi::{AnomalyError, OutlierModel, Result, Verdict};
use rand::prelude::*;
use rand::rngs::StdRng;
use tracing::debug;

// ============================================================================
// No-op Model
// ============================================================================

/// Outlier model that never fits and classifies everything as normal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOutlierModel;

impl OutlierModel for NoopOutlierModel {
    fn fit(&mut self, _features: &[Vec<f64>]) -> Result<()> {
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Vec<Verdict> {
        vec![Verdict::Normal; features.len()]
    }

    fn score(&self, features: &[Vec<f64>]) -> Vec<f64> {
        vec![0.0; features.len()]
    }

    fn is_fitted(&self) -> bool {
        false
    }
}

// ============================================================================
// Isolation Forest
// ============================================================================

/// A node in an isolation tree.
#[derive(Debug, Clone)]
enum IsolationNode {
    Internal {
        feature: usize,
        threshold: f64,
        left: Box<IsolationNode>,
        right: Box<IsolationNode>,
    },
    Leaf {
        size: usize,
    },
}

impl IsolationNode {
    fn build(rows: &[&[f64]], depth: usize, max_depth: usize, rng: &mut StdRng) -> Self {
        let n_features = rows.first().map_or(0, |r| r.len());
        if depth >= max_depth || rows.len() <= 1 || n_features == 0 {
            return IsolationNode::Leaf { size: rows.len() };
        }

        let feature = rng.gen_range(0..n_features);
        let min = rows.iter().map(|r| r[feature]).fold(f64::INFINITY, f64::min);
        let max = rows.iter().map(|r| r[feature]).fold(f64::NEG_INFINITY, f64::max);
        if !(max - min > 1e-10) {
            return IsolationNode::Leaf { size: rows.len() };
        }

        let threshold = rng.gen_range(min..max);
        let (left, right): (Vec<&[f64]>, Vec<&[f64]>) =
            rows.iter().partition(|r| r[feature] < threshold);
        if left.is_empty() || right.is_empty() {
            return IsolationNode::Leaf { size: rows.len() };
        }

        IsolationNode::Internal {
            feature,
            threshold,
            left: Box::new(Self::build(&left, depth + 1, max_depth, rng)),
            right: Box::new(Self::build(&right, depth + 1, max_depth, rng)),
        }
    }

    fn path_length(&self, sample: &[f64], depth: usize) -> f64 {
        match self {
            IsolationNode::Leaf { size } => depth as f64 + average_path_length(*size),
            IsolationNode::Internal {
                feature,
                threshold,
                left,
                right,
            } => {
                let value = sample.get(*feature).copied().unwrap_or(0.0);
                if value < *threshold {
                    left.path_length(sample, depth + 1)
                } else {
                    right.path_length(sample, depth + 1)
                }
            }
        }
    }
}

/// Average path length of an unsuccessful BST search over `n` items.
fn average_path_length(n: usize) -> f64 {
    match n {
        0 | 1 => 0.0,
        2 => 1.0,
        _ => {
            let n = n as f64;
            2.0 * (n.ln() + 0.5772156649) - 2.0 * (n - 1.0) / n
        }
    }
}

/// Isolation forest outlier model.
///
/// Outliers need fewer random splits to isolate. Until [`fit`](OutlierModel::fit)
/// succeeds the model behaves like [`NoopOutlierModel`].
#[derive(Debug, Clone)]
pub struct IsolationForest {
    config: IsolationForestConfig,
    trees: Vec<IsolationNode>,
    sample_size: usize,
    threshold: f64,
}

impl IsolationForest {
    pub fn new(config: IsolationForestConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            trees: Vec::new(),
            sample_size: 0,
            threshold: 0.5,
        })
    }

    pub fn config(&self) -> &IsolationForestConfig {
        &self.config
    }

    /// `2^(-E[h(x)] / c(n))`: close to 1 for outliers, below 0.5 for inliers.
    fn anomaly_score(&self, sample: &[f64]) -> f64 {
        let c = average_path_length(self.sample_size);
        if c <= 0.0 {
            return 0.5;
        }
        let avg_path = self
            .trees
            .iter()
            .map(|tree| tree.path_length(sample, 0))
            .sum::<f64>()
            / self.trees.len() as f64;
        2.0_f64.powf(-avg_path / c)
    }
}

impl Default for IsolationForest {
    fn default() -> Self {
        Self {
            config: IsolationForestConfig::default(),
            trees: Vec::new(),
            sample_size: 0,
            threshold: 0.5,
        }
    }
}

impl OutlierModel for IsolationForest {
    fn fit(&mut self, features: &[Vec<f64>]) -> Result<()> {
        if features.len() < 2 {
            return Err(AnomalyError::InsufficientData {
                required: 2,
                got: features.len(),
            });
        }
        let width = features[0].len();
        if features.iter().any(|r| r.len() != width) {
            return Err(AnomalyError::DetectionError(
                "feature rows have inconsistent width".to_string(),
            ));
        }
        if features.iter().flatten().any(|x| !x.is_finite()) {
            return Err(AnomalyError::DetectionError(
                "feature rows contain non-finite values".to_string(),
            ));
        }

        let n = features.len();
        let sample_size = self.config.max_samples.min(n);
        let max_depth = (sample_size as f64).log2().ceil() as usize;
        let mut rng = StdRng::seed_from_u64(self.config.seed);

        self.trees = (0..self.config.n_estimators)
            .map(|_| {
                let rows: Vec<&[f64]> = rand::seq::index::sample(&mut rng, n, sample_size)
                    .into_iter()
                    .map(|i| features[i].as_slice())
                    .collect();
                IsolationNode::build(&rows, 0, max_depth, &mut rng)
            })
            .collect();
        self.sample_size = sample_size;

        let mut scores: Vec<f64> = features.iter().map(|r| self.anomaly_score(r)).collect();
        scores.sort_by(|a, b| b.total_cmp(a));
        let cut = ((n as f64 * self.config.contamination).ceil() as usize).min(n - 1);
        self.threshold = scores[cut];

        debug!(
            rows = n,
            trees = self.trees.len(),
            threshold = self.threshold,
            "isolation forest fitted"
        );
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Vec<Verdict> {
        if !self.is_fitted() {
            return vec![Verdict::Normal; features.len()];
        }
        features
            .iter()
            .map(|r| {
                if self.anomaly_score(r) > self.threshold {
                    Verdict::Outlier
                } else {
                    Verdict::Normal
                }
            })
            .collect()
    }

    fn score(&self, features: &[Vec<f64>]) -> Vec<f64> {
        if !self.is_fitted() {
            return vec![0.0; features.len()];
        }
        features.iter().map(|r| -self.anomaly_score(r)).collect()
    }

    fn is_fitted(&self) -> bool {
        !self.trees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cluster_with_outliers() -> Vec<Vec<f64>> {
        let mut rng = StdRng::seed_from_u64(7);
        let mut rows: Vec<Vec<f64>> = (0..200)
            .map(|_| vec![rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)])
            .collect();
        rows.push(vec![10.0, 10.0]);
        rows.push(vec![-10.0, -10.0]);
        rows
    }

    #[test]
    fn test_c_function() {
        assert_eq!(average_path_length(1), 0.0);
        assert_eq!(average_path_length(2), 1.0);
        assert!(average_path_length(100) > average_path_length(10));
    }

    #[test]
    fn test_unfitted_is_all_normal() {
        let forest = IsolationForest::default();
        let rows = cluster_with_outliers();
        assert!(!forest.is_fitted());
        assert!(forest.predict(&rows).iter().all(|v| *v == Verdict::Normal));
        assert!(forest.score(&rows).iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_outliers_score_lower() {
        let rows = cluster_with_outliers();
        let mut forest = IsolationForest::new(IsolationForestConfig::new(50, 0.02)).unwrap();
        forest.fit(&rows).unwrap();

        let scores = forest.score(&rows);
        assert!(scores[200] < scores[0]);
        assert!(scores[201] < scores[0]);

        let verdicts = forest.predict(&rows);
        assert!(verdicts[200].is_outlier());
        assert!(verdicts[201].is_outlier());
        let flagged = verdicts.iter().filter(|v| v.is_outlier()).count();
        assert!(flagged < 20);
    }

    #[test]
    fn test_fit_rejects_tiny_input() {
        let mut forest = IsolationForest::default();
        assert!(matches!(
            forest.fit(&[vec![1.0]]),
            Err(AnomalyError::InsufficientData { required: 2, got: 1 })
        ));
    }

    #[test]
    fn test_fit_rejects_ragged_rows() {
        let mut forest = IsolationForest::default();
        assert!(forest.fit(&[vec![1.0, 2.0], vec![1.0]]).is_err());
    }
}
