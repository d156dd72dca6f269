//! Outlier model capability.

use crate::error::Result;
use crate::model::Verdict;

/// Multivariate outlier classifier over per-bar feature rows.
///
/// An unfitted model must behave as an "all normal" classifier:
/// `predict` returns [`Verdict::Normal`] for every row and `score`
/// returns zeros.
pub trait OutlierModel: Send + Sync {
    /// Fit the model on historical feature rows.
    fn fit(&mut self, features: &[Vec<f64>]) -> Result<()>;

    /// Classify each feature row.
    fn predict(&self, features: &[Vec<f64>]) -> Vec<Verdict>;

    /// Raw score per row (lower = more anomalous).
    fn score(&self, features: &[Vec<f64>]) -> Vec<f64>;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}
