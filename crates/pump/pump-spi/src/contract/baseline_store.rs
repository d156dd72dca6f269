//! Per-symbol baseline storage.

use crate::model::Baseline;

/// Key-value store of historical baselines, keyed by symbol.
///
/// `set` overwrites; there is no smoothing and no expiry.
pub trait BaselineStore: Send + Sync {
    fn get(&self, symbol: &str) -> Option<Baseline>;

    fn set(&mut self, symbol: &str, baseline: Baseline);
}
