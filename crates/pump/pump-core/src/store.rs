//! Baseline store implementations.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use pump_spi::{Baseline, BaselineStore};

/// Single-owner baseline map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBaselineStore {
    baselines: HashMap<String, Baseline>,
}

impl InMemoryBaselineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.baselines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.baselines.is_empty()
    }
}

impl BaselineStore for InMemoryBaselineStore {
    fn get(&self, symbol: &str) -> Option<Baseline> {
        self.baselines.get(symbol).copied()
    }

    fn set(&mut self, symbol: &str, baseline: Baseline) {
        self.baselines.insert(symbol.to_string(), baseline);
    }
}

/// Baseline map behind a read-write lock.
///
/// Clones share the same map, so several detectors (or threads) can
/// read baselines another one updates.
#[derive(Debug, Clone, Default)]
pub struct SharedBaselineStore {
    inner: Arc<RwLock<HashMap<String, Baseline>>>,
}

impl SharedBaselineStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl BaselineStore for SharedBaselineStore {
    fn get(&self, symbol: &str) -> Option<Baseline> {
        self.inner.read().get(symbol).copied()
    }

    fn set(&mut self, symbol: &str, baseline: Baseline) {
        self.inner.write().insert(symbol.to_string(), baseline);
    }
}
