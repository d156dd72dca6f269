//! Pattern Matching API
//!
//! Configuration for the DTW pattern matcher.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use pattern_spi::{
    invalid_parameter, Outcome, Pattern, PatternError, PatternKind, PatternMatch, Result,
};

/// DTW pattern matcher configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Sliding window lengths to search (default: 15, 20, 30, 40, 50).
    pub window_sizes: Vec<usize>,
    /// Minimum similarity to report (default: 0.7).
    pub similarity_threshold: f64,
    /// Sakoe-Chiba band is `window / band_divisor` (default: 4).
    pub band_divisor: usize,
    /// Window stride is `max(1, window / stride_divisor)` (default: 4).
    pub stride_divisor: usize,
    /// A match overlapping an accepted one by more than this share of its
    /// own span is dropped (default: 0.5).
    pub max_overlap: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            window_sizes: vec![15, 20, 30, 40, 50],
            similarity_threshold: 0.7,
            band_divisor: 4,
            stride_divisor: 4,
            max_overlap: 0.5,
        }
    }
}

impl MatcherConfig {
    pub fn new(window_sizes: Vec<usize>, similarity_threshold: f64) -> Self {
        Self {
            window_sizes,
            similarity_threshold,
            ..Self::default()
        }
    }

    pub fn with_window_sizes(mut self, window_sizes: Vec<usize>) -> Self {
        self.window_sizes = window_sizes;
        self
    }

    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_max_overlap(mut self, max_overlap: f64) -> Self {
        self.max_overlap = max_overlap;
        self
    }

    /// Band half-width for a window of `window` bars.
    ///
    /// Windows shorter than `band_divisor` get a zero width, which means
    /// no constraint rather than a diagonal-only alignment.
    pub fn band(&self, window: usize) -> Option<usize> {
        Some(window / self.band_divisor).filter(|w| *w > 0)
    }

    /// Step between consecutive window starts.
    pub fn stride(&self, window: usize) -> usize {
        (window / self.stride_divisor).max(1)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_sizes.is_empty() {
            return Err(invalid_parameter("window_sizes", "must not be empty"));
        }
        if self.window_sizes.contains(&0) {
            return Err(invalid_parameter("window_sizes", "must all be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(invalid_parameter(
                "similarity_threshold",
                "must be in range [0, 1]",
            ));
        }
        if self.band_divisor == 0 {
            return Err(invalid_parameter("band_divisor", "must be at least 1"));
        }
        if self.stride_divisor == 0 {
            return Err(invalid_parameter("stride_divisor", "must be at least 1"));
        }
        if !(0.0..=1.0).contains(&self.max_overlap) {
            return Err(invalid_parameter("max_overlap", "must be in range [0, 1]"));
        }
        Ok(())
    }
}
