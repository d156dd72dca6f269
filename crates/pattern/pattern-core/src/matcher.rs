//! Multi-window DTW pattern matcher.

use pattern_api::MatcherConfig;
use pattern_spi::{Outcome, Pattern, PatternKind, PatternMatch, Result};
use series::{min_max_normalize, resample_linear};
use tracing::{debug, info};

use crate::dedup::deduplicate;
use crate::dtw::{dtw_distance, similarity};
use crate::library::PatternLibrary;

// ============================================================================
// DTW Matcher
// ============================================================================

/// Finds library shapes in a price series.
///
/// For each configured window length `L` and each pattern, the template
/// is resampled to `L` points and compared against every min-max
/// normalized window (stride `L / 4`) with a banded DTW (band `L / 4`,
/// unconstrained when that rounds to zero).
/// Candidates above the similarity threshold are deduplicated by overlap.
#[derive(Debug, Clone)]
pub struct DtwMatcher {
    config: MatcherConfig,
    library: PatternLibrary,
}

impl Default for DtwMatcher {
    fn default() -> Self {
        Self {
            config: MatcherConfig::default(),
            library: PatternLibrary::new(),
        }
    }
}

impl DtwMatcher {
    /// Create a matcher over the seed library.
    pub fn new(config: MatcherConfig) -> Result<Self> {
        Self::with_library(config, PatternLibrary::new())
    }

    pub fn with_library(config: MatcherConfig, library: PatternLibrary) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, library })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }

    pub fn library_mut(&mut self) -> &mut PatternLibrary {
        &mut self.library
    }

    /// See [`dtw_distance`](crate::dtw_distance).
    pub fn dtw_distance(&self, seq1: &[f64], seq2: &[f64], band: Option<usize>) -> f64 {
        dtw_distance(seq1, seq2, band)
    }

    /// Search for every library pattern.
    pub fn find_patterns(&self, prices: &[f64]) -> Vec<PatternMatch> {
        self.search(prices, self.library.patterns().iter())
    }

    /// Search for the given patterns only.
    pub fn find_patterns_in(&self, prices: &[f64], patterns: &[Pattern]) -> Vec<PatternMatch> {
        self.search(prices, patterns.iter())
    }

    /// Best match among library patterns of `kind`.
    pub fn match_single_pattern(&self, prices: &[f64], kind: PatternKind) -> Option<PatternMatch> {
        let patterns = self.library.patterns_by_kind(kind);
        if patterns.is_empty() {
            return None;
        }
        // Deduplicated matches come back best first.
        self.search(prices, patterns.into_iter()).into_iter().next()
    }

    /// Normalize `prices` into a custom pattern, register it and return it.
    ///
    /// An empty description becomes "Custom pattern: {name}".
    pub fn create_custom_pattern(
        &mut self,
        name: &str,
        prices: &[f64],
        expected_outcome: Outcome,
        description: &str,
    ) -> Result<Pattern> {
        let description = if description.is_empty() {
            format!("Custom pattern: {}", name)
        } else {
            description.to_string()
        };
        let pattern = Pattern::new(name, PatternKind::Custom, prices, expected_outcome, &description)?;
        self.library.add_pattern(pattern.clone());

        info!(name, points = pattern.len(), library = self.library.len(), "custom pattern registered");
        Ok(pattern)
    }

    fn search<'a, I>(&self, prices: &[f64], patterns: I) -> Vec<PatternMatch>
    where
        I: Iterator<Item = &'a Pattern> + Clone,
    {
        let mut candidates = Vec::new();
        for &window in &self.config.window_sizes {
            if window == 0 || prices.len() < window {
                continue;
            }
            for pattern in patterns.clone() {
                candidates.extend(self.scan(prices, pattern, window));
            }
        }

        let found = candidates.len();
        let matches = deduplicate(candidates, self.config.max_overlap);
        debug!(
            bars = prices.len(),
            candidates = found,
            matches = matches.len(),
            "pattern search complete"
        );
        matches
    }

    fn scan(&self, prices: &[f64], pattern: &Pattern, window: usize) -> Vec<PatternMatch> {
        if pattern.is_empty() {
            return Vec::new();
        }
        let template = resample_linear(pattern.template(), window);
        let band = self.config.band(window);

        (0..=prices.len() - window)
            .step_by(self.config.stride(window))
            .filter_map(|start| {
                let normalized = min_max_normalize(&prices[start..start + window]);
                let distance = dtw_distance(&normalized, &template, band);
                let similarity = similarity(distance, window);
                (similarity >= self.config.similarity_threshold).then(|| PatternMatch {
                    kind: pattern.kind,
                    pattern_name: pattern.name.clone(),
                    similarity,
                    start,
                    end: start + window,
                    dtw_distance: distance,
                    description: pattern.description.clone(),
                    expected_outcome: pattern.expected_outcome,
                })
            })
            .collect()
    }
}
