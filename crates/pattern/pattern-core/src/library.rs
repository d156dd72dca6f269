//! Pattern library with the seed chart shapes.

use pattern_spi::{Outcome, Pattern, PatternError, PatternKind, Result};

const DOUBLE_BOTTOM: [f64; 20] = [
    1.0, 0.9, 0.8, 0.7, 0.5, 0.3, 0.1, 0.0, 0.2, 0.4, 0.5, 0.4, 0.2, 0.0, 0.1, 0.3, 0.5, 0.7, 0.9,
    1.0,
];

const DOUBLE_TOP: [f64; 20] = [
    0.0, 0.1, 0.2, 0.3, 0.5, 0.7, 0.9, 1.0, 0.8, 0.6, 0.5, 0.6, 0.8, 1.0, 0.9, 0.7, 0.5, 0.3, 0.1,
    0.0,
];

const HEAD_AND_SHOULDERS: [f64; 19] = [
    0.0, 0.2, 0.4, 0.6, 0.5, 0.3, 0.5, 0.7, 0.9, 1.0, 0.9, 0.7, 0.5, 0.3, 0.5, 0.6, 0.4, 0.2, 0.0,
];

const CUP_AND_HANDLE: [f64; 17] = [
    1.0, 0.9, 0.7, 0.5, 0.3, 0.1, 0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0, 0.95, 0.9, 0.95, 1.0,
];

const ASCENDING_TRIANGLE: [f64; 18] = [
    0.0, 0.2, 0.5, 0.4, 0.3, 0.6, 0.5, 0.4, 0.7, 0.6, 0.5, 0.8, 0.7, 0.6, 0.9, 0.8, 0.7, 1.0,
];

// Tight range, then a breakout.
const ACCUMULATION: [f64; 19] = [
    0.5, 0.55, 0.45, 0.52, 0.48, 0.53, 0.47, 0.54, 0.46, 0.55, 0.45, 0.56, 0.44, 0.57, 0.43, 0.58,
    0.6, 0.7, 0.8,
];

fn inverted(template: &[f64]) -> Vec<f64> {
    template.iter().map(|x| 1.0 - x).collect()
}

/// Ordered collection of reference patterns.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternLibrary {
    /// Library holding the eight seed patterns.
    pub fn new() -> Self {
        let seeds: [(&str, PatternKind, Vec<f64>, Outcome, &str); 8] = [
            (
                "Double Bottom",
                PatternKind::DoubleBottom,
                DOUBLE_BOTTOM.to_vec(),
                Outcome::Bullish,
                "W-shaped reversal pattern indicating potential uptrend",
            ),
            (
                "Double Top",
                PatternKind::DoubleTop,
                DOUBLE_TOP.to_vec(),
                Outcome::Bearish,
                "M-shaped reversal pattern indicating potential downtrend",
            ),
            (
                "Head and Shoulders",
                PatternKind::HeadAndShoulders,
                HEAD_AND_SHOULDERS.to_vec(),
                Outcome::Bearish,
                "Three-peak pattern with higher middle peak",
            ),
            (
                "Inverse Head and Shoulders",
                PatternKind::InverseHeadAndShoulders,
                inverted(&HEAD_AND_SHOULDERS),
                Outcome::Bullish,
                "Three-trough pattern with lower middle trough",
            ),
            (
                "Cup and Handle",
                PatternKind::CupAndHandle,
                CUP_AND_HANDLE.to_vec(),
                Outcome::Bullish,
                "U-shaped pattern with small consolidation handle",
            ),
            (
                "Ascending Triangle",
                PatternKind::AscendingTriangle,
                ASCENDING_TRIANGLE.to_vec(),
                Outcome::Bullish,
                "Higher lows with flat resistance",
            ),
            (
                "Descending Triangle",
                PatternKind::DescendingTriangle,
                inverted(&ASCENDING_TRIANGLE),
                Outcome::Bearish,
                "Lower highs with flat support",
            ),
            (
                "Accumulation",
                PatternKind::Accumulation,
                ACCUMULATION.to_vec(),
                Outcome::Bullish,
                "Range-bound trading followed by breakout",
            ),
        ];

        let patterns = seeds
            .into_iter()
            .filter_map(|(name, kind, template, outcome, description)| {
                Pattern::new(name, kind, &template, outcome, description).ok()
            })
            .collect();
        Self { patterns }
    }

    /// Library with no patterns.
    pub fn empty() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn add_pattern(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn patterns_by_kind(&self, kind: PatternKind) -> Vec<&Pattern> {
        self.patterns.iter().filter(|p| p.kind == kind).collect()
    }

    /// Look up a pattern by exact name.
    pub fn find(&self, name: &str) -> Result<&Pattern> {
        self.patterns
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PatternError::PatternNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
