//! Pattern match records.

use serde::{Deserialize, Serialize};

use super::pattern::{Outcome, PatternKind};

/// One occurrence of a pattern in a price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub kind: PatternKind,
    pub pattern_name: String,
    /// 0-1, higher is better.
    pub similarity: f64,
    /// First bar of the window.
    pub start: usize,
    /// One past the last bar of the window.
    pub end: usize,
    pub dtw_distance: f64,
    pub description: String,
    pub expected_outcome: Outcome,
}

impl PatternMatch {
    pub fn span(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Number of bars shared with `other`.
    pub fn overlap(&self, other: &PatternMatch) -> usize {
        self.end
            .min(other.end)
            .saturating_sub(self.start.max(other.start))
    }
}
