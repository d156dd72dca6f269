//! Outlier model verdicts.

use serde::{Deserialize, Serialize};

/// Per-sample classification from an [`OutlierModel`](crate::OutlierModel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Normal,
    Outlier,
}

impl Verdict {
    pub fn is_outlier(&self) -> bool {
        matches!(self, Verdict::Outlier)
    }
}
