//! Chart pattern templates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PatternError, Result};

/// Chart pattern family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    HeadAndShoulders,
    InverseHeadAndShoulders,
    DoubleTop,
    DoubleBottom,
    TripleTop,
    TripleBottom,
    CupAndHandle,
    AscendingTriangle,
    DescendingTriangle,
    WedgeUp,
    WedgeDown,
    FlagBullish,
    FlagBearish,
    Accumulation,
    Distribution,
    Custom,
}

impl PatternKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::HeadAndShoulders => "head_and_shoulders",
            PatternKind::InverseHeadAndShoulders => "inverse_head_and_shoulders",
            PatternKind::DoubleTop => "double_top",
            PatternKind::DoubleBottom => "double_bottom",
            PatternKind::TripleTop => "triple_top",
            PatternKind::TripleBottom => "triple_bottom",
            PatternKind::CupAndHandle => "cup_and_handle",
            PatternKind::AscendingTriangle => "ascending_triangle",
            PatternKind::DescendingTriangle => "descending_triangle",
            PatternKind::WedgeUp => "wedge_up",
            PatternKind::WedgeDown => "wedge_down",
            PatternKind::FlagBullish => "flag_bullish",
            PatternKind::FlagBearish => "flag_bearish",
            PatternKind::Accumulation => "accumulation",
            PatternKind::Distribution => "distribution",
            PatternKind::Custom => "custom",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Expected price direction after a pattern completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Bullish,
    Bearish,
    #[default]
    Neutral,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Bullish => "bullish",
            Outcome::Bearish => "bearish",
            Outcome::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A reference shape.
///
/// The template is min-max normalized on construction: it spans exactly
/// `[0, 1]`, or is all zeros when the input is constant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    pub name: String,
    pub kind: PatternKind,
    template: Vec<f64>,
    pub expected_outcome: Outcome,
    pub description: String,
}

impl Pattern {
    pub fn new(
        name: &str,
        kind: PatternKind,
        template: &[f64],
        expected_outcome: Outcome,
        description: &str,
    ) -> Result<Self> {
        if template.is_empty() {
            return Err(PatternError::EmptyTemplate);
        }
        Ok(Self {
            name: name.to_string(),
            kind,
            template: series::min_max_normalize(template),
            expected_outcome,
            description: description.to_string(),
        })
    }

    pub fn template(&self) -> &[f64] {
        &self.template
    }

    pub fn len(&self) -> usize {
        self.template.len()
    }

    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }
}
