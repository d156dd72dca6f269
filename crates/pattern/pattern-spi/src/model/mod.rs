//! Data models for pattern matching.

mod pattern;
mod pattern_match;

pub use pattern::{Outcome, Pattern, PatternKind};
pub use pattern_match::PatternMatch;
