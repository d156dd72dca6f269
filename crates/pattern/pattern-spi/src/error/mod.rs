//! Error types for pattern matching.

mod pattern_error;

pub use pattern_error::{invalid_parameter, PatternError, Result};
