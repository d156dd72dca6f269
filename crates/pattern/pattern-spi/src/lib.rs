//! Pattern Matching Service Provider Interface
//!
//! Defines chart pattern templates, match records and the error type
//! shared by the pattern crates.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{invalid_parameter, PatternError, Result};
pub use model::{Outcome, Pattern, PatternKind, PatternMatch};
