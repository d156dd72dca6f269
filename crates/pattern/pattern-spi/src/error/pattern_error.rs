//! Pattern matching error types.

use thiserror::Error;

/// Pattern matching errors.
///
/// Searching never fails; these cover configuration, template
/// construction and library lookups.
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Pattern template is empty")]
    EmptyTemplate,

    #[error("Pattern not found: {0}")]
    PatternNotFound(String),
}

/// Result type for pattern matching operations.
pub type Result<T> = std::result::Result<T, PatternError>;

pub fn invalid_parameter(name: &str, reason: &str) -> PatternError {
    PatternError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
