//! Pump detection error types.

use thiserror::Error;

/// Pump detection errors.
///
/// `analyze` never fails; these cover configuration and snapshot validation.
#[derive(Debug, Error)]
pub enum PumpError {
    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Invalid metrics: {0}")]
    InvalidMetrics(String),
}

/// Result type for pump detection operations.
pub type Result<T> = std::result::Result<T, PumpError>;

pub fn invalid_parameter(name: &str, reason: &str) -> PumpError {
    PumpError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}
