//! Anomaly detection error types.

use thiserror::Error;

/// Anomaly detection errors.
///
/// Detection itself never fails; these cover configuration and outlier-model fitting.
/// An unfitted outlier model classifies everything as normal instead of erroring.
#[derive(Debug, Error)]
pub enum AnomalyError {
    #[error("Insufficient data: required {required}, got {got}")]
    InsufficientData { required: usize, got: usize },

    #[error("Invalid parameter: {name} - {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Detection error: {0}")]
    DetectionError(String),
}

/// Result type for anomaly detection operations.
pub type Result<T> = std::result::Result<T, AnomalyError>;

/// Shorthand used by the config validators.
pub fn invalid_parameter(name: &str, reason: &str) -> AnomalyError {
    AnomalyError::InvalidParameter {
        name: name.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_display() {
        let error = AnomalyError::InsufficientData {
            required: 61,
            got: 10,
        };
        assert_eq!(error.to_string(), "Insufficient data: required 61, got 10");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("lookback_period", "must be at least 2");
        assert_eq!(
            error.to_string(),
            "Invalid parameter: lookback_period - must be at least 2"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(AnomalyError::DetectionError("non-finite feature".to_string()));
        assert_eq!(error.to_string(), "Detection error: non-finite feature");
    }

    #[test]
    fn test_all_error_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AnomalyError>();
    }
}
