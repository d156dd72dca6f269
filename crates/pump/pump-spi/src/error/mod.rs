//! Error types for pump detection.

mod pump_error;

pub use pump_error::{invalid_parameter, PumpError, Result};
