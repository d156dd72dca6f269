//! # series
//!
//! Shared primitives for the market signal detectors:
//!
//! - [`Bars`]: aligned OHLCV arrays for one symbol
//! - [`stats`]: population mean/std and trailing-window z-scores
//! - [`transform`]: derived metric series, min-max normalization, resampling

pub mod bars;
pub mod stats;
pub mod transform;

pub use bars::{Bar, Bars};
pub use stats::{mean, rolling_zscores, std_dev, RollingZScore, STD_EPSILON};
pub use transform::{gaps, min_max_normalize, resample_linear, simple_returns, true_range};
