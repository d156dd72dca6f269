//! Pattern Matching Facade
//!
//! Single entry point to the chart pattern module:
//! - `Pattern`, `PatternMatch`, kinds and errors from SPI
//! - `MatcherConfig` from API
//! - `DtwMatcher`, `PatternLibrary`, DTW and deduplication from Core

pub use pattern_spi::*;

pub use pattern_api::*;

pub use pattern_core::*;
