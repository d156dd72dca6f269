//! # market-pattern
//!
//! Finds canonical chart shapes (double bottoms, head and shoulders,
//! triangles, ...) in price series by DTW alignment over several window
//! sizes.

pub use pattern_facade::*;
