//! Pattern Matching Core
//!
//! Banded dynamic time warping, the seed pattern library, overlap
//! deduplication and the multi-window matcher.

mod dedup;
mod dtw;
mod library;
mod matcher;

pub use dedup::deduplicate;
pub use dtw::{dtw_distance, similarity};
pub use library::PatternLibrary;
pub use matcher::DtwMatcher;
