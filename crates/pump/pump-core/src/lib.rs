//! Pump Detection Core
//!
//! Signal generators, weighted fusion and the baseline stores.

mod detector;
mod signals;
mod store;

pub use detector::*;
pub use store::*;
