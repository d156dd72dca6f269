//! Contract definitions for pump detection.

mod baseline_store;

pub use baseline_store::BaselineStore;
