//! Batch validation
//!
//! Rejects loads the drum cannot take before any device is touched.

pub mod weight;

pub use weight::{validate_batch, BatchCheck};
