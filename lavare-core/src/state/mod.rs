//! Wash outcome
//!
//! The structured status reported once per wash attempt.

pub mod status;

pub use status::{ErrorCode, LaundryStatus, Outcome};
