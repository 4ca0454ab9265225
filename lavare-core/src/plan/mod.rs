//! Wash plan
//!
//! Converts a resolved program into the ordered device steps the
//! controller executes.

pub mod step;

pub use step::{Step, WashPlan, MAX_STEPS};
