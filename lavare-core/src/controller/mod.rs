//! Wash controller
//!
//! The root of the crate: validates a wash request, resolves its program
//! and drives the pump and engine through the wash plan.

pub mod fault;
pub mod machine;

pub use fault::{ActuatorFault, StepFailure};
pub use machine::WashingMachine;
