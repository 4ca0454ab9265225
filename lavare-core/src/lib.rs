//! Board-agnostic core logic for the washing machine controller
//!
//! This crate contains all wash logic that does not depend on specific
//! hardware implementations:
//!
//! - Collaborator traits (water pump, engine, dirt detector)
//! - Laundry value objects and machine settings
//! - Program resolution (static or auto-detected)
//! - Batch weight validation
//! - Wash plan generation
//! - The wash controller that drives everything

#![no_std]
#![deny(unsafe_code)]

mod fmt;

pub mod config;
pub mod controller;
pub mod plan;
pub mod resolver;
pub mod state;
pub mod traits;
pub mod validation;

pub use config::{LaundryBatch, MachineSettings, Material, Program, ProgramConfiguration};
pub use controller::WashingMachine;
pub use state::{ErrorCode, LaundryStatus, Outcome};
