//! Dirt sensor implementations

pub mod optical;

pub use optical::{AdcReader, OpticalDirtSensor};
