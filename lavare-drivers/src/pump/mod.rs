//! Water pump implementations
//!
//! - Valve pump: mains-fed inlet valve plus drain valve, time-controlled

pub mod valve;

pub use valve::{ValvePump, ValvePumpConfig};
