//! Drum engine implementations
//!
//! - Relay engine: separate wash and spin relays on a universal motor

pub mod relay;

pub use relay::{RelayEngine, RelayEngineConfig};
