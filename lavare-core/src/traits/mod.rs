//! Collaborator traits
//!
//! These traits define the interface between the wash controller
//! and the devices it drives. Production drivers and test doubles are
//! simply different implementations of the same traits.

pub mod detector;
pub mod engine;
pub mod pump;

pub use detector::{DetectorError, DirtDegree, DirtDetector};
pub use engine::{Engine, EngineError};
pub use pump::{PumpError, WaterPump};
