//! Actuator failures contained by the controller

use crate::plan::Step;
use crate::traits::{EngineError, PumpError};

/// Error raised by one of the driven devices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorFault {
    /// Water pump operation failed
    Pump(PumpError),
    /// Engine operation failed
    Engine(EngineError),
}

impl From<PumpError> for ActuatorFault {
    fn from(e: PumpError) -> Self {
        ActuatorFault::Pump(e)
    }
}

impl From<EngineError> for ActuatorFault {
    fn from(e: EngineError) -> Self {
        ActuatorFault::Engine(e)
    }
}

/// A wash step that failed, with the device error behind it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepFailure {
    /// Step that was running
    pub step: Step,
    /// Device error
    pub fault: ActuatorFault,
}
