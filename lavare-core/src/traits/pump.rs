//! Water pump trait

/// Errors that can occur with water pump operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PumpError {
    /// A valve did not respond to a command
    ValveFault,
    /// The requested fill exceeds the drum capacity
    Overfill,
    /// No water pressure at the inlet
    NoSupply,
    /// The drum did not drain
    DrainBlocked,
    /// Flow rate or capacity settings cannot be used
    InvalidConfig,
}

/// Trait for the water pump
///
/// Implementations control the inlet and drain side of the drum.
/// Each call either completes or reports why it could not.
pub trait WaterPump {
    /// Fill the drum with enough water for a load of `weight_kg`
    fn pour(&mut self, weight_kg: f32) -> Result<(), PumpError>;

    /// Drain all water from the drum
    fn release(&mut self) -> Result<(), PumpError>;
}

impl<T: WaterPump + ?Sized> WaterPump for &mut T {
    fn pour(&mut self, weight_kg: f32) -> Result<(), PumpError> {
        T::pour(self, weight_kg)
    }

    fn release(&mut self) -> Result<(), PumpError> {
        T::release(self)
    }
}
