//! Drum engine trait

/// Errors that can occur with engine operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EngineError {
    /// A relay did not switch
    RelayFault,
    /// Wash duration is zero or longer than the engine allows
    InvalidDuration,
    /// Safety interlock prevented operation
    Interlock,
    /// Drum is overloaded or blocked
    Overload,
}

/// Trait for the drum engine
///
/// The engine tumbles the drum for a washing phase and spins it
/// afterwards to shed water.
pub trait Engine {
    /// Tumble the drum for `duration_minutes`
    fn run_washing(&mut self, duration_minutes: u16) -> Result<(), EngineError>;

    /// Spin the drum to extract water
    fn spin(&mut self) -> Result<(), EngineError>;
}

impl<T: Engine + ?Sized> Engine for &mut T {
    fn run_washing(&mut self, duration_minutes: u16) -> Result<(), EngineError> {
        T::run_washing(self, duration_minutes)
    }

    fn spin(&mut self) -> Result<(), EngineError> {
        T::spin(self)
    }
}
