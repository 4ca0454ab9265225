//! Test doubles for pins and delays

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{Error, ErrorKind, ErrorType, OutputPin};

/// Pin error raised by a failing mock pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault;

impl Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Mock GPIO output pin
#[derive(Debug, Default)]
pub struct MockPin {
    pub high: bool,
    /// Number of times the pin was driven high
    pub activations: u8,
    /// Fail every `set_high`
    pub fail_high: bool,
    /// Fail every `set_low`
    pub fail_low: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorType for MockPin {
    type Error = PinFault;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail_low {
            return Err(PinFault);
        }
        self.high = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail_high {
            return Err(PinFault);
        }
        self.high = true;
        self.activations += 1;
        Ok(())
    }
}

/// Delay that only records how long it was asked to wait
#[derive(Debug, Default)]
pub struct MockDelay {
    elapsed_ns: u64,
}

impl MockDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ns / 1_000_000
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.elapsed_ns += ns as u64;
    }

    fn delay_ms(&mut self, ms: u32) {
        self.elapsed_ns += ms as u64 * 1_000_000;
    }
}
