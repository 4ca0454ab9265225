//! Relay-switched drum engine
//!
//! This driver provides:
//! - Wash tumbling via the wash relay for a requested duration
//! - Spin extraction via the spin relay for a fixed time
//! - Minimum switch delay to protect relays from rapid switching
//! - Interlock: never spin while the wash relay is engaged
//!
//! # Safety
//!
//! Wash and spin windings must never be energised together. If the wash
//! relay cannot be released the engine stays locked out of spinning until
//! it is released successfully.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use lavare_core::traits::{Engine, EngineError};

/// Relay engine configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RelayEngineConfig {
    /// Minimum delay after every relay release (ms)
    pub min_switch_delay_ms: u32,
    /// Spin extraction time (seconds)
    pub spin_time_s: u16,
    /// Longest wash the engine accepts (minutes)
    pub max_wash_minutes: u16,
}

impl Default for RelayEngineConfig {
    fn default() -> Self {
        Self {
            min_switch_delay_ms: 100,
            spin_time_s: 300,
            max_wash_minutes: 180,
        }
    }
}

/// Engine driven by a wash relay and a spin relay
pub struct RelayEngine<P, D> {
    wash_relay: P,
    spin_relay: P,
    delay: D,
    config: RelayEngineConfig,
    /// Wash relay may still be closed
    wash_engaged: bool,
}

impl<P: OutputPin, D: DelayNs> RelayEngine<P, D> {
    /// Create a new relay engine
    ///
    /// Both relays are released before the engine is returned.
    pub fn new(
        wash_relay: P,
        spin_relay: P,
        delay: D,
        config: RelayEngineConfig,
    ) -> Result<Self, EngineError> {
        let mut engine = Self {
            wash_relay,
            spin_relay,
            delay,
            config,
            wash_engaged: false,
        };
        engine.wash_relay.set_low().map_err(|_| EngineError::RelayFault)?;
        engine.spin_relay.set_low().map_err(|_| EngineError::RelayFault)?;
        Ok(engine)
    }

    /// Get the configuration
    pub fn config(&self) -> &RelayEngineConfig {
        &self.config
    }

    /// Check if the spin interlock is active
    pub fn is_interlocked(&self) -> bool {
        self.wash_engaged
    }

    /// Release the pins and delay
    pub fn free(self) -> (P, P, D) {
        (self.wash_relay, self.spin_relay, self.delay)
    }

    fn release_wash_relay(&mut self) -> Result<(), EngineError> {
        self.wash_relay.set_low().map_err(|_| EngineError::RelayFault)?;
        self.wash_engaged = false;
        self.delay.delay_ms(self.config.min_switch_delay_ms);
        Ok(())
    }
}

impl<P: OutputPin, D: DelayNs> Engine for RelayEngine<P, D> {
    fn run_washing(&mut self, duration_minutes: u16) -> Result<(), EngineError> {
        if duration_minutes == 0 || duration_minutes > self.config.max_wash_minutes {
            return Err(EngineError::InvalidDuration);
        }

        self.wash_engaged = true;
        if self.wash_relay.set_high().is_err() {
            self.release_wash_relay()?;
            return Err(EngineError::RelayFault);
        }

        self.delay.delay_ms(duration_minutes as u32 * 60_000);
        self.release_wash_relay()
    }

    fn spin(&mut self) -> Result<(), EngineError> {
        if self.wash_engaged {
            return Err(EngineError::Interlock);
        }

        let engaged = self.spin_relay.set_high();
        if engaged.is_ok() {
            self.delay.delay_ms(self.config.spin_time_s as u32 * 1000);
        }
        let released = self.spin_relay.set_low();
        self.delay.delay_ms(self.config.min_switch_delay_ms);

        engaged.and(released).map_err(|_| EngineError::RelayFault)
    }
}
