//! Solenoid valve water pump
//!
//! This driver provides:
//! - Load-proportional filling through a mains inlet valve
//! - Time-controlled draining through a drain valve
//! - Overfill protection based on the drum capacity
//!
//! Filling and draining are open-loop: the valve is held open for the
//! time the configured flow rate needs to move the water.
//!
//! # Usage
//!
//! ```ignore
//! let mut pump = ValvePump::new(inlet_pin, drain_pin, delay, ValvePumpConfig::default())?;
//! pump.pour(7.0)?; // fill for a 7 kg load
//! pump.release()?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use lavare_core::traits::{PumpError, WaterPump};

/// Valve pump configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValvePumpConfig {
    /// Water needed per kg of dry laundry (litres)
    pub litres_per_kg: f32,
    /// Inlet flow rate (litres per minute)
    pub fill_rate_lpm: f32,
    /// Time to drain a full drum (seconds)
    pub drain_time_s: u16,
    /// Drum capacity (litres)
    pub max_litres: f32,
}

impl Default for ValvePumpConfig {
    fn default() -> Self {
        Self {
            litres_per_kg: 6.0,
            fill_rate_lpm: 12.0,
            drain_time_s: 90,
            max_litres: 60.0,
        }
    }
}

impl ValvePumpConfig {
    /// Check that flow rate, water ratio and capacity are usable
    pub fn validate(&self) -> Result<(), PumpError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.fill_rate_lpm)
            || !positive(self.max_litres)
            || !self.litres_per_kg.is_finite()
            || self.litres_per_kg < 0.0
        {
            return Err(PumpError::InvalidConfig);
        }
        Ok(())
    }

    /// Time the inlet must stay open to pour `litres` (ms)
    pub fn fill_time_ms(&self, litres: f32) -> u32 {
        (litres / self.fill_rate_lpm * 60_000.0) as u32
    }
}

/// Water pump driven by an inlet and a drain valve
///
/// Both valves are active-high and closed when idle.
pub struct ValvePump<P, D> {
    inlet: P,
    drain: P,
    delay: D,
    config: ValvePumpConfig,
    /// Water currently in the drum (litres)
    litres_in_drum: f32,
}

impl<P: OutputPin, D: DelayNs> ValvePump<P, D> {
    /// Create a new valve pump
    ///
    /// Both valves are closed before the pump is returned. A configuration
    /// that fails [`ValvePumpConfig::validate`] is rejected.
    pub fn new(inlet: P, drain: P, delay: D, config: ValvePumpConfig) -> Result<Self, PumpError> {
        config.validate()?;
        let mut pump = Self {
            inlet,
            drain,
            delay,
            config,
            litres_in_drum: 0.0,
        };
        pump.inlet.set_low().map_err(|_| PumpError::ValveFault)?;
        pump.drain.set_low().map_err(|_| PumpError::ValveFault)?;
        Ok(pump)
    }

    /// Get the configuration
    pub fn config(&self) -> &ValvePumpConfig {
        &self.config
    }

    /// Get the water currently in the drum (litres)
    pub fn litres_in_drum(&self) -> f32 {
        self.litres_in_drum
    }

    /// Release the pins and delay
    pub fn free(self) -> (P, P, D) {
        (self.inlet, self.drain, self.delay)
    }
}

/// Hold `pin` high for `ms`, always driving it low afterwards
fn open_for<P: OutputPin, D: DelayNs>(
    pin: &mut P,
    delay: &mut D,
    ms: u32,
) -> Result<(), PumpError> {
    let opened = pin.set_high();
    if opened.is_ok() {
        delay.delay_ms(ms);
    }
    let closed = pin.set_low();

    opened.and(closed).map_err(|_| PumpError::ValveFault)
}

impl<P: OutputPin, D: DelayNs> WaterPump for ValvePump<P, D> {
    fn pour(&mut self, weight_kg: f32) -> Result<(), PumpError> {
        let litres = weight_kg * self.config.litres_per_kg;
        if !litres.is_finite() || litres < 0.0 {
            return Err(PumpError::Overfill);
        }
        if self.litres_in_drum + litres > self.config.max_litres {
            return Err(PumpError::Overfill);
        }

        let fill_ms = self.config.fill_time_ms(litres);
        open_for(&mut self.inlet, &mut self.delay, fill_ms)?;

        self.litres_in_drum += litres;
        Ok(())
    }

    fn release(&mut self) -> Result<(), PumpError> {
        let drain_ms = self.config.drain_time_s as u32 * 1000;
        open_for(&mut self.drain, &mut self.delay, drain_ms)?;

        self.litres_in_drum = 0.0;
        Ok(())
    }
}
