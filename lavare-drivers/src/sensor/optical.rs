//! Optical reflectance dirt sensor
//!
//! An IR emitter and photodiode look at the load through the door glass.
//! Soiled fabric reflects less light, so a lower ADC reading means a
//! dirtier load. Uses a lookup table for integer-only conversion.

use lavare_core::config::LaundryBatch;
use lavare_core::traits::{DetectorError, DirtDegree, DirtDetector};

/// Reflectance to dirt degree lookup table
///
/// Table format: (adc_value, dirt_percent)
/// Sorted by decreasing reflectance (increasing dirt). Calibrated against
/// white cotton reference swatches with a 12-bit ADC.
const DIRT_TABLE: &[(u16, u8)] = &[
    (3_900, 0),   // Fresh white reference
    (3_400, 10),  // Worn once
    (2_900, 25),  // Everyday wear
    (2_400, 40),  // Visible soiling
    (1_900, 60),  // Heavy soiling
    (1_300, 80),  // Work clothes
    (600, 100),   // Mud, grease
];

/// Readings this close to the rails indicate a wiring fault
const RAIL_MARGIN: u16 = 10;

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read ADC value (12-bit, 0-4095)
    #[allow(clippy::result_unit_err)]
    fn read(&mut self) -> Result<u16, ()>;
}

/// Reflectance sensor reporting dirt degree
pub struct OpticalDirtSensor<ADC> {
    adc: ADC,
    /// Samples averaged per assessment
    oversample: u8,
    /// ADC resolution (typically 4096 for 12-bit)
    adc_max: u16,
}

impl<ADC> OpticalDirtSensor<ADC> {
    /// Create a new optical sensor averaging four samples per reading
    pub fn new(adc: ADC) -> Self {
        Self {
            adc,
            oversample: 4,
            adc_max: 4096, // 12-bit ADC
        }
    }

    /// Set the number of samples averaged per reading (at least one)
    pub fn with_oversample(mut self, samples: u8) -> Self {
        self.oversample = samples.max(1);
        self
    }

    /// Check a raw reading for wiring faults
    pub fn check_rails(&self, adc_value: u16) -> Result<u16, DetectorError> {
        // Photodiode open: pull-up drives the input to the rail
        if adc_value >= self.adc_max - RAIL_MARGIN {
            return Err(DetectorError::OpenCircuit);
        }

        if adc_value < RAIL_MARGIN {
            return Err(DetectorError::ShortCircuit);
        }

        Ok(adc_value)
    }

    /// Convert a reflectance reading to a dirt degree
    ///
    /// Uses linear interpolation between table entries.
    pub fn reflectance_to_dirt(adc_value: u16) -> Result<DirtDegree, DetectorError> {
        let first = DIRT_TABLE[0];
        let last = DIRT_TABLE[DIRT_TABLE.len() - 1];

        if adc_value > first.0 || adc_value < last.0 {
            return Err(DetectorError::OutOfRange);
        }

        for pair in DIRT_TABLE.windows(2) {
            let (a_high, p_low) = pair[0];
            let (a_low, p_high) = pair[1];

            if adc_value <= a_high && adc_value >= a_low {
                // dirt = p_low + (p_high - p_low) * (a_high - adc) / (a_high - a_low)
                let a_range = (a_high - a_low) as u32;
                let p_range = (p_high - p_low) as u32;
                let a_offset = (a_high - adc_value) as u32;

                let percent = p_low as u32 + p_range * a_offset / a_range;
                return DirtDegree::new(percent as u8).ok_or(DetectorError::OutOfRange);
            }
        }

        Err(DetectorError::OutOfRange)
    }
}

impl<ADC: AdcReader> OpticalDirtSensor<ADC> {
    /// Read and average `oversample` raw samples
    fn read_average(&mut self) -> Result<u16, DetectorError> {
        let mut sum: u32 = 0;
        for _ in 0..self.oversample {
            let sample = self.adc.read().map_err(|_| DetectorError::ConversionError)?;
            sum += self.check_rails(sample)? as u32;
        }
        Ok((sum / self.oversample as u32) as u16)
    }
}

impl<ADC: AdcReader> DirtDetector for OpticalDirtSensor<ADC> {
    fn assess(&mut self, _batch: &LaundryBatch) -> Result<DirtDegree, DetectorError> {
        let reflectance = self.read_average()?;
        Self::reflectance_to_dirt(reflectance)
    }
}

/// ADC replaying a fixed sequence of readings
#[cfg(test)]
pub struct ScriptedAdc<'a> {
    readings: &'a [Result<u16, ()>],
    next: usize,
}

#[cfg(test)]
impl<'a> ScriptedAdc<'a> {
    pub fn new(readings: &'a [Result<u16, ()>]) -> Self {
        Self { readings, next: 0 }
    }
}

#[cfg(test)]
impl AdcReader for ScriptedAdc<'_> {
    fn read(&mut self) -> Result<u16, ()> {
        let reading = self.readings[self.next % self.readings.len()];
        self.next += 1;
        reading
    }
}
