//! Dirt detector trait

use crate::config::LaundryBatch;

/// Degree of soiling as a percentage (0-100)
///
/// 0 is a clean load, 100 is the dirtiest load the sensor can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtDegree(u8);

impl DirtDegree {
    /// Highest representable degree
    pub const MAX: u8 = 100;

    /// Create a dirt degree, or `None` if `percent` is above 100
    pub const fn new(percent: u8) -> Option<Self> {
        if percent <= Self::MAX {
            Some(Self(percent))
        } else {
            None
        }
    }

    /// Get the degree as a percentage
    pub const fn percent(self) -> u8 {
        self.0
    }
}

/// Errors that can occur with dirt detection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DetectorError {
    /// Sensor disconnected (open circuit)
    OpenCircuit,
    /// Sensor shorted to ground
    ShortCircuit,
    /// Reading outside the calibrated range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
    /// Detector not fitted or not ready
    Unavailable,
}

/// Trait for dirt detectors
///
/// Implementations estimate how soiled a batch is so the controller can
/// pick a program when the caller asked for auto-detection.
pub trait DirtDetector {
    /// Assess the dirt degree of `batch`
    fn assess(&mut self, batch: &LaundryBatch) -> Result<DirtDegree, DetectorError>;
}

impl<T: DirtDetector + ?Sized> DirtDetector for &mut T {
    fn assess(&mut self, batch: &LaundryBatch) -> Result<DirtDegree, DetectorError> {
        T::assess(self, batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirt_degree_range() {
        assert_eq!(DirtDegree::new(0).map(DirtDegree::percent), Some(0));
        assert_eq!(DirtDegree::new(100).map(DirtDegree::percent), Some(100));
        assert!(DirtDegree::new(101).is_none());
        assert!(DirtDegree::new(u8::MAX).is_none());
    }

    #[test]
    fn test_dirt_degree_ordering() {
        let light = DirtDegree::new(10).unwrap();
        let heavy = DirtDegree::new(80).unwrap();
        assert!(light < heavy);
    }
}
