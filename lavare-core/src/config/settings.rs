//! Machine settings
//!
//! Weight limits per material and the dirt thresholds used to pick a
//! program on auto-detection.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::{Material, Program};
use crate::traits::DirtDegree;

/// Default maximum load for ordinary fabrics (kg)
pub const DEFAULT_STANDARD_LIMIT_KG: f32 = 8.0;

/// Default maximum load for heavy fabrics (kg)
pub const DEFAULT_HEAVY_LIMIT_KG: f32 = 4.0;

/// Default dirt degree above which the long program is chosen
pub const DEFAULT_HEAVY_SOIL_ABOVE: u8 = 40;

/// Default dirt degree up to which the short program is chosen
pub const DEFAULT_LIGHT_SOIL_UP_TO: u8 = 10;

/// Settings validation and storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SettingsError {
    /// Weight limits are not finite, not positive, or heavy exceeds standard
    InvalidLimits,
    /// Dirt thresholds are above 100 or out of order
    InvalidPolicy,
    /// Output buffer too small or serialization failed
    Serialize,
    /// Stored bytes could not be decoded
    Deserialize,
    /// Stored record does not start with the settings magic
    BadMagic,
    /// Stored record was written by another format version
    VersionMismatch,
    /// Stored record checksum does not match its contents
    CrcMismatch,
    /// TOML text could not be parsed
    Parse,
}

/// Maximum load per material class
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightLimits {
    /// Limit for ordinary fabrics (kg)
    pub standard_kg: f32,
    /// Limit for heavy fabrics (kg)
    pub heavy_kg: f32,
}

impl Default for WeightLimits {
    fn default() -> Self {
        Self {
            standard_kg: DEFAULT_STANDARD_LIMIT_KG,
            heavy_kg: DEFAULT_HEAVY_LIMIT_KG,
        }
    }
}

impl WeightLimits {
    /// Get the maximum permissible weight for `material`
    pub fn for_material(&self, material: Material) -> f32 {
        if material.is_heavy() {
            self.heavy_kg
        } else {
            self.standard_kg
        }
    }

    /// Check that both limits are usable
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = |kg: f32| kg.is_finite() && kg > 0.0;
        if !positive(self.standard_kg) || !positive(self.heavy_kg) {
            return Err(SettingsError::InvalidLimits);
        }
        if self.heavy_kg > self.standard_kg {
            return Err(SettingsError::InvalidLimits);
        }
        Ok(())
    }
}

/// Mapping from dirt degree to program for auto-detection
///
/// ```text
/// 0                  ..= light_soil_up_to   -> Short
/// light_soil_up_to+1 ..= heavy_soil_above   -> Medium
/// heavy_soil_above+1 ..= 100                -> Long
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutodetectPolicy {
    /// Degrees strictly above this select the long program
    pub heavy_soil_above: u8,
    /// Degrees at or below this select the short program
    pub light_soil_up_to: u8,
}

impl Default for AutodetectPolicy {
    fn default() -> Self {
        Self {
            heavy_soil_above: DEFAULT_HEAVY_SOIL_ABOVE,
            light_soil_up_to: DEFAULT_LIGHT_SOIL_UP_TO,
        }
    }
}

impl AutodetectPolicy {
    /// Pick the program for a dirt reading
    ///
    /// Always returns a static program.
    pub fn program_for(&self, degree: DirtDegree) -> Program {
        let percent = degree.percent();
        if percent > self.heavy_soil_above {
            Program::Long
        } else if percent <= self.light_soil_up_to {
            Program::Short
        } else {
            Program::Medium
        }
    }

    /// Check that the thresholds are in range and ordered
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.heavy_soil_above > DirtDegree::MAX {
            return Err(SettingsError::InvalidPolicy);
        }
        if self.light_soil_up_to > self.heavy_soil_above {
            return Err(SettingsError::InvalidPolicy);
        }
        Ok(())
    }
}

/// Complete machine settings
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MachineSettings {
    /// Load limits per material class
    pub limits: WeightLimits,
    /// Program selection for `Autodetect`
    pub autodetect: AutodetectPolicy,
}

impl MachineSettings {
    /// Create settings from parts
    pub const fn new(limits: WeightLimits, autodetect: AutodetectPolicy) -> Self {
        Self { limits, autodetect }
    }

    /// Validate all sections
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.limits.validate()?;
        self.autodetect.validate()
    }
}
