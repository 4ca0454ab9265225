//! TOML settings files
//!
//! Lets a machine be tuned with a human-edited file:
//!
//! ```toml
//! [limits]
//! standard_kg = 8.0
//! heavy_kg = 4.0
//!
//! [autodetect]
//! heavy_soil_above = 40
//! light_soil_up_to = 10
//! ```
//!
//! Missing sections and keys fall back to the built-in defaults.

use super::settings::{MachineSettings, SettingsError};

impl MachineSettings {
    /// Parse and validate settings from TOML text
    pub fn from_toml(input: &str) -> Result<Self, SettingsError> {
        let settings: MachineSettings =
            ::toml::from_str(input).map_err(|_| SettingsError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }
}
