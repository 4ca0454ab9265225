//! Stored settings record
//!
//! Settings are written to flash as a postcard-serialized record with a
//! header and checksum, so a blank or corrupted sector is detected
//! instead of being loaded as garbage limits.

use serde::{Deserialize, Serialize};

use super::settings::{MachineSettings, SettingsError};

/// Magic number to identify a settings record
pub const SETTINGS_MAGIC: u32 = 0x4C41_5653; // "LAVS"

/// Current settings record version
pub const SETTINGS_VERSION: u8 = 1;

/// Settings as stored in flash
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SettingsRecord {
    /// Magic number for validation
    pub magic: u32,
    /// Record format version
    pub version: u8,
    /// Stored settings
    pub settings: MachineSettings,
    /// CRC32 over magic, version and settings
    pub crc: u32,
}

impl SettingsRecord {
    /// Wrap settings in a record with a fresh checksum
    pub fn new(settings: MachineSettings) -> Self {
        let mut record = Self {
            magic: SETTINGS_MAGIC,
            version: SETTINGS_VERSION,
            settings,
            crc: 0,
        };
        record.crc = record.calculate_crc();
        record
    }

    /// Calculate CRC32 for the record (excluding the crc field itself)
    pub fn calculate_crc(&self) -> u32 {
        let limits = &self.settings.limits;
        let policy = &self.settings.autodetect;

        let mut crc: u32 = 0xFFFF_FFFF;
        crc = crc32_update(crc, &self.magic.to_le_bytes());
        crc = crc32_update(crc, &[self.version]);
        crc = crc32_update(crc, &limits.standard_kg.to_le_bytes());
        crc = crc32_update(crc, &limits.heavy_kg.to_le_bytes());
        crc = crc32_update(crc, &[policy.heavy_soil_above, policy.light_soil_up_to]);
        !crc
    }

    /// Check header and checksum, returning the settings if intact
    pub fn verify(&self) -> Result<MachineSettings, SettingsError> {
        if self.magic != SETTINGS_MAGIC {
            return Err(SettingsError::BadMagic);
        }
        if self.version != SETTINGS_VERSION {
            return Err(SettingsError::VersionMismatch);
        }
        if self.crc != self.calculate_crc() {
            return Err(SettingsError::CrcMismatch);
        }
        self.settings.validate()?;
        Ok(self.settings)
    }
}

impl MachineSettings {
    /// Serialize the settings as a stored record into `buf`
    ///
    /// Returns the used part of `buf`.
    pub fn to_postcard<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], SettingsError> {
        self.validate()?;
        postcard::to_slice(&SettingsRecord::new(*self), buf).map_err(|_| SettingsError::Serialize)
    }

    /// Load settings from a stored record
    pub fn from_postcard(bytes: &[u8]) -> Result<Self, SettingsError> {
        let record: SettingsRecord =
            postcard::from_bytes(bytes).map_err(|_| SettingsError::Deserialize)?;
        record.verify()
    }
}

/// CRC32 update (IEEE 802.3 polynomial, reflected)
fn crc32_update(crc: u32, data: &[u8]) -> u32 {
    const POLY: u32 = 0xEDB8_8320;
    let mut crc = crc;

    for &byte in data {
        crc ^= byte as u32;
        for _ in 0..8 {
            if crc & 1 != 0 {
                crc = (crc >> 1) ^ POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}
