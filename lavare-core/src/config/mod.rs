//! Configuration types
//!
//! Laundry value objects plus the machine settings that tune weight
//! limits and program auto-detection. Settings can be stored as postcard
//! binary data or loaded from a TOML file.

pub mod settings;
pub mod types;

#[cfg(feature = "serde")]
pub mod record;
#[cfg(feature = "toml")]
mod toml;

#[cfg(feature = "serde")]
pub use record::{SettingsRecord, SETTINGS_MAGIC, SETTINGS_VERSION};
pub use settings::*;
pub use types::*;
