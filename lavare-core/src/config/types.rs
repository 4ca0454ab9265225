//! Laundry value types
//!
//! These types describe one wash request: the batch, the program asked
//! for and the fixed attributes of each material and program. All of them
//! are plain values owned by the caller.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fabric type of a laundry batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    Cotton,
    Delicate,
    Jeans,
    Synthetic,
    Wool,
}

impl Material {
    /// Every material, in declaration order
    pub const ALL: [Material; 5] = [
        Material::Cotton,
        Material::Delicate,
        Material::Jeans,
        Material::Synthetic,
        Material::Wool,
    ];

    /// Check if this fabric has a reduced load tolerance
    ///
    /// Heavy fabrics soak up more water, so the drum takes less of them.
    pub const fn is_heavy(self) -> bool {
        matches!(self, Material::Jeans | Material::Wool)
    }
}

/// Wash program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Program {
    /// Quick wash
    Short,
    /// Everyday wash
    Medium,
    /// Intensive wash
    Long,
    /// Pick a program from the dirt detector reading
    Autodetect,
}

impl Program {
    /// Every program, in declaration order
    pub const ALL: [Program; 4] = [
        Program::Short,
        Program::Medium,
        Program::Long,
        Program::Autodetect,
    ];

    /// Wash duration in minutes
    ///
    /// `Autodetect` has no duration until it is resolved.
    pub const fn duration_minutes(self) -> Option<u16> {
        match self {
            Program::Short => Some(30),
            Program::Medium => Some(60),
            Program::Long => Some(120),
            Program::Autodetect => None,
        }
    }

    /// Check if this program runs as requested, without detection
    pub const fn is_static(self) -> bool {
        !matches!(self, Program::Autodetect)
    }
}

/// Errors when building a laundry batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatchError {
    /// Weight is negative, NaN or infinite
    InvalidWeight,
}

/// One load of laundry
///
/// Fields are private so a batch always carries a finite, non-negative
/// weight.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LaundryBatch {
    material: Material,
    weight_kg: f32,
}

impl LaundryBatch {
    /// Create a batch
    ///
    /// Zero weight is accepted; negative and non-finite weights are not.
    pub fn new(material: Material, weight_kg: f32) -> Result<Self, BatchError> {
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(BatchError::InvalidWeight);
        }

        Ok(Self {
            material,
            weight_kg,
        })
    }

    /// Get the fabric type
    pub const fn material(&self) -> Material {
        self.material
    }

    /// Get the dry weight in kilograms
    pub const fn weight_kg(&self) -> f32 {
        self.weight_kg
    }
}

/// Program configuration requested by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProgramConfiguration {
    /// Requested program (static or `Autodetect`)
    pub program: Program,
    /// Spin the drum after draining
    pub spin: bool,
}

impl ProgramConfiguration {
    /// Create a program configuration
    pub const fn new(program: Program, spin: bool) -> Self {
        Self { program, spin }
    }
}
