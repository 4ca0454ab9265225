//! Weight limit check
//!
//! Pure function of the batch and the configured limits: no I/O, no state.

use crate::config::{LaundryBatch, WeightLimits};

/// Result of checking a batch against the weight limits
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatchCheck {
    /// Batch can be washed
    Valid,
    /// Batch exceeds the limit for its material
    TooHeavy {
        /// Limit that was exceeded (kg)
        limit_kg: f32,
    },
}

impl BatchCheck {
    /// Check if the batch passed
    pub fn is_valid(&self) -> bool {
        matches!(self, BatchCheck::Valid)
    }
}

/// Check `batch` against the limit for its material
///
/// A weight exactly at the limit is valid.
pub fn validate_batch(batch: &LaundryBatch, limits: &WeightLimits) -> BatchCheck {
    let limit_kg = limits.for_material(batch.material());

    if batch.weight_kg() > limit_kg {
        BatchCheck::TooHeavy { limit_kg }
    } else {
        BatchCheck::Valid
    }
}
