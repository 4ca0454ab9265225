//! Program resolution
//!
//! Turns the requested program into one that can actually run.
//! Static programs pass through untouched; `Autodetect` asks the dirt
//! detector and maps its reading through the configured policy.

use crate::config::{AutodetectPolicy, LaundryBatch, Program};
use crate::traits::{DetectorError, DirtDetector};

/// Reasons a program could not be determined
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResolveError {
    /// The dirt detector could not assess the batch
    Detector(DetectorError),
}

impl From<DetectorError> for ResolveError {
    fn from(e: DetectorError) -> Self {
        ResolveError::Detector(e)
    }
}

/// Resolve the program to run for `batch`
///
/// The detector is only consulted for `Autodetect`. The returned program
/// is always static.
pub fn resolve_program<D: DirtDetector>(
    requested: Program,
    batch: &LaundryBatch,
    detector: &mut D,
    policy: &AutodetectPolicy,
) -> Result<Program, ResolveError> {
    if requested.is_static() {
        return Ok(requested);
    }

    let degree = detector.assess(batch)?;
    let program = policy.program_for(degree);
    debug!("autodetect: dirt {}% -> {}", degree.percent(), program);
    Ok(program)
}
