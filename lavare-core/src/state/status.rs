//! Laundry status definition

use crate::config::Program;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Overall result of a wash attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Success,
    Failure,
}

/// Reason attached to a wash status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorCode {
    /// Wash completed
    NoError,
    /// Batch exceeds the weight limit for its material
    TooHeavy,
    /// Wash could not run or did not complete for any other reason
    UnknownError,
}

/// Status of one wash attempt
///
/// On success `executed_program` is the program that actually ran. On
/// failure it is always `None` and `error_code` names the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LaundryStatus {
    result: Outcome,
    error_code: ErrorCode,
    executed_program: Option<Program>,
}

impl LaundryStatus {
    /// Status for a completed wash
    pub const fn success(program: Program) -> Self {
        Self {
            result: Outcome::Success,
            error_code: ErrorCode::NoError,
            executed_program: Some(program),
        }
    }

    /// Status for a rejected or aborted wash
    ///
    /// `code` must name the cause; `NoError` is only valid on success.
    pub const fn failure(code: ErrorCode) -> Self {
        debug_assert!(
            !matches!(code, ErrorCode::NoError),
            "failure status needs an error code"
        );
        Self {
            result: Outcome::Failure,
            error_code: code,
            executed_program: None,
        }
    }

    pub const fn result(&self) -> Outcome {
        self.result
    }

    pub const fn error_code(&self) -> ErrorCode {
        self.error_code
    }

    pub const fn executed_program(&self) -> Option<Program> {
        self.executed_program
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.result, Outcome::Success)
    }
}
