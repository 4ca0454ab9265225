//! Wash steps generated from a resolved program

use heapless::Vec;

use crate::config::Program;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum steps in a wash plan
pub const MAX_STEPS: usize = 4;

/// A single device step
///
/// Steps are the atomic units of a wash. They run strictly in plan order
/// and a failed step ends the wash.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// Fill the drum for a load of this weight
    Pour { weight_kg: f32 },
    /// Tumble the drum
    Wash { minutes: u16 },
    /// Drain the drum
    Release,
    /// Spin to extract water
    Spin,
}

/// Ordered steps for one wash
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WashPlan {
    program: Program,
    steps: Vec<Step, MAX_STEPS>,
}

impl WashPlan {
    /// Build the plan for `program`
    ///
    /// Order is always pour, wash, release, then spin if requested.
    /// Returns `None` if the program has no duration (unresolved
    /// `Autodetect`).
    pub fn new(program: Program, weight_kg: f32, spin: bool) -> Option<Self> {
        let minutes = program.duration_minutes()?;

        let mut steps = Vec::new();
        steps.push(Step::Pour { weight_kg }).ok()?;
        steps.push(Step::Wash { minutes }).ok()?;
        steps.push(Step::Release).ok()?;
        if spin {
            steps.push(Step::Spin).ok()?;
        }

        Some(Self { program, steps })
    }

    /// Get the program this plan runs
    pub fn program(&self) -> Program {
        self.program
    }

    /// Get the steps in execution order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total tumbling time in minutes
    pub fn total_wash_minutes(&self) -> u32 {
        self.steps
            .iter()
            .map(|step| match step {
                Step::Wash { minutes } => *minutes as u32,
                _ => 0,
            })
            .sum()
    }

    /// Check if the plan ends with a spin
    pub fn spins(&self) -> bool {
        self.steps.last() == Some(&Step::Spin)
    }
}
