//! Polyhedral dice and the step table built from them.

pub mod step;

pub use step::{MAX_STEP, STEP_TABLE, Step, StepFormula};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A die the step table rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
        }
    }

    /// Average face value.
    pub fn mean(self) -> f64 {
        (f64::from(self.sides()) + 1.0) / 2.0
    }

    /// Roll once: a value in `1..=sides`.
    pub fn roll<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        rng.random_range(1..=self.sides())
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
