//! Step numbers and their dice formulas.
//!
//! A step is a difficulty rating. Steps 1 through 21 come from a fixed
//! table; higher steps keep the d20 and add six-sided dice, one more for
//! every three steps, with the steps in between carrying a +1 or +2.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Die;
use crate::error::{MechError, MechResult};

/// Largest step a caller may ask for.
pub const MAX_STEP: u32 = 100;

/// Dice and modifier for steps 1 through 21, in order.
pub const STEP_TABLE: [(&[Die], i64); 21] = [
    (&[Die::D4], -2),
    (&[Die::D4], -1),
    (&[Die::D4], 0),
    (&[Die::D6], 0),
    (&[Die::D8], 0),
    (&[Die::D10], 0),
    (&[Die::D12], 0),
    (&[Die::D6, Die::D6], 0),
    (&[Die::D8, Die::D6], 0),
    (&[Die::D10, Die::D6], 0),
    (&[Die::D10, Die::D8], 0),
    (&[Die::D10, Die::D10], 0),
    (&[Die::D20], 1),
    (&[Die::D20, Die::D4], 0),
    (&[Die::D20, Die::D6], 0),
    (&[Die::D20, Die::D8], 0),
    (&[Die::D20, Die::D10], 0),
    (&[Die::D20, Die::D6, Die::D6], 0),
    (&[Die::D20, Die::D6, Die::D6], 2),
    (&[Die::D20, Die::D6, Die::D6], 4),
    (&[Die::D20, Die::D6, Die::D6, Die::D6], 0),
];

/// A validated step number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Step(u32);

impl Step {
    /// Accept `1..=MAX_STEP`.
    pub fn new(step: i64) -> MechResult<Self> {
        u32::try_from(step)
            .ok()
            .filter(|s| (1..=MAX_STEP).contains(s))
            .map(Self)
            .ok_or(MechError::InvalidStep {
                step,
                max: MAX_STEP,
            })
    }

    /// The raw step number.
    pub fn get(self) -> u32 {
        self.0
    }

    /// The dice this step rolls.
    pub fn formula(self) -> StepFormula {
        let index = self.0 as usize;
        if let Some((dice, modifier)) = STEP_TABLE.get(index - 1) {
            return StepFormula {
                dice: dice.to_vec(),
                modifier: *modifier,
            };
        }

        let k = i64::from(self.0) - STEP_TABLE.len() as i64;
        let d6 = 3 + (k / 3) as usize;
        let mut dice = Vec::with_capacity(1 + d6);
        dice.push(Die::D20);
        dice.extend(std::iter::repeat_n(Die::D6, d6));
        StepFormula {
            dice,
            modifier: k % 3,
        }
    }
}

impl TryFrom<i64> for Step {
    type Error = MechError;

    fn try_from(step: i64) -> MechResult<Self> {
        Self::new(step)
    }
}

impl From<Step> for u32 {
    fn from(step: Step) -> Self {
        step.0
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.0)
    }
}

/// Dice plus a flat modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFormula {
    /// Dice rolled and summed.
    pub dice: Vec<Die>,
    /// Added after the dice.
    pub modifier: i64,
}

impl StepFormula {
    /// Expected total without exploding dice.
    pub fn mean(&self) -> f64 {
        self.dice.iter().map(|d| d.mean()).sum::<f64>() + self.modifier as f64
    }

    /// Smallest possible total.
    pub fn min(&self) -> i64 {
        self.dice.len() as i64 + self.modifier
    }

    /// Largest possible total without exploding dice.
    pub fn max(&self) -> i64 {
        self.dice.iter().map(|d| i64::from(d.sides())).sum::<i64>() + self.modifier
    }
}

impl fmt::Display for StepFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut groups: Vec<(Die, usize)> = Vec::new();
        for die in &self.dice {
            match groups.last_mut() {
                Some((last, count)) if last == die => *count += 1,
                _ => groups.push((*die, 1)),
            }
        }
        let parts: Vec<String> = groups
            .iter()
            .map(|(die, count)| {
                if *count == 1 {
                    die.to_string()
                } else {
                    format!("{count}{die}")
                }
            })
            .collect();
        write!(f, "{}", parts.join("+"))?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}
