//! Named spreads for distribution rolls.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// How widely a distribution roll spreads around its mean.
///
/// The standard deviation is the mean divided by [`Shape::divisor`], so a
/// higher divisor gives a tighter, steeper curve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// sd = mean / 10
    #[default]
    Normal,
    /// sd = mean / 7.5
    Flat,
    /// sd = mean / 5
    VeryFlat,
    /// sd = mean / 15
    Steep,
    /// sd = mean / 20
    VerySteep,
}

impl Shape {
    /// Every shape, tightest spread last.
    pub const ALL: [Shape; 5] = [
        Self::VeryFlat,
        Self::Flat,
        Self::Normal,
        Self::Steep,
        Self::VerySteep,
    ];

    /// What the mean is divided by to get the standard deviation.
    pub fn divisor(self) -> f64 {
        match self {
            Self::Normal => 10.0,
            Self::Flat => 7.5,
            Self::VeryFlat => 5.0,
            Self::Steep => 15.0,
            Self::VerySteep => 20.0,
        }
    }

    /// Standard deviation for a given mean.
    pub fn std_dev(self, mean: f64) -> f64 {
        mean / self.divisor()
    }

    /// Lowercase name with a space, as builders type it.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Flat => "flat",
            Self::VeryFlat => "very flat",
            Self::Steep => "steep",
            Self::VerySteep => "very steep",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shape {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str() == normalized)
            .ok_or_else(|| MechError::UnknownShape(s.to_string()))
    }
}
