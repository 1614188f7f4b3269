//! Resolver settings.

use serde::{Deserialize, Serialize};

use crate::error::{MechError, MechResult};

/// Settings for a [`Resolver`](crate::Resolver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Fixed seed for reproducible rolls; `None` seeds from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
    /// A distribution sample above `mean * success_ratio` is a critical success.
    pub success_ratio: f64,
    /// A final sample below `mean * failure_ratio` is a critical failure.
    pub failure_ratio: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            seed: None,
            success_ratio: 1.2,
            failure_ratio: 0.8,
        }
    }
}

impl ResolverConfig {
    /// Seed the generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the critical-success threshold.
    pub fn with_success_ratio(mut self, ratio: f64) -> Self {
        self.success_ratio = ratio;
        self
    }

    /// Set the critical-failure threshold.
    pub fn with_failure_ratio(mut self, ratio: f64) -> Self {
        self.failure_ratio = ratio;
        self
    }

    /// The success ratio must be at least 1 and the failure ratio in `(0, 1]`.
    pub fn validate(&self) -> MechResult<()> {
        if !self.success_ratio.is_finite() || self.success_ratio < 1.0 {
            return Err(MechError::InvalidConfig(format!(
                "success ratio {} must be at least 1",
                self.success_ratio
            )));
        }
        if !(self.failure_ratio > 0.0 && self.failure_ratio <= 1.0) {
            return Err(MechError::InvalidConfig(format!(
                "failure ratio {} must be in (0, 1]",
                self.failure_ratio
            )));
        }
        Ok(())
    }
}
