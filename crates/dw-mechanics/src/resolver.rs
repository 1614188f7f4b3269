//! Dice-pool and bell-curve rolls with critical feedback.
//!
//! Every roll comes in two flavours. The plain ones just return a number.
//! The critical-aware ones also report how many critical successes and
//! failures happened, and bump the learn counter of every tracked
//! [`Progression`] once per critical.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::config::ResolverConfig;
use crate::dice::Step;
use crate::error::{MechError, MechResult};
use crate::progression::Progression;
use crate::shape::Shape;

/// How a roll turned out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Critical {
    /// Nothing exceptional.
    Normal,
    /// At least one critical success and no critical failure.
    Success,
    /// A critical failure, whatever came before it.
    Failure,
}

/// The value of a critical-aware roll and what happened along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// The rolled number.
    pub value: i64,
    /// Critical successes (maxed dice, or samples above the success line).
    pub successes: u32,
    /// Critical failures (dice showing 1, or a final sample below the failure line).
    pub failures: u32,
}

impl RollOutcome {
    /// Classify the roll. A failure outranks any number of successes.
    pub fn classification(&self) -> Critical {
        if self.failures > 0 {
            Critical::Failure
        } else if self.successes > 0 {
            Critical::Success
        } else {
            Critical::Normal
        }
    }

    /// Returns true if anything critical happened.
    pub fn is_critical(&self) -> bool {
        self.classification() != Critical::Normal
    }

    /// How much each tracked quantity learned from this roll.
    pub fn learned(&self) -> u32 {
        self.successes + self.failures
    }
}

/// Produces rolls from its own random generator.
#[derive(Debug, Clone)]
pub struct Resolver {
    rng: StdRng,
    config: ResolverConfig,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// A resolver seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            config: ResolverConfig::default(),
        }
    }

    /// A reproducible resolver.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            config: ResolverConfig::default().with_seed(seed),
        }
    }

    /// A resolver with explicit thresholds.
    pub fn from_config(config: &ResolverConfig) -> MechResult<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            rng,
            config: config.clone(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Roll a step's dice once each and add the modifier.
    pub fn roll_step_without_crits(&mut self, step: Step) -> i64 {
        let formula = step.formula();
        let dice: i64 = formula
            .dice
            .iter()
            .map(|die| i64::from(die.roll(&mut self.rng)))
            .sum();
        dice + formula.modifier
    }

    /// Roll a step with exploding dice.
    ///
    /// A die showing its maximum is a critical success: another die of the
    /// same size is rolled and added. A die showing 1 is a critical failure
    /// but is not re-rolled. Either way every tracked quantity learns.
    pub fn roll_step(&mut self, step: Step, tracked: &mut [&mut dyn Progression]) -> RollOutcome {
        let formula = step.formula();
        let mut pending = formula.dice;
        let mut total = formula.modifier;
        let mut successes = 0;
        let mut failures = 0;

        while let Some(die) = pending.pop() {
            let value = die.roll(&mut self.rng);
            total += i64::from(value);
            if value == die.sides() {
                successes += 1;
                pending.push(die);
                learned_something(tracked);
            } else if value == 1 {
                failures += 1;
                learned_something(tracked);
            }
        }

        tracing::trace!(%step, total, successes, failures, "step roll");
        RollOutcome {
            value: total,
            successes,
            failures,
        }
    }

    /// One sample from the shape's normal curve, truncated toward zero.
    pub fn roll_distribution_without_crits(&mut self, mean: f64, shape: Shape) -> MechResult<i64> {
        let normal = curve(mean, shape)?;
        Ok(normal.sample(&mut self.rng) as i64)
    }

    /// Sample the curve, chasing critical successes.
    ///
    /// Each sample above the success line is a critical success and earns
    /// another sample; the n-th sample counts for `1/n` of its value. The
    /// first sample at or below the line ends the roll. If that sample is
    /// below the failure line, or the running total is below 1, it is a
    /// critical failure. The result is never below 1.
    pub fn roll_distribution(
        &mut self,
        mean: f64,
        shape: Shape,
        tracked: &mut [&mut dyn Progression],
    ) -> MechResult<RollOutcome> {
        let normal = curve(mean, shape)?;
        let success_line = mean * self.config.success_ratio;
        let failure_line = mean * self.config.failure_ratio;

        let mut total = 0.0;
        let mut successes: u32 = 0;
        let mut failures = 0;

        loop {
            let sample = normal.sample(&mut self.rng);
            total += sample / f64::from(successes + 1);
            if sample <= success_line {
                if total < 1.0 || sample < failure_line {
                    failures += 1;
                    learned_something(tracked);
                }
                break;
            }
            successes += 1;
            learned_something(tracked);
        }

        let value = (total as i64).max(1);
        tracing::trace!(mean, %shape, value, successes, failures, "distribution roll");
        Ok(RollOutcome {
            value,
            successes,
            failures,
        })
    }
}

fn curve(mean: f64, shape: Shape) -> MechResult<Normal<f64>> {
    if !mean.is_finite() || mean <= 0.0 {
        return Err(MechError::InvalidMean(mean));
    }
    Ok(Normal::new(mean, shape.std_dev(mean))?)
}

fn learned_something(tracked: &mut [&mut dyn Progression]) {
    for quantity in tracked.iter_mut() {
        quantity.learned_something();
    }
}
