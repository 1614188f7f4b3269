//! Randomness resolution for dogworld.
//!
//! Two kinds of roll: step rolls, where a difficulty step picks a dice pool,
//! and distribution rolls, sampled from a normal curve around a mean. The
//! critical-aware variants feed a learn counter on whatever abilities,
//! skills, or powers were involved.

pub mod abilities;
pub mod config;
pub mod dice;
pub mod error;
pub mod progression;
pub mod resolver;
pub mod shape;

pub use config::ResolverConfig;
pub use dice::{Die, MAX_STEP, STEP_TABLE, Step, StepFormula};
pub use error::{MechError, MechResult};
pub use progression::{Progression, Trait, TraitSet};
pub use resolver::{Critical, Resolver, RollOutcome};
pub use shape::Shape;
