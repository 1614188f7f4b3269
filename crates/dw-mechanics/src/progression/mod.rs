//! Learn counters on abilities, skills, and powers.
//!
//! Critical rolls teach whatever was being used. Anything with a learn
//! counter implements [`Progression`] and can be handed to the resolver;
//! how learning is spent is up to the game.

pub mod set;

pub use set::TraitSet;

use std::fmt;

use serde::{Deserialize, Serialize};

/// A quantity that improves when rolls involving it go critical.
pub trait Progression {
    /// Record one critical outcome.
    fn learned_something(&mut self);

    /// Criticals recorded so far.
    fn learn(&self) -> u32;
}

/// A named, numeric character trait with a learn counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trait {
    /// Short lookup key, e.g. "Dex".
    pub key: String,
    /// Display name, e.g. "Dexterity".
    pub name: String,
    /// Rolled or assigned base value.
    pub base: i64,
    /// Added on top of the base by gear and effects.
    #[serde(default)]
    pub modifier: i64,
    /// Critical rolls this trait has taken part in.
    #[serde(default)]
    pub learn: u32,
}

impl Trait {
    /// A trait with no modifier and nothing learned.
    pub fn new(key: impl Into<String>, name: impl Into<String>, base: i64) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            base,
            modifier: 0,
            learn: 0,
        }
    }

    /// Set the modifier.
    pub fn with_modifier(mut self, modifier: i64) -> Self {
        self.modifier = modifier;
        self
    }

    /// Effective value.
    pub fn current(&self) -> i64 {
        self.base + self.modifier
    }
}

impl Progression for Trait {
    fn learned_something(&mut self) {
        self.learn = self.learn.saturating_add(1);
        tracing::debug!(key = %self.key, learn = self.learn, "learned something");
    }

    fn learn(&self) -> u32 {
        self.learn
    }
}

impl fmt::Display for Trait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.current())
    }
}
