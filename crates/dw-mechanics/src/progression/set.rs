//! A keyed collection of traits.

use serde::{Deserialize, Serialize};

use super::Trait;

/// Traits in insertion order, looked up by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSet {
    traits: Vec<Trait>,
}

impl TraitSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trait, replacing any with the same key (case-insensitive).
    pub fn insert(&mut self, t: Trait) {
        match self.position(&t.key) {
            Some(i) => self.traits[i] = t,
            None => self.traits.push(t),
        }
    }

    /// Builder form of [`TraitSet::insert`].
    pub fn with(mut self, t: Trait) -> Self {
        self.insert(t);
        self
    }

    /// Look up a trait by key.
    pub fn get(&self, key: &str) -> Option<&Trait> {
        self.position(key).map(|i| &self.traits[i])
    }

    /// Look up a trait by key for updating.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Trait> {
        self.position(key).map(|i| &mut self.traits[i])
    }

    /// Effective value of a trait, if present.
    pub fn current(&self, key: &str) -> Option<i64> {
        self.get(key).map(Trait::current)
    }

    /// All traits in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Trait> {
        self.traits.iter()
    }

    /// Number of traits.
    pub fn len(&self) -> usize {
        self.traits.len()
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.traits
            .iter()
            .position(|t| t.key.eq_ignore_ascii_case(key))
    }
}

impl FromIterator<Trait> for TraitSet {
    fn from_iter<I: IntoIterator<Item = Trait>>(iter: I) -> Self {
        let mut set = Self::new();
        for t in iter {
            set.insert(t);
        }
        set
    }
}
