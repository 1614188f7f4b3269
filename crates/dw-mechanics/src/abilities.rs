//! Starting ability scores for a new character.

use crate::error::MechResult;
use crate::progression::{Trait, TraitSet};
use crate::resolver::Resolver;
use crate::shape::Shape;

/// The rolled primary scores as `(key, name)`.
pub const PRIMARY: [(&str, &str); 5] = [
    ("Dex", "Dexterity"),
    ("Str", "Strength"),
    ("Vit", "Vitality"),
    ("Per", "Perception"),
    ("FOP", "Force of Personality"),
];

/// Average adult body mass, rolled on a very flat curve.
pub const MASS_MEAN: f64 = 180.0;

impl Resolver {
    /// Roll a fresh set of ability scores around `mean`.
    ///
    /// The five primaries are rolled without criticals. Health, stamina,
    /// and conviction pools are derived from them, and mass is rolled
    /// separately on a very flat curve. Nothing starts with any learning.
    pub fn roll_ability_scores(&mut self, mean: f64) -> MechResult<TraitSet> {
        let mut set = TraitSet::new();
        for (key, name) in PRIMARY {
            let base = self.roll_distribution_without_crits(mean, Shape::Normal)?;
            set.insert(Trait::new(key, name, base));
        }

        let score = |key: &str| set.current(key).unwrap_or_default();
        let (dex, str_, vit, fop) = (score("Dex"), score("Str"), score("Vit"), score("FOP"));

        set.insert(Trait::new("hp", "Health Points", vit * 5 + fop * 2));
        set.insert(Trait::new("sp", "Stamina Points", vit * 3 + str_ * 2 + dex));
        set.insert(Trait::new("cp", "Conviction Points", fop * 5 + vit));

        let mass = self.roll_distribution_without_crits(MASS_MEAN, Shape::VeryFlat)?;
        set.insert(Trait::new("mass", "Mass", mass));

        tracing::debug!(mean, traits = set.len(), "rolled ability scores");
        Ok(set)
    }
}
