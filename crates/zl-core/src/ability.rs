//! The six ability scores and their modifiers.

use serde::Serialize;

use crate::dice::{DiceRoller, roll_ability_score};

/// One of the six abilities, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ability {
    /// Physical power; melee attack modifier.
    Strength,
    /// Balance and aim; armor class, initiative, reflex and missile attacks.
    Agility,
    /// Endurance; hit points and fortitude.
    Stamina,
    /// Charisma and willpower.
    Personality,
    /// Memory and reasoning.
    Intelligence,
    /// Fortune; feeds the birth augur bonus.
    Luck,
}

impl Ability {
    /// All abilities in the order they are rolled and printed.
    pub const ALL: [Self; 6] = [
        Self::Strength,
        Self::Agility,
        Self::Stamina,
        Self::Personality,
        Self::Intelligence,
        Self::Luck,
    ];
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strength => write!(f, "Strength"),
            Self::Agility => write!(f, "Agility"),
            Self::Stamina => write!(f, "Stamina"),
            Self::Personality => write!(f, "Personality"),
            Self::Intelligence => write!(f, "Intelligence"),
            Self::Luck => write!(f, "Luck"),
        }
    }
}

/// Modifier for an ability score.
///
/// Scores outside `3..=18` cannot come from 3d6 and map to 0.
pub fn modifier_for(score: u32) -> i32 {
    match score {
        3 => -3,
        4 | 5 => -2,
        6..=8 => -1,
        9..=12 => 0,
        13..=15 => 1,
        16 | 17 => 2,
        18 => 3,
        _ => 0,
    }
}

/// Render a modifier with an explicit sign: `+0`, `+2`, `-1`.
pub fn format_modifier(modifier: i32) -> String {
    if modifier >= 0 {
        format!("+{modifier}")
    } else {
        modifier.to_string()
    }
}

/// A rolled set of ability scores. Immutable once rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AbilityScores {
    strength: u32,
    agility: u32,
    stamina: u32,
    personality: u32,
    intelligence: u32,
    luck: u32,
}

impl AbilityScores {
    /// Build from explicit scores in sheet order.
    pub fn new(scores: [u32; 6]) -> Self {
        let [strength, agility, stamina, personality, intelligence, luck] = scores;
        Self {
            strength,
            agility,
            stamina,
            personality,
            intelligence,
            luck,
        }
    }

    /// Roll 3d6 for each ability, Strength first and Luck last.
    pub fn roll(roller: &mut dyn DiceRoller) -> Self {
        let mut scores = [0; 6];
        for score in &mut scores {
            *score = roll_ability_score(roller);
        }
        Self::new(scores)
    }

    /// The score for one ability.
    pub fn score(&self, ability: Ability) -> u32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Agility => self.agility,
            Ability::Stamina => self.stamina,
            Ability::Personality => self.personality,
            Ability::Intelligence => self.intelligence,
            Ability::Luck => self.luck,
        }
    }

    /// The modifier for one ability.
    pub fn modifier(&self, ability: Ability) -> i32 {
        modifier_for(self.score(ability))
    }

    /// Iterate `(ability, score)` pairs in sheet order.
    pub fn iter(&self) -> impl Iterator<Item = (Ability, u32)> + '_ {
        Ability::ALL.into_iter().map(|a| (a, self.score(a)))
    }
}
