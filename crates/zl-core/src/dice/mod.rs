//! Dice types and rolling helpers.
//!
//! Only the dice the generator actually throws are modelled. Rolling goes
//! through a [`DiceRoller`], never through a global RNG.

pub mod roller;

pub use roller::{DiceRoller, RngRoller, ScriptedRoller};

/// A die used during character generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Die {
    /// Four-sided die (hit points).
    D4,
    /// Six-sided die (ability scores).
    D6,
    /// Twelve-sided die (starting funds).
    D12,
    /// Twenty-four-sided die (starting equipment).
    D24,
    /// Thirty-sided die (birth augur).
    D30,
    /// Percentile die (occupation).
    D100,
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D12 => 12,
            Self::D24 => 24,
            Self::D30 => 30,
            Self::D100 => 100,
        }
    }

    /// Roll this die once.
    pub fn roll(self, roller: &mut dyn DiceRoller) -> u32 {
        roller.roll(self.sides())
    }

    /// Roll this die `count` times and sum the results.
    pub fn roll_sum(self, roller: &mut dyn DiceRoller, count: u32) -> u32 {
        (0..count).map(|_| self.roll(roller)).sum()
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// Roll one ability score: 3d6, always in `3..=18`.
pub fn roll_ability_score(roller: &mut dyn DiceRoller) -> u32 {
    Die::D6.roll_sum(roller, 3)
}

/// Roll starting funds in copper pieces: 5d12, always in `5..=60`.
pub fn roll_starting_funds(roller: &mut dyn DiceRoller) -> u32 {
    Die::D12.roll_sum(roller, 5)
}
