//! Birth augur table, keyed by d30.

use crate::dice::{DiceRoller, Die};
use crate::error::{GenError, GenResult};

/// One birth augur: the omen and the roll it makes lucky.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthAugurEntry {
    /// The d30 result that selects this augur.
    pub key: u32,
    /// Omen name, e.g. "Harsh winter".
    pub name: String,
    /// What the luck modifier applies to, e.g. "All attack rolls".
    pub lucky_roll: String,
}

impl BirthAugurEntry {
    /// Create an entry.
    pub fn new(key: u32, name: impl Into<String>, lucky_roll: impl Into<String>) -> Self {
        Self {
            key,
            name: name.into(),
            lucky_roll: lucky_roll.into(),
        }
    }
}

/// Birth augurs; expected to cover every value 1-30.
#[derive(Debug, Clone, Default)]
pub struct BirthAugurTable {
    entries: Vec<BirthAugurEntry>,
}

impl BirthAugurTable {
    /// Create a table from entries.
    pub fn new(entries: Vec<BirthAugurEntry>) -> Self {
        Self { entries }
    }

    /// Find the augur with the given key.
    pub fn lookup(&self, key: u32) -> GenResult<&BirthAugurEntry> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .ok_or(GenError::LookupExhausted {
                table: "birth augur",
                roll: key,
            })
    }

    /// Roll d30 and look the result up.
    pub fn roll(&self, roller: &mut dyn DiceRoller) -> GenResult<&BirthAugurEntry> {
        let roll = Die::D30.roll(roller);
        tracing::debug!(roll, "birth augur roll");
        self.lookup(roll)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<BirthAugurEntry> for BirthAugurTable {
    fn from_iter<I: IntoIterator<Item = BirthAugurEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
