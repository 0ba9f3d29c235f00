//! Occupation table and d100 lookup.

use crate::dice::{DiceRoller, Die};
use crate::error::{GenError, GenResult};

/// Which d100 results select an occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollSpec {
    /// Exactly one value.
    Single(u32),
    /// An inclusive range.
    Range {
        /// Lowest matching roll.
        start: u32,
        /// Highest matching roll.
        end: u32,
    },
}

impl RollSpec {
    /// Parse `"57"` or `"1-3"`. Whitespace around numbers is ignored.
    pub fn parse(s: &str) -> GenResult<Self> {
        let invalid = || GenError::InvalidRoll(s.to_string());
        match s.split_once('-') {
            Some((start, end)) => {
                let start = start.trim().parse().map_err(|_| invalid())?;
                let end = end.trim().parse().map_err(|_| invalid())?;
                Ok(Self::Range { start, end })
            }
            None => s.trim().parse().map(Self::Single).map_err(|_| invalid()),
        }
    }

    /// Returns true if `roll` selects this entry. Both range ends match.
    pub fn contains(self, roll: u32) -> bool {
        match self {
            Self::Single(value) => value == roll,
            Self::Range { start, end } => (start..=end).contains(&roll),
        }
    }
}

impl std::fmt::Display for RollSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(v) => write!(f, "{v}"),
            Self::Range { start, end } => write!(f, "{start}-{end}"),
        }
    }
}

/// A non-human heritage recognised from the occupation name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ancestry {
    /// Goblins move slower and speak Goblin.
    Goblin,
    /// Orcs speak Orc.
    Orc,
    /// Sirens speak Siren.
    Siren,
}

impl Ancestry {
    const ALL: [Self; 3] = [Self::Goblin, Self::Orc, Self::Siren];

    fn prefix(self) -> &'static str {
        match self {
            Self::Goblin => "goblin",
            Self::Orc => "orc",
            Self::Siren => "siren",
        }
    }

    /// The extra language this ancestry speaks.
    pub fn language(self) -> &'static str {
        match self {
            Self::Goblin => "Goblin",
            Self::Orc => "Orc",
            Self::Siren => "Siren",
        }
    }
}

/// One row of the occupation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupationEntry {
    /// Which d100 results select this row.
    pub roll: RollSpec,
    /// Occupation name as printed on the sheet.
    pub name: String,
    /// Trained weapon, possibly annotated like `"Club (as Staff)"`.
    pub trained_weapon: String,
    /// Trade good carried by the character.
    pub trade_good: String,
}

impl OccupationEntry {
    /// Create an entry.
    pub fn new(
        roll: RollSpec,
        name: impl Into<String>,
        trained_weapon: impl Into<String>,
        trade_good: impl Into<String>,
    ) -> Self {
        Self {
            roll,
            name: name.into(),
            trained_weapon: trained_weapon.into(),
            trade_good: trade_good.into(),
        }
    }

    /// The ancestry named at the start of the occupation, if any.
    /// Matching is a case-insensitive prefix test.
    pub fn ancestry(&self) -> Option<Ancestry> {
        let lower = self.name.to_lowercase();
        Ancestry::ALL
            .into_iter()
            .find(|a| lower.starts_with(a.prefix()))
    }
}

/// Ordered occupation rows. Ranges are expected to cover 1-100 without
/// overlap; the first matching row wins either way.
#[derive(Debug, Clone, Default)]
pub struct OccupationTable {
    entries: Vec<OccupationEntry>,
}

impl OccupationTable {
    /// Create a table from rows in lookup order.
    pub fn new(entries: Vec<OccupationEntry>) -> Self {
        Self { entries }
    }

    /// Find the first row that `roll` selects.
    pub fn lookup(&self, roll: u32) -> GenResult<&OccupationEntry> {
        self.entries
            .iter()
            .find(|e| e.roll.contains(roll))
            .ok_or(GenError::LookupExhausted {
                table: "occupation",
                roll,
            })
    }

    /// Roll d100 and look the result up.
    pub fn roll(&self, roller: &mut dyn DiceRoller) -> GenResult<&OccupationEntry> {
        let roll = Die::D100.roll(roller);
        tracing::debug!(roll, "occupation roll");
        self.lookup(roll)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<OccupationEntry> for OccupationTable {
    fn from_iter<I: IntoIterator<Item = OccupationEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
