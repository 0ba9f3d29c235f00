//! Weapon table and trained-weapon resolution.

use std::collections::HashMap;

use serde::Serialize;

use crate::ability::{Ability, AbilityScores};
use crate::error::{GenError, GenResult};

/// Range value that marks a melee weapon.
pub const MELEE_RANGE: &str = "-";

/// Whether a weapon is used in melee or at range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Reach {
    /// Hand-to-hand; attacks use Strength.
    Melee,
    /// Thrown or fired; attacks use Agility.
    Ranged,
}

impl Reach {
    /// The ability whose modifier applies to attacks with this reach.
    pub fn attack_ability(self) -> Ability {
        match self {
            Self::Melee => Ability::Strength,
            Self::Ranged => Ability::Agility,
        }
    }
}

/// One row of the weapon table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponEntry {
    /// Damage dice, e.g. `"1d6"`.
    pub damage: String,
    /// Range bands, or `"-"` for melee.
    pub range: String,
}

impl WeaponEntry {
    /// Create an entry.
    pub fn new(damage: impl Into<String>, range: impl Into<String>) -> Self {
        Self {
            damage: damage.into(),
            range: range.into(),
        }
    }

    /// Melee or ranged, from the range column.
    pub fn reach(&self) -> Reach {
        if self.range.trim() == MELEE_RANGE {
            Reach::Melee
        } else {
            Reach::Ranged
        }
    }

    /// Returns true for melee weapons.
    pub fn is_melee(&self) -> bool {
        self.reach() == Reach::Melee
    }
}

/// Canonical lookup key for a trained-weapon reference.
///
/// `"Club (as Staff)"` names a staff; any parenthesised text wins over the
/// outer name, with a leading `as ` dropped. The result is trimmed and
/// lower-cased.
pub fn canonical_weapon_name(raw: &str) -> String {
    for (open, _) in raw.match_indices('(') {
        let rest = &raw[open + 1..];
        let Some(close) = rest.find(')') else {
            break;
        };
        let inner = &rest[..close];
        if inner.is_empty() {
            continue;
        }
        let name = match inner.strip_prefix("as ") {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => inner,
        };
        return name.trim().to_lowercase();
    }
    raw.trim().to_lowercase()
}

/// Weapons keyed by lower-cased name.
#[derive(Debug, Clone, Default)]
pub struct WeaponTable {
    weapons: HashMap<String, WeaponEntry>,
}

impl WeaponTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a weapon. The name is trimmed and lower-cased.
    pub fn insert(&mut self, name: &str, entry: WeaponEntry) {
        self.weapons.insert(name.trim().to_lowercase(), entry);
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: &str, entry: WeaponEntry) -> Self {
        self.insert(name, entry);
        self
    }

    /// Resolve a trained-weapon reference (annotated or not).
    pub fn get(&self, weapon_ref: &str) -> GenResult<&WeaponEntry> {
        let name = canonical_weapon_name(weapon_ref);
        self.weapons
            .get(&name)
            .ok_or(GenError::WeaponNotFound(name))
    }

    /// Damage dice for a trained-weapon reference.
    pub fn damage_for(&self, weapon_ref: &str) -> GenResult<&str> {
        self.get(weapon_ref).map(|w| w.damage.as_str())
    }

    /// Attack modifier for a trained-weapon reference: Strength for melee,
    /// Agility for ranged.
    pub fn attack_modifier_for(&self, weapon_ref: &str, scores: &AbilityScores) -> GenResult<i32> {
        let weapon = self.get(weapon_ref)?;
        Ok(scores.modifier(weapon.reach().attack_ability()))
    }

    /// Number of weapons.
    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> WeaponTable {
        WeaponTable::new()
            .with("Dagger", WeaponEntry::new("1d4", "-"))
            .with("Staff", WeaponEntry::new("1d4", "-"))
            .with("Sling", WeaponEntry::new("1d4", "40/80/160"))
            .with("Short sword", WeaponEntry::new("1d6", "-"))
    }

    #[test]
    fn canonical_name_extraction() {
        assert_eq!(canonical_weapon_name("Club (as Staff)"), "staff");
        assert_eq!(canonical_weapon_name("Dagger"), "dagger");
        assert_eq!(canonical_weapon_name("  Short Sword "), "short sword");
        assert_eq!(canonical_weapon_name("Pitchfork (Spear)"), "spear");
        assert_eq!(canonical_weapon_name("Trowel (as dagger )"), "dagger");
    }

    #[test]
    fn canonical_name_odd_parentheses() {
        assert_eq!(canonical_weapon_name("Cudgel ()"), "cudgel ()");
        assert_eq!(canonical_weapon_name("Knife (x"), "knife (x");
        assert_eq!(canonical_weapon_name("Rock () (Sling)"), "sling");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let t = table();
        assert_eq!(t.damage_for("DAGGER").unwrap(), "1d4");
        assert_eq!(t.damage_for("short SWORD").unwrap(), "1d6");
        assert_eq!(t.damage_for("Club (as Staff)").unwrap(), "1d4");
    }

    #[test]
    fn missing_weapon() {
        let err = table().damage_for("Trident").unwrap_err();
        assert!(matches!(err, GenError::WeaponNotFound(ref n) if n == "trident"));
        assert!(
            table()
                .attack_modifier_for("Club (as Mace)", &AbilityScores::new([10; 6]))
                .is_err()
        );
    }

    #[test]
    fn reach_from_range_column() {
        let t = table();
        assert!(t.get("Dagger").unwrap().is_melee());
        assert_eq!(t.get("Sling").unwrap().reach(), Reach::Ranged);
    }

    #[test]
    fn attack_modifier_by_reach() {
        let t = table();
        // Strength 16 (+2), Agility 5 (-2)
        let scores = AbilityScores::new([16, 5, 10, 10, 10, 10]);
        assert_eq!(t.attack_modifier_for("Dagger", &scores).unwrap(), 2);
        assert_eq!(t.attack_modifier_for("Sling", &scores).unwrap(), -2);
    }
}
