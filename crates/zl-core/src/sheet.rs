//! The finished character sheet and its text layout.

use std::fmt;

use serde::Serialize;

use crate::ability::{AbilityScores, format_modifier};
use crate::tables::EquipmentEntry;

/// Derived combat numbers. Mutable while the augur bonus is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombatStats {
    /// Armor class.
    pub ac: i32,
    /// Hit points, at least 1.
    pub hp: i32,
    /// Speed in feet.
    pub speed: i32,
    /// Initiative modifier.
    pub init: i32,
    /// Reflex save.
    pub reflex: i32,
    /// Fortitude save.
    pub fortitude: i32,
    /// Will save.
    pub will: i32,
    /// Trained weapon attack modifier.
    pub attack: i32,
    /// Trained weapon damage dice, possibly with a luck suffix.
    pub damage: String,
}

/// The birth augur as printed on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LuckySign {
    /// d30 result.
    pub key: u32,
    /// Omen name.
    pub name: String,
    /// What the bonus applies to.
    pub lucky_roll: String,
    /// Luck modifier.
    pub modifier: i32,
}

/// A finished 0-level character.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterSheet {
    /// Occupation name.
    pub occupation: String,
    /// Rolled ability scores.
    pub abilities: AbilityScores,
    /// Trained weapon as written in the occupation table.
    pub weapon: String,
    /// Derived combat numbers.
    pub combat: CombatStats,
    /// Starting equipment.
    pub equipment: EquipmentEntry,
    /// Trade good from the occupation.
    pub trade_good: String,
    /// Starting funds in copper pieces.
    pub starting_funds: u32,
    /// Birth augur.
    pub lucky_sign: LuckySign,
    /// Spoken languages, Trade Common first.
    pub languages: Vec<String>,
}

impl fmt::Display for CharacterSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.combat;
        writeln!(f, "0-level Occupation: {}", self.occupation)?;
        for (ability, score) in self.abilities.iter() {
            let modifier = format_modifier(self.abilities.modifier(ability));
            writeln!(f, "{ability}: {score} ({modifier})")?;
        }
        writeln!(f)?;
        writeln!(f, "AC: {}; HP: {}", c.ac, c.hp)?;
        writeln!(
            f,
            "Weapon: {} {} ({})",
            self.weapon,
            format_modifier(c.attack),
            c.damage
        )?;
        writeln!(
            f,
            "Speed: {}; Init: {}; Ref: {}; Fort: {}; Will: {}",
            c.speed, c.init, c.reflex, c.fortitude, c.will
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Equipment: {} ({})",
            self.equipment.item, self.equipment.cost
        )?;
        writeln!(f, "Trade good: {}", self.trade_good)?;
        writeln!(f, "Starting Funds: {} cp", self.starting_funds)?;
        writeln!(
            f,
            "Lucky sign: {} ({}) ({})",
            self.lucky_sign.name,
            self.lucky_sign.lucky_roll,
            format_modifier(self.lucky_sign.modifier)
        )?;
        writeln!(f, "Languages: {}", self.languages.join(", "))
    }
}

/// Render several sheets separated by blank lines.
pub fn render_batch(sheets: &[CharacterSheet]) -> String {
    sheets
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
