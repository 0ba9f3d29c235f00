//! Zero-level character generation.
//!
//! Rolls ability scores, draws an occupation, starting equipment and a
//! birth augur from lookup tables, resolves the trained weapon, applies the
//! augur's luck bonus and assembles a printable character sheet. All
//! randomness goes through the [`DiceRoller`] capability so a batch can be
//! replayed from a seed or a scripted sequence.

pub mod ability;
pub mod dice;
pub mod error;
pub mod generator;
pub mod luck;
pub mod sheet;
pub mod tables;

pub use ability::{Ability, AbilityScores, format_modifier, modifier_for};
pub use dice::{DiceRoller, Die, RngRoller, ScriptedRoller};
pub use error::{GenError, GenResult};
pub use generator::Generator;
pub use luck::LuckEffect;
pub use sheet::{CharacterSheet, CombatStats, LuckySign, render_batch};
pub use tables::{
    BirthAugurEntry, BirthAugurTable, EquipmentEntry, OccupationEntry, OccupationTable, Reach,
    RollSpec, Tables, WeaponEntry, WeaponTable,
};
