//! Fixed starting-equipment table, rolled on a d24.

use serde::Serialize;

use crate::dice::{DiceRoller, Die};

/// A piece of starting equipment and its listed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EquipmentEntry {
    /// Item name.
    pub item: &'static str,
    /// Price, e.g. `"2 gp"`.
    pub cost: &'static str,
}

const fn entry(item: &'static str, cost: &'static str) -> EquipmentEntry {
    EquipmentEntry { item, cost }
}

/// The d24 equipment table; index `n - 1` holds result `n`.
pub const EQUIPMENT: [EquipmentEntry; 24] = [
    entry("Backpack", "2 gp"),
    entry("Candle", "1 cp"),
    entry("Chain 10'", "30 gp"),
    entry("Chalk, 1 piece", "1 cp"),
    entry("Chest, empty", "2 gp"),
    entry("Crowbar", "2 gp"),
    entry("Flask, empty", "3 cp"),
    entry("Flint & steel", "15 cp"),
    entry("Grappling hook", "1 gp"),
    entry("Hammer, small", "5 sp"),
    entry("Book", "25 gp"),
    entry("Ball bearings, 1lb", "1 gp"),
    entry("Bag of caltrops", "5 sp"),
    entry("Lantern", "10 gp"),
    entry("Mirror, hand sized", "10 gp"),
    entry("Oil, 1 flask", "2 sp"),
    entry("Pole 10-ft", "15 cp"),
    entry("Rations, per day", "5 cp"),
    entry("Rope, 50 '", "25 cp"),
    entry("Sack, large", "12 cp"),
    entry("Sack, small", "8 cp"),
    entry("Thieves' tools", "25 gp"),
    entry("Torch, each", "1 cp"),
    entry("Waterskin", "5 sp"),
];

/// Roll d24 for starting equipment.
pub fn roll_equipment(roller: &mut dyn DiceRoller) -> EquipmentEntry {
    let roll = Die::D24.roll(roller).clamp(1, 24);
    tracing::debug!(roll, "equipment roll");
    EQUIPMENT[(roll - 1) as usize]
}
