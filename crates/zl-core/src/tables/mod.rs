//! Lookup tables consulted during generation.
//!
//! Occupations, weapons and birth augurs are supplied by the caller; the
//! equipment table is fixed.

pub mod augur;
pub mod equipment;
pub mod occupation;
pub mod weapon;

pub use augur::{BirthAugurEntry, BirthAugurTable};
pub use equipment::{EQUIPMENT, EquipmentEntry, roll_equipment};
pub use occupation::{Ancestry, OccupationEntry, OccupationTable, RollSpec};
pub use weapon::{Reach, WeaponEntry, WeaponTable, canonical_weapon_name};

/// The three externally supplied tables.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    /// Occupations, searched in order by d100.
    pub occupations: OccupationTable,
    /// Weapons, keyed by lower-cased name.
    pub weapons: WeaponTable,
    /// Birth augurs, keyed by d30.
    pub augurs: BirthAugurTable,
}

impl Tables {
    /// Bundle the three tables.
    pub fn new(
        occupations: OccupationTable,
        weapons: WeaponTable,
        augurs: BirthAugurTable,
    ) -> Self {
        Self {
            occupations,
            weapons,
            augurs,
        }
    }
}
