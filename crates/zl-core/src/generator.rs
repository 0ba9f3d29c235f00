//! Character assembly.
//!
//! Rolls happen in a fixed order so that a seed or a scripted roller
//! reproduces the same sheet:
//!
//! 1. 3d6 for each ability, Strength to Luck
//! 2. d100 occupation
//! 3. d24 equipment, then 5d12 starting funds
//! 4. d4 hit points
//! 5. d30 birth augur

use tracing::{debug, info};

use crate::ability::{Ability, AbilityScores};
use crate::dice::{DiceRoller, Die, roll_starting_funds};
use crate::error::GenResult;
use crate::luck::apply_luck;
use crate::sheet::{CharacterSheet, CombatStats, LuckySign};
use crate::tables::{Ancestry, OccupationEntry, Tables, roll_equipment};

/// Base speed in feet.
pub const BASE_SPEED: i32 = 30;
/// Speed for goblins.
pub const GOBLIN_SPEED: i32 = 20;
/// Armor class before the Agility modifier.
pub const BASE_AC: i32 = 10;
/// Language every character speaks.
pub const COMMON_TONGUE: &str = "Trade Common";

/// Generates characters from a borrowed set of tables.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    tables: &'a Tables,
}

impl<'a> Generator<'a> {
    /// Create a generator over `tables`.
    pub fn new(tables: &'a Tables) -> Self {
        Self { tables }
    }

    /// Generate one character. Nothing is returned unless every lookup
    /// succeeds.
    pub fn generate(&self, roller: &mut dyn DiceRoller) -> GenResult<CharacterSheet> {
        let abilities = AbilityScores::roll(roller);
        debug!(?abilities, "rolled abilities");

        let occupation = self.tables.occupations.roll(roller)?;
        let equipment = roll_equipment(roller);
        let starting_funds = roll_starting_funds(roller);

        let weapon = self.tables.weapons.get(&occupation.trained_weapon)?;
        let reach = weapon.reach();
        let attack = self
            .tables
            .weapons
            .attack_modifier_for(&occupation.trained_weapon, &abilities)?;

        let hp_roll = Die::D4.roll(roller);
        let mut combat = derive_combat(
            &abilities,
            occupation,
            hp_roll,
            attack,
            weapon.damage.clone(),
        );

        let augur = self.tables.augurs.roll(roller)?;
        let luck = abilities.modifier(Ability::Luck);
        let effect = apply_luck(&mut combat, augur.key, reach, luck);
        debug!(augur = augur.key, luck, ?effect, "applied birth augur");

        let sheet = CharacterSheet {
            occupation: occupation.name.clone(),
            abilities,
            weapon: occupation.trained_weapon.clone(),
            combat,
            equipment,
            trade_good: occupation.trade_good.clone(),
            starting_funds,
            lucky_sign: LuckySign {
                key: augur.key,
                name: augur.name.clone(),
                lucky_roll: augur.lucky_roll.clone(),
                modifier: luck,
            },
            languages: languages_for(occupation),
        };
        info!(occupation = %sheet.occupation, "generated character");
        Ok(sheet)
    }

    /// Generate `count` characters, stopping at the first failure.
    pub fn generate_batch(
        &self,
        count: usize,
        roller: &mut dyn DiceRoller,
    ) -> GenResult<Vec<CharacterSheet>> {
        (0..count).map(|_| self.generate(roller)).collect()
    }
}

/// Combat numbers before the augur bonus.
fn derive_combat(
    abilities: &AbilityScores,
    occupation: &OccupationEntry,
    hp_roll: u32,
    attack: i32,
    damage: String,
) -> CombatStats {
    let agility = abilities.modifier(Ability::Agility);
    let stamina = abilities.modifier(Ability::Stamina);
    let speed = match occupation.ancestry() {
        Some(Ancestry::Goblin) => GOBLIN_SPEED,
        _ => BASE_SPEED,
    };
    CombatStats {
        ac: BASE_AC + agility,
        hp: (hp_roll as i32 + stamina).max(1),
        speed,
        init: agility,
        reflex: agility,
        fortitude: stamina,
        will: abilities.modifier(Ability::Personality),
        attack,
        damage,
    }
}

/// Trade Common plus at most one ancestral tongue.
fn languages_for(occupation: &OccupationEntry) -> Vec<String> {
    std::iter::once(COMMON_TONGUE)
        .chain(occupation.ancestry().map(Ancestry::language))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RngRoller, ScriptedRoller};
    use crate::error::GenError;
    use crate::tables::{
        BirthAugurEntry, BirthAugurTable, OccupationTable, RollSpec, WeaponEntry, WeaponTable,
    };

    fn occupation(roll: &str, name: &str, weapon: &str, good: &str) -> OccupationEntry {
        OccupationEntry::new(RollSpec::parse(roll).unwrap(), name, weapon, good)
    }

    fn augurs() -> BirthAugurTable {
        let named = [
            (1, "Harsh winter", "All attack rolls"),
            (2, "The bull", "Melee attack rolls"),
            (3, "Fortunate date", "Missile fire attack rolls"),
            (6, "Born on the battlefield", "Damage rolls"),
            (7, "Path of the bear", "Melee damage rolls"),
            (8, "Hawkeye", "Missile fire damage rolls"),
            (9, "Pack hunter", "Attack and damage rolls for 0-level starting weapon"),
            (17, "Lucky sign", "Saving throws"),
            (20, "Struck by lightning", "Reflex saving throws"),
            (21, "Lived through famine", "Fortitude saving throws"),
            (22, "Resisted temptation", "Willpower saving throws"),
            (23, "Charmed house", "Armor Class"),
            (24, "Speed of the cobra", "Initiative"),
            (25, "Bountiful harvest", "Hit points"),
            (30, "Wild child", "Speed"),
        ];
        (1..=30)
            .map(|key| match named.iter().find(|(k, _, _)| *k == key) {
                Some((k, name, roll)) => BirthAugurEntry::new(*k, *name, *roll),
                None => BirthAugurEntry::new(key, format!("Omen {key}"), "Nothing special"),
            })
            .collect()
    }

    fn tables_with(occupations: Vec<OccupationEntry>) -> Tables {
        let weapons = WeaponTable::new()
            .with("Dagger", WeaponEntry::new("1d4", "-"))
            .with("Club", WeaponEntry::new("1d4", "-"))
            .with("Sling", WeaponEntry::new("1d4", "40/80/160"));
        Tables::new(OccupationTable::new(occupations), weapons, augurs())
    }

    fn tables() -> Tables {
        tables_with(vec![
            occupation("1-25", "Gongfarmer", "Trowel (as Dagger)", "Sack of night soil"),
            occupation("26-56", "Goblin Trapper", "Sling", "Badger pelt"),
            occupation("57", "Siren Singer", "Dagger", "Conch shell"),
            occupation("58-100", "Orc Smith", "Hammer (as Club)", "Steel tongs"),
        ])
    }

    /// Dice for one character; the occupation, hit point and augur rolls
    /// are parameters, everything else is fixed.
    fn script(abilities: [[u32; 3]; 6], occupation: u32, hp: u32, augur: u32) -> Vec<u32> {
        let mut dice: Vec<u32> = abilities.into_iter().flatten().collect();
        dice.push(occupation);
        dice.push(14); // equipment: Lantern
        dice.extend([12, 1, 7, 3, 9]); // funds: 32
        dice.push(hp);
        dice.push(augur);
        dice
    }

    const ABILITIES: [[u32; 3]; 6] = [
        [6, 6, 4], // Strength 16
        [3, 4, 5], // Agility 12
        [2, 2, 3], // Stamina 7
        [5, 5, 3], // Personality 13
        [1, 2, 1], // Intelligence 4
        [6, 6, 6], // Luck 18
    ];

    #[test]
    fn scripted_character_sheet() {
        let tables = tables();
        let mut roller = ScriptedRoller::new(script(ABILITIES, 30, 3, 8));
        let sheet = Generator::new(&tables).generate(&mut roller).unwrap();

        let expected = "\
0-level Occupation: Goblin Trapper
Strength: 16 (+2)
Agility: 12 (+0)
Stamina: 7 (-1)
Personality: 13 (+1)
Intelligence: 4 (-2)
Luck: 18 (+3)

AC: 10; HP: 2
Weapon: Sling +0 (1d4+3)
Speed: 20; Init: 0; Ref: 0; Fort: -1; Will: 1

Equipment: Lantern (10 gp)
Trade good: Badger pelt
Starting Funds: 32 cp
Lucky sign: Hawkeye (Missile fire damage rolls) (+3)
Languages: Trade Common, Goblin
";
        assert_eq!(sheet.to_string(), expected);
        assert_eq!(roller.remaining(), 0);
    }

    #[test]
    fn roll_order() {
        let tables = tables();
        let mut roller = ScriptedRoller::new(script(ABILITIES, 30, 3, 8));
        Generator::new(&tables).generate(&mut roller).unwrap();

        let mut expected = vec![6; 18];
        expected.extend([100, 24, 12, 12, 12, 12, 12, 4, 30]);
        assert_eq!(roller.requested(), expected.as_slice());
    }

    #[test]
    fn melee_weapon_uses_strength_and_annotation_is_kept() {
        let tables = tables();
        // Orc Smith with a hammer wielded as a club; augur 1 adds luck to attack
        let mut roller = ScriptedRoller::new(script(ABILITIES, 80, 4, 1));
        let sheet = Generator::new(&tables).generate(&mut roller).unwrap();
        assert_eq!(sheet.weapon, "Hammer (as Club)");
        assert_eq!(sheet.combat.attack, 5);
        assert_eq!(sheet.combat.damage, "1d4");
        assert_eq!(sheet.combat.speed, 30);
        assert_eq!(sheet.combat.hp, 3);
        assert_eq!(sheet.languages, ["Trade Common", "Orc"]);
        assert!(sheet.to_string().contains("Weapon: Hammer (as Club) +5 (1d4)\n"));
    }

    #[test]
    fn hit_points_clamped_to_one() {
        let tables = tables();
        // Stamina 3 (-3) and a d4 of 1
        let mut abilities = ABILITIES;
        abilities[2] = [1, 1, 1];
        let mut roller = ScriptedRoller::new(script(abilities, 10, 1, 13));
        let sheet = Generator::new(&tables).generate(&mut roller).unwrap();
        assert_eq!(sheet.combat.hp, 1);
        assert_eq!(sheet.combat.fortitude, -3);
        assert_eq!(sheet.languages, ["Trade Common"]);
    }

    #[test]
    fn zero_luck_leaves_stats_alone() {
        let tables = tables();
        let mut abilities = ABILITIES;
        abilities[5] = [3, 3, 4]; // Luck 10
        let mut roller = ScriptedRoller::new(script(abilities, 57, 2, 30));
        let sheet = Generator::new(&tables).generate(&mut roller).unwrap();
        assert_eq!(sheet.lucky_sign.modifier, 0);
        assert_eq!(sheet.combat.speed, 30);
        assert_eq!(sheet.languages, ["Trade Common", "Siren"]);
        assert!(sheet.to_string().contains("Lucky sign: Wild child (Speed) (+0)\n"));
    }

    #[test]
    fn missing_occupation_roll_fails() {
        let tables = tables_with(vec![
            occupation("1-56", "Farmer", "Dagger", "Hen"),
            occupation("58-100", "Miller", "Club", "Flour"),
        ]);
        let mut roller = ScriptedRoller::new(script(ABILITIES, 57, 2, 1));
        let err = Generator::new(&tables).generate(&mut roller).unwrap_err();
        assert!(matches!(
            err,
            GenError::LookupExhausted {
                table: "occupation",
                roll: 57
            }
        ));
    }

    #[test]
    fn unknown_weapon_fails() {
        let tables = tables_with(vec![occupation("1-100", "Jester", "Dart", "Motley")]);
        let mut roller = ScriptedRoller::new(script(ABILITIES, 5, 2, 1));
        let err = Generator::new(&tables).generate(&mut roller).unwrap_err();
        assert!(matches!(err, GenError::WeaponNotFound(ref w) if w == "dart"));
    }

    #[test]
    fn batch_stops_at_first_failure() {
        let tables = tables_with(vec![occupation("1-50", "Farmer", "Dagger", "Hen")]);
        let mut first = script(ABILITIES, 10, 2, 1);
        first.extend(script(ABILITIES, 90, 2, 1));
        let mut roller = ScriptedRoller::new(first);
        let result = Generator::new(&tables).generate_batch(2, &mut roller);
        assert!(matches!(
            result,
            Err(GenError::LookupExhausted { roll: 90, .. })
        ));
    }

    #[test]
    fn seeded_batches_repeat() {
        let tables = tables();
        let generator = Generator::new(&tables);
        let a = generator
            .generate_batch(4, &mut RngRoller::from_seed(7))
            .unwrap();
        let b = generator
            .generate_batch(4, &mut RngRoller::from_seed(7))
            .unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(
            crate::sheet::render_batch(&a),
            crate::sheet::render_batch(&b)
        );
        for sheet in &a {
            assert!(sheet.combat.hp >= 1);
            assert!((5..=60).contains(&sheet.starting_funds));
        }
    }
}
