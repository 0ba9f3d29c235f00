//! Birth augur luck bonuses.
//!
//! Each augur key names at most one target for the Luck modifier. The
//! mapping lives in [`LUCK_EFFECTS`]; keys missing from it grant nothing.

use serde::Serialize;

use crate::sheet::CombatStats;
use crate::tables::Reach;

/// What the Luck modifier is added to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LuckEffect {
    /// Weapon attack modifier; `Some(reach)` limits it to that kind of weapon.
    Attack(Option<Reach>),
    /// Weapon damage suffix; `Some(reach)` limits it to that kind of weapon.
    Damage(Option<Reach>),
    /// Both the damage suffix and the attack modifier.
    AttackAndDamage,
    /// Reflex, fortitude and will together.
    AllSaves,
    /// Reflex save.
    Reflex,
    /// Fortitude save.
    Fortitude,
    /// Will save.
    Will,
    /// Armor class.
    ArmorClass,
    /// Initiative.
    Initiative,
    /// Hit points, never below 1.
    HitPoints,
    /// Speed, five feet per point.
    Speed,
}

/// Augur key to luck effect.
pub const LUCK_EFFECTS: &[(u32, LuckEffect)] = &[
    (1, LuckEffect::Attack(None)),
    (2, LuckEffect::Attack(Some(Reach::Melee))),
    (3, LuckEffect::Attack(Some(Reach::Ranged))),
    (6, LuckEffect::Damage(None)),
    (7, LuckEffect::Damage(Some(Reach::Melee))),
    (8, LuckEffect::Damage(Some(Reach::Ranged))),
    (9, LuckEffect::AttackAndDamage),
    (17, LuckEffect::AllSaves),
    (20, LuckEffect::Reflex),
    (21, LuckEffect::Fortitude),
    (22, LuckEffect::Will),
    (23, LuckEffect::ArmorClass),
    (24, LuckEffect::Initiative),
    (25, LuckEffect::HitPoints),
    (30, LuckEffect::Speed),
];

impl LuckEffect {
    /// The effect granted by an augur key, if any.
    pub fn for_augur(key: u32) -> Option<Self> {
        LUCK_EFFECTS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, effect)| *effect)
    }

    /// Apply `luck` to `stats`. `reach` is the trained weapon's reach and
    /// only matters for the reach-limited weapon effects.
    ///
    /// Returns false when the effect did not apply to this weapon.
    pub fn apply(self, stats: &mut CombatStats, reach: Reach, luck: i32) -> bool {
        let allowed = |only: Option<Reach>| only.is_none_or(|r| r == reach);
        match self {
            Self::Attack(only) => {
                if !allowed(only) {
                    return false;
                }
                stats.attack += luck;
            }
            Self::Damage(only) => {
                if !allowed(only) {
                    return false;
                }
                stats.damage.push_str(&damage_suffix(luck));
            }
            Self::AttackAndDamage => {
                stats.damage.push_str(&damage_suffix(luck));
                stats.attack += luck;
            }
            Self::AllSaves => {
                stats.reflex += luck;
                stats.fortitude += luck;
                stats.will += luck;
            }
            Self::Reflex => stats.reflex += luck,
            Self::Fortitude => stats.fortitude += luck,
            Self::Will => stats.will += luck,
            Self::ArmorClass => stats.ac += luck,
            Self::Initiative => stats.init += luck,
            Self::HitPoints => stats.hp = (stats.hp + luck).max(1),
            Self::Speed => stats.speed += luck * 5,
        }
        true
    }
}

/// Apply the augur's luck bonus, if it has one and `luck` is non-zero.
///
/// Returns the effect that changed `stats`.
pub fn apply_luck(
    stats: &mut CombatStats,
    augur_key: u32,
    reach: Reach,
    luck: i32,
) -> Option<LuckEffect> {
    if luck == 0 {
        return None;
    }
    let effect = LuckEffect::for_augur(augur_key)?;
    effect.apply(stats, reach, luck).then_some(effect)
}

/// Suffix appended to damage dice: `+3` or `-2`.
pub fn damage_suffix(luck: i32) -> String {
    if luck > 0 {
        format!("+{luck}")
    } else {
        luck.to_string()
    }
}
