//! Sources of die results.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Something that can throw a die.
///
/// Each call consumes one unit of randomness and returns a value in
/// `1..=sides`.
pub trait DiceRoller {
    /// Roll a die with the given number of sides.
    fn roll(&mut self, sides: u32) -> u32;
}

/// Uniform rolls backed by a seedable [`StdRng`].
#[derive(Debug, Clone)]
pub struct RngRoller {
    rng: StdRng,
}

impl RngRoller {
    /// Create a roller whose sequence is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a roller seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl DiceRoller for RngRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides.max(1))
    }
}

/// Replays a fixed sequence of die results.
///
/// Values are clamped into `1..=sides` of the die being rolled. When the
/// script runs out it starts over from the beginning; an empty script
/// always rolls 1. Every requested die size is recorded.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    script: Vec<u32>,
    cursor: usize,
    requested: Vec<u32>,
}

impl ScriptedRoller {
    /// Create a roller that returns `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: values.into_iter().collect(),
            cursor: 0,
            requested: Vec::new(),
        }
    }

    /// Die sizes requested so far, in call order.
    pub fn requested(&self) -> &[u32] {
        &self.requested
    }

    /// How many scripted values have not been consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.cursor)
    }
}

impl DiceRoller for ScriptedRoller {
    fn roll(&mut self, sides: u32) -> u32 {
        self.requested.push(sides);
        if self.script.is_empty() {
            return 1;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value.clamp(1, sides.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_roller_stays_in_range() {
        let mut roller = RngRoller::from_seed(42);
        for _ in 0..500 {
            let value = roller.roll(30);
            assert!((1..=30).contains(&value));
        }
    }

    #[test]
    fn rng_roller_deterministic_with_seed() {
        let mut a = RngRoller::from_seed(99);
        let mut b = RngRoller::from_seed(99);
        for _ in 0..20 {
            assert_eq!(a.roll(100), b.roll(100));
        }
    }

    #[test]
    fn rng_roller_single_sided() {
        let mut roller = RngRoller::from_seed(1);
        assert_eq!(roller.roll(1), 1);
        assert_eq!(roller.roll(0), 1);
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut roller = ScriptedRoller::new([3, 17, 1]);
        assert_eq!(roller.roll(6), 3);
        assert_eq!(roller.roll(20), 17);
        assert_eq!(roller.roll(4), 1);
        assert_eq!(roller.requested(), &[6, 20, 4]);
        assert_eq!(roller.remaining(), 0);
    }

    #[test]
    fn scripted_clamps_to_die() {
        let mut roller = ScriptedRoller::new([9, 0]);
        assert_eq!(roller.roll(6), 6);
        assert_eq!(roller.roll(6), 1);
    }

    #[test]
    fn scripted_wraps_when_exhausted() {
        let mut roller = ScriptedRoller::new([2, 4]);
        assert_eq!(roller.roll(6), 2);
        assert_eq!(roller.roll(6), 4);
        assert_eq!(roller.roll(6), 2);
    }

    #[test]
    fn empty_script_rolls_one() {
        let mut roller = ScriptedRoller::default();
        assert_eq!(roller.roll(100), 1);
        assert_eq!(roller.requested(), &[100]);
    }
}
