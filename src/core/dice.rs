//! Dice rollers for the driver boundary
//!
//! The rules core is deterministic: every function takes already-resolved roll
//! values. Rollers live here so drivers and tests can share them.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of d6 rolls
pub trait DiceRoller {
    /// Roll a single d6 (1..=6)
    fn d6(&mut self) -> u8;

    /// Roll 2d6 (2..=12)
    fn roll_2d6(&mut self) -> u8 {
        self.d6() + self.d6()
    }
}

/// Seeded roller for reproducible games
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DiceRoller for SeededDice {
    fn d6(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}

/// Scripted roller that replays a fixed sequence (wraps around at the end)
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    pub fn new(rolls: Vec<u8>) -> Self {
        assert!(!rolls.is_empty(), "scripted dice need at least one roll");
        Self { rolls, cursor: 0 }
    }
}

impl DiceRoller for ScriptedDice {
    fn d6(&mut self) -> u8 {
        let roll = self.rolls[self.cursor % self.rolls.len()];
        self.cursor += 1;
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_dice_reproducible() {
        let mut a = SeededDice::new(42);
        let mut b = SeededDice::new(42);
        for _ in 0..20 {
            assert_eq!(a.d6(), b.d6());
        }
    }

    #[test]
    fn test_seeded_dice_in_range() {
        let mut dice = SeededDice::new(7);
        for _ in 0..100 {
            let roll = dice.roll_2d6();
            assert!((2..=12).contains(&roll));
        }
    }

    #[test]
    fn test_scripted_dice_replays() {
        let mut dice = ScriptedDice::new(vec![3, 4]);
        assert_eq!(dice.roll_2d6(), 7);
        assert_eq!(dice.d6(), 3); // Wrapped
    }
}
