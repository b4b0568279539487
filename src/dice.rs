//! Dice model: four tetrahedral dice, each a fair coin.
//!
//! The roll is the number of marked corners facing up across four
//! independent binary dice, so results follow Binomial(4, 0.5) over 0..=4
//! with weights 1/16, 4/16, 6/16, 4/16, 1/16. This is the historical
//! mechanic; it is not a uniform d5.

use rand::Rng;

/// Highest possible roll.
pub const MAX_ROLL: u8 = 4;

/// Rolls the four binary dice and returns the number of successes.
pub fn roll(rng: &mut impl Rng) -> u8 {
    (0..MAX_ROLL).filter(|_| rng.gen_bool(0.5)).count() as u8
}
