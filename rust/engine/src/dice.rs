use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// Seeded source of die faces. Every piece of entropy the engine
/// consumes flows through one of these, so a fixed seed replays a
/// whole game move for move.
#[derive(Debug, Clone)]
pub struct DiceRoller {
    rng: ChaCha20Rng,
}

impl DiceRoller {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// One die face, uniform in `1..=6`.
    pub fn roll_die(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }

    /// A fresh hand of `size` independent rolls.
    pub fn roll_hand(&mut self, size: usize) -> Vec<u8> {
        (0..size).map(|_| self.roll_die()).collect()
    }
}
