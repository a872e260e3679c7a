//! Random number generator verification command.
//!
//! Generates a short sample from the ChaCha20 generator the dice
//! roller is built on, so determinism can be checked from the shell:
//! the same seed must print the same sample on every platform.

use crate::error::CliError;
use dudo_engine::dice::DiceRoller;
use rand::{RngCore, SeedableRng};
use std::io::Write;

/// Handle the rng command.
///
/// Prints five `u64` samples from a ChaCha20 RNG seeded with `seed`
/// (or a random seed if none is given), then a face histogram over
/// 600 rolls of the engine's dice roller under the same seed.
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let mut vals = vec![];
    for _ in 0..5 {
        vals.push(rng.next_u64());
    }
    writeln!(out, "RNG sample (seed {}): {:?}", s, vals)?;

    let mut roller = DiceRoller::new_with_seed(s);
    let mut histogram = [0u32; 6];
    for face in roller.roll_hand(600) {
        histogram[(face - 1) as usize] += 1;
    }
    writeln!(out, "Face histogram over 600 rolls:")?;
    for (i, count) in histogram.iter().enumerate() {
        writeln!(out, "  {}: {}", i + 1, count)?;
    }
    Ok(())
}
