//! Bot opponents for liar's dice.
//!
//! Provides automated players for interactive games and large-scale
//! simulation. Bots only ever see public information plus their own
//! hand; other hands stay hidden, exactly as for a human player.

pub mod baseline;

use dudo_engine::game::GameState;
use dudo_engine::player::{PlayerId, PlayerMove};

/// An automated opponent. Implementations must return a move that is
/// legal in the given state (the engine will reject anything else and
/// the caller treats that as a bot defect).
pub trait BotOpponent {
    /// Pick the next move for `me`. Only `me`'s own hand and the
    /// public state may inform the choice.
    fn choose(&mut self, state: &GameState, me: &PlayerId) -> PlayerMove;

    fn name(&self) -> &str;
}

/// Creates a bot by kind name. Unknown kinds fall back to the
/// baseline implementation.
pub fn create_bot(kind: &str, seed: u64) -> Box<dyn BotOpponent> {
    match kind {
        "baseline" => Box::new(baseline::BaselineBot::new_with_seed(seed)),
        _ => Box::new(baseline::BaselineBot::new_with_seed(seed)),
    }
}
