//! Baseline bot for liar's dice gameplay.
//!
//! Implements a simple expectation-based strategy: bids are grounded
//! in the bot's own hand, raises stay minimal while the standing bid
//! is still plausible, and disputes fire once the bid outruns what
//! the high bidder's hand could reasonably hold.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::BotOpponent;
use dudo_engine::bid::Bid;
use dudo_engine::dice::DIE_FACES;
use dudo_engine::game::GameState;
use dudo_engine::player::{PlayerId, PlayerMove};

/// Rule-based opponent used for interactive play and simulation.
///
/// Disputes are scored against the high bidder's hand alone, so the
/// bot reasons about that hand: roughly one die in six matches any
/// given rank, and bids past one more than that expectation are
/// treated as bluffs. Decisions are deterministic under a fixed seed;
/// the RNG only adds an occasional spot-on gamble.
#[derive(Debug, Clone)]
pub struct BaselineBot {
    rng: StdRng,
}

impl BaselineBot {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Opens a betting round with the bot's strongest truthful claim:
    /// its most frequent face, preferring higher ranks on ties.
    fn opening_bid(hand: &[u8]) -> Bid {
        let mut best_rank = 1u8;
        let mut best_count = 0u8;
        for rank in 1..=DIE_FACES {
            let count = hand.iter().filter(|&&d| d == rank).count() as u8;
            if count >= best_count {
                best_rank = rank;
                best_count = count;
            }
        }
        Bid::new(best_count.max(1), best_rank)
    }

    /// Smallest legal escalation, or None when the standing bid is
    /// already maxed out and a dispute is forced.
    fn minimal_raise(standing: &Bid, max_count: u8) -> Option<Bid> {
        if standing.rank < DIE_FACES {
            Some(Bid::new(standing.count, standing.rank + 1))
        } else if standing.count < max_count {
            Some(Bid::new(standing.count + 1, 1))
        } else {
            None
        }
    }
}

impl BotOpponent for BaselineBot {
    fn choose(&mut self, state: &GameState, me: &PlayerId) -> PlayerMove {
        let my_hand = state.hand(me).unwrap_or(&[]);

        let Some(standing) = state.high_bid else {
            return PlayerMove::Bid(Self::opening_bid(my_hand));
        };

        // hand lengths are public even though faces are hidden
        let bidder_len = state
            .high_bidder
            .as_ref()
            .and_then(|b| state.hand(b))
            .map_or(0, <[u8]>::len) as u8;

        // about one face in six matches; one above that is a stretch,
        // anything further is called out
        let expected = bidder_len.div_ceil(DIE_FACES);
        if standing.count > expected + 1 {
            return PlayerMove::CallBluff;
        }
        if standing.count == expected && self.rng.random_ratio(1, 4) {
            return PlayerMove::CallSpotOn;
        }

        match Self::minimal_raise(&standing, state.config.hand_size) {
            Some(bid) => PlayerMove::Bid(bid),
            None => PlayerMove::CallBluff,
        }
    }

    fn name(&self) -> &str {
        "BaselineBot"
    }
}
