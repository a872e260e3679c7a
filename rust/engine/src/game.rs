use std::collections::BTreeMap;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::bid::Bid;
use crate::player::PlayerId;

/// Dice per player at game start and after each round reset.
pub const STARTING_HAND_SIZE: u8 = 5;

/// Round wins needed to take the game.
pub const DEFAULT_WIN_SCORE: u32 = 5;

/// Tunable rule constants. The win threshold varied over the game's
/// history, so it is a knob rather than a fixed rule.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub hand_size: u8,
    pub win_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hand_size: STARTING_HAND_SIZE,
            win_score: DEFAULT_WIN_SCORE,
        }
    }
}

/// Snapshot of one game: participants, hands, scores, the standing
/// bid, and the full audit log.
///
/// Fields are public so the owning service layer can persist and
/// inspect the snapshot; all rule-preserving mutation goes through
/// [`crate::engine::Engine`], which keeps the invariants (sorted
/// fixed roster, living active player, append-only log, both or
/// neither of `high_bid`/`high_bidder` set).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Rule constants this game was created with
    pub config: GameConfig,
    /// All participants, sorted at creation and never mutated after
    pub roster: Vec<PlayerId>,
    /// The player whose turn it is
    pub active_player: PlayerId,
    /// Remaining dice per player; an empty hand means eliminated
    /// for the round
    pub hands: BTreeMap<PlayerId, Vec<u8>>,
    /// Round wins per player, monotonically non-decreasing
    pub scores: BTreeMap<PlayerId, u32>,
    /// The most aggressive bid of the current betting round
    pub high_bid: Option<Bid>,
    /// Who placed `high_bid`; set and cleared together with it
    pub high_bidder: Option<PlayerId>,
    /// Append-only audit trail of every state transition
    pub log: Vec<String>,
    /// False once a player reaches the win score; terminal states
    /// accept no further moves
    pub active: bool,
    /// Set exactly when `active` flips to false
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Roster members that still hold at least one die, in roster
    /// (rotation) order.
    pub fn living_players(&self) -> Vec<PlayerId> {
        self.roster
            .iter()
            .filter(|p| self.is_living(p))
            .cloned()
            .collect()
    }

    pub fn is_living(&self, id: &PlayerId) -> bool {
        self.hands.get(id).is_some_and(|h| !h.is_empty())
    }

    pub fn hand(&self, id: &PlayerId) -> Option<&[u8]> {
        self.hands.get(id).map(Vec::as_slice)
    }

    pub fn score(&self, id: &PlayerId) -> u32 {
        self.scores.get(id).copied().unwrap_or(0)
    }

    /// Total dice still in play across all hands.
    pub fn total_dice(&self) -> usize {
        self.hands.values().map(Vec::len).sum()
    }

    /// Rounds resolved so far (every round ends in exactly one point).
    pub fn rounds_played(&self) -> u32 {
        self.scores.values().sum()
    }

    pub(crate) fn log_entry(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    /// Like [`GameState::log_entry`] but prefixed with an RFC3339
    /// timestamp; used for the entry that opens a player action.
    pub(crate) fn log_entry_stamped(&mut self, message: impl Into<String>) {
        let ts = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        self.log.push(format!("[{}] {}", ts, message.into()));
    }
}
