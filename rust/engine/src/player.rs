use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bid::Bid;

/// Opaque, stable identifier for a game participant.
///
/// Ids are ordered so the roster can be sorted once at game creation;
/// that sort is the only thing that fixes turn order. Resolving an id
/// to a display string is the owning service's job; the engine only
/// ever echoes ids (or a caller-supplied name map) into the log.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PlayerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The moves available to the active player on their turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerMove {
    /// Escalate (or open) the standing bid
    Bid(Bid),
    /// Assert the standing bid overstates the bidder's hand
    CallBluff,
    /// Assert the standing bid matches the bidder's hand exactly
    CallSpotOn,
}
