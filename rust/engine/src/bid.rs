use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's (possibly fraudulent) assertion that at least `count`
/// dice in play show the face `rank`. Immutable once constructed.
///
/// The legal domain is `count` in `1..=hand_size` and `rank` in
/// `1..=6`; range checks live in [`crate::rules::validate_bid`] so
/// that out-of-range proposals surface as game errors rather than
/// being unrepresentable.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Bid {
    pub count: u8,
    pub rank: u8,
}

impl Bid {
    pub fn new(count: u8, rank: u8) -> Self {
        Self { count, rank }
    }

    /// Strict lexicographic escalation on (count, rank): a higher
    /// count always wins, the same count needs a higher rank.
    pub fn beats(&self, other: &Bid) -> bool {
        self.count > other.count || (self.count == other.count && self.rank > other.rank)
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.count, self.rank)
    }
}
