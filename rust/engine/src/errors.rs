use thiserror::Error;

use crate::bid::Bid;
use crate::player::PlayerId;

/// Broad error classes the owning service layer cares about when
/// mapping a failure to a response: an invalid move should re-prompt
/// the same player, a roster fault is fatal to the game instance.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidMove,
    Roster,
    Unimplemented,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid bid count {count}, must be between 1 and {max}")]
    BidCountOutOfRange { count: u8, max: u8 },
    #[error("invalid bid rank {rank}, must be between 1 and 6")]
    BidRankOutOfRange { rank: u8 },
    #[error("bid {attempted} does not beat the standing bid {standing}")]
    BidTooLow { attempted: Bid, standing: Bid },
    #[error("there are no standing bids")]
    NoStandingBid,
    #[error("the game is already over")]
    GameOver,
    #[error("a game needs at least two players, got {0}")]
    NotEnoughPlayers(usize),
    #[error("duplicate player {0} in the roster")]
    DuplicatePlayer(PlayerId),
    #[error("player {0} is not enrolled in this game")]
    NotInRoster(PlayerId),
    #[error("no living players remain")]
    NoLivingPlayers,
    #[error("cannot remove a die from {0}, their hand is already empty")]
    EmptyHand(PlayerId),
    #[error("game feature not implemented: {0}")]
    Unimplemented(&'static str),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::BidCountOutOfRange { .. }
            | GameError::BidRankOutOfRange { .. }
            | GameError::BidTooLow { .. }
            | GameError::NoStandingBid
            | GameError::GameOver => ErrorKind::InvalidMove,
            GameError::NotEnoughPlayers(_)
            | GameError::DuplicatePlayer(_)
            | GameError::NotInRoster(_)
            | GameError::NoLivingPlayers
            | GameError::EmptyHand(_) => ErrorKind::Roster,
            GameError::Unimplemented(_) => ErrorKind::Unimplemented,
        }
    }
}
