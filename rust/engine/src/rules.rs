use crate::bid::Bid;
use crate::dice::DIE_FACES;
use crate::errors::GameError;
use crate::game::GameConfig;

/// Validates a proposed bid against the rule constants and the
/// standing high bid.
///
/// With no standing bid, any physically possible bid opens the
/// betting round. Otherwise the proposal must strictly escalate:
/// a higher count, or the same count with a higher rank. Equal or
/// lower bids are rejected.
///
/// # Errors
///
/// Returns [`GameError`] in the following cases:
/// - [`GameError::BidCountOutOfRange`] - count outside `1..=hand_size`
/// - [`GameError::BidRankOutOfRange`] - rank outside `1..=6`
/// - [`GameError::BidTooLow`] - proposal does not beat the standing bid
///
/// # Examples
///
/// ```
/// use dudo_engine::bid::Bid;
/// use dudo_engine::game::GameConfig;
/// use dudo_engine::rules::validate_bid;
///
/// let config = GameConfig::default();
/// let standing = Bid::new(2, 3);
///
/// assert!(validate_bid(&config, None, &standing).is_ok());
/// assert!(validate_bid(&config, Some(&standing), &Bid::new(2, 4)).is_ok());
/// assert!(validate_bid(&config, Some(&standing), &Bid::new(2, 2)).is_err());
/// ```
pub fn validate_bid(
    config: &GameConfig,
    standing: Option<&Bid>,
    proposed: &Bid,
) -> Result<(), GameError> {
    if proposed.count < 1 || proposed.count > config.hand_size {
        return Err(GameError::BidCountOutOfRange {
            count: proposed.count,
            max: config.hand_size,
        });
    }
    if proposed.rank < 1 || proposed.rank > DIE_FACES {
        return Err(GameError::BidRankOutOfRange {
            rank: proposed.rank,
        });
    }
    match standing {
        None => Ok(()),
        Some(old) if proposed.beats(old) => Ok(()),
        Some(old) => Err(GameError::BidTooLow {
            attempted: *proposed,
            standing: *old,
        }),
    }
}
