use crate::errors::GameError;
use crate::player::PlayerId;

/// Picks the player who acts after `current`.
///
/// The roster is treated as circular: starting immediately after
/// `current`'s position and wrapping around, the first id with dice
/// left is next. Eliminated players are skipped entirely. With a
/// single living player the scan wraps all the way around and hands
/// the turn back to them; round-completion detection fires before
/// normal rotation ever sees that case.
pub fn next_active_player(
    roster: &[PlayerId],
    living: &[PlayerId],
    current: &PlayerId,
) -> Result<PlayerId, GameError> {
    if living.is_empty() {
        return Err(GameError::NoLivingPlayers);
    }
    let pos = roster
        .iter()
        .position(|p| p == current)
        .ok_or_else(|| GameError::NotInRoster(current.clone()))?;
    for offset in 1..=roster.len() {
        let candidate = &roster[(pos + offset) % roster.len()];
        if living.contains(candidate) {
            return Ok(candidate.clone());
        }
    }
    // living is non-empty and a subset of the roster, so the scan
    // above cannot fall through
    Err(GameError::NoLivingPlayers)
}
