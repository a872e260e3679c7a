//! Display formatting for moves, hands, and scoreboards.

use std::collections::BTreeMap;

use dudo_engine::player::{PlayerId, PlayerMove};

pub fn format_move(mv: &PlayerMove) -> String {
    match mv {
        PlayerMove::Bid(bid) => format!("bid {}", bid),
        PlayerMove::CallBluff => "call bluff".to_string(),
        PlayerMove::CallSpotOn => "call spot on".to_string(),
    }
}

pub fn format_hand(hand: &[u8]) -> String {
    hand.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per player, roster order.
pub fn format_scores(scores: &BTreeMap<PlayerId, u32>) -> String {
    scores
        .iter()
        .map(|(id, score)| format!("  {}: {}", id, score))
        .collect::<Vec<_>>()
        .join("\n")
}
