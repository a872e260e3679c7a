//! Input parsing for interactive play.
//!
//! Turns what the user typed at the prompt into a [`PlayerMove`], a
//! quit request, or an error message worth echoing back.

use dudo_engine::bid::Bid;
use dudo_engine::player::PlayerMove;

/// Result of parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player move parsed from input
    Move(PlayerMove),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into a [`PlayerMove`] or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "bid CxR" or bare "CxR" (e.g. "bid 2x3", "2x3")
/// - "bluff" or "b" to call a bluff
/// - "spoton", "spot-on" or "s" to call spot on
/// - "q" or "quit" to leave the game
///
/// # Example
///
/// ```rust
/// # use dudo_cli::validation::{parse_player_move, ParseResult};
/// use dudo_engine::bid::Bid;
/// use dudo_engine::player::PlayerMove;
///
/// assert_eq!(
///     parse_player_move("bid 2x3"),
///     ParseResult::Move(PlayerMove::Bid(Bid::new(2, 3)))
/// );
/// assert_eq!(parse_player_move("bluff"), ParseResult::Move(PlayerMove::CallBluff));
/// assert_eq!(parse_player_move("q"), ParseResult::Quit);
/// ```
pub fn parse_player_move(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    if parts.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }

    if parts[0] == "q" || parts[0] == "quit" {
        return ParseResult::Quit;
    }

    match parts[0] {
        "bluff" | "b" => ParseResult::Move(PlayerMove::CallBluff),
        "spoton" | "spot-on" | "s" => ParseResult::Move(PlayerMove::CallSpotOn),
        "bid" => {
            if parts.len() < 2 {
                return ParseResult::Invalid(
                    "Bid requires count and rank (e.g. 'bid 2x3')".to_string(),
                );
            }
            parse_bid(parts[1])
        }
        // a bare "2x3" reads naturally enough to accept
        spec if spec.contains('x') => parse_bid(spec),
        _ => ParseResult::Invalid(format!(
            "Unrecognized move '{}'. Valid moves: bid <count>x<rank>, bluff, spoton, q",
            parts[0]
        )),
    }
}

fn parse_bid(spec: &str) -> ParseResult {
    let Some((count, rank)) = spec.split_once('x') else {
        return ParseResult::Invalid(format!(
            "Bid '{}' must look like <count>x<rank>, e.g. 2x3",
            spec
        ));
    };
    match (count.parse::<u8>(), rank.parse::<u8>()) {
        (Ok(count), Ok(rank)) => ParseResult::Move(PlayerMove::Bid(Bid::new(count, rank))),
        _ => ParseResult::Invalid(format!(
            "Bid '{}' must use numeric count and rank, e.g. 2x3",
            spec
        )),
    }
}
