use std::collections::BTreeMap;

use dudo_engine::bid::Bid;
use dudo_engine::engine::Engine;
use dudo_engine::errors::GameError;
use dudo_engine::game::{GameConfig, GameState};
use dudo_engine::player::PlayerId;

fn fixture(
    hands: &[(&str, Vec<u8>)],
    active: &str,
    high_bid: Option<(Bid, &str)>,
) -> Engine {
    let roster: Vec<PlayerId> = hands.iter().map(|(id, _)| PlayerId::new(*id)).collect();
    let hands_map: BTreeMap<PlayerId, Vec<u8>> = hands
        .iter()
        .map(|(id, h)| (PlayerId::new(*id), h.clone()))
        .collect();
    let scores: BTreeMap<PlayerId, u32> = roster.iter().map(|p| (p.clone(), 0)).collect();
    let state = GameState {
        config: GameConfig {
            hand_size: 5,
            win_score: 2,
        },
        roster,
        active_player: PlayerId::new(active),
        hands: hands_map,
        scores,
        high_bid: high_bid.map(|(b, _)| b),
        high_bidder: high_bid.map(|(_, who)| PlayerId::new(who)),
        log: Vec::new(),
        active: true,
        winner: None,
    };
    Engine::from_state(state, 1)
}

#[test]
fn exact_call_costs_every_other_living_player_a_die() {
    // a holds exactly two 3s; c's spot-on call is correct, so a and
    // b each lose a die while c keeps all of theirs
    let mut engine = fixture(
        &[
            ("a", vec![3, 3, 1, 1, 4]),
            ("b", vec![2, 2, 5, 5, 6]),
            ("c", vec![6, 6, 6, 1, 2]),
        ],
        "c",
        Some((Bid::new(2, 3), "a")),
    );
    engine.call_spot_on().unwrap();

    let state = engine.state();
    assert_eq!(state.hand(&PlayerId::new("a")).unwrap().len(), 4);
    assert_eq!(state.hand(&PlayerId::new("b")).unwrap().len(), 4);
    assert_eq!(state.hand(&PlayerId::new("c")).unwrap().len(), 5);
    assert!(state
        .log
        .iter()
        .any(|l| l.contains("Everyone else loses a die")));
}

#[test]
fn wrong_call_costs_the_caller_a_die() {
    // a holds three 3s, not two; c pays for the wrong call
    let mut engine = fixture(
        &[
            ("a", vec![3, 3, 3, 1, 4]),
            ("b", vec![2, 2, 5, 5, 6]),
            ("c", vec![6, 6, 6, 1, 2]),
        ],
        "c",
        Some((Bid::new(2, 3), "a")),
    );
    engine.call_spot_on().unwrap();

    let state = engine.state();
    assert_eq!(state.hand(&PlayerId::new("a")).unwrap().len(), 5);
    assert_eq!(state.hand(&PlayerId::new("b")).unwrap().len(), 5);
    assert_eq!(state.hand(&PlayerId::new("c")).unwrap().len(), 4);
}

#[test]
fn undershooting_bid_is_also_wrong() {
    // spot on demands equality; one actual 3 against a 2x3 bid is
    // a miss even though the bid was a bluff
    let mut engine = fixture(
        &[("a", vec![3, 1, 1, 1, 4]), ("b", vec![2, 2, 5, 5, 6])],
        "b",
        Some((Bid::new(2, 3), "a")),
    );
    engine.call_spot_on().unwrap();
    assert_eq!(engine.state().hand(&PlayerId::new("b")).unwrap().len(), 4);
}

#[test]
fn correct_call_that_eliminates_the_field_wins_the_round() {
    // a's last die is the exact match; b's correct call empties a's
    // hand, leaving b the only living player
    let mut engine = fixture(
        &[("a", vec![3]), ("b", vec![2, 2, 5, 5, 6])],
        "b",
        Some((Bid::new(1, 3), "a")),
    );
    engine.call_spot_on().unwrap();

    let state = engine.state();
    assert_eq!(state.score(&PlayerId::new("b")), 1);
    // fresh round: everyone back to full hands
    assert_eq!(state.hand(&PlayerId::new("a")).unwrap().len(), 5);
    assert_eq!(state.hand(&PlayerId::new("b")).unwrap().len(), 5);
}

#[test]
fn spot_on_without_standing_bid_is_rejected() {
    let mut engine = fixture(
        &[("a", vec![3, 1, 1, 1, 4]), ("b", vec![2, 2, 5, 5, 6])],
        "b",
        None,
    );
    let before = engine.state().clone();
    assert_eq!(engine.call_spot_on().unwrap_err(), GameError::NoStandingBid);
    assert_eq!(engine.state(), &before);
}

#[test]
fn eliminated_players_do_not_lose_further_dice() {
    // b is already out for the round; a correct spot-on only costs
    // the living non-callers
    let mut engine = fixture(
        &[
            ("a", vec![3, 3, 1, 1, 4]),
            ("b", vec![]),
            ("c", vec![6, 6, 6, 1, 2]),
        ],
        "c",
        Some((Bid::new(2, 3), "a")),
    );
    engine.call_spot_on().unwrap();

    let state = engine.state();
    assert_eq!(state.hand(&PlayerId::new("a")).unwrap().len(), 4);
    assert!(state.hand(&PlayerId::new("b")).unwrap().is_empty());
    assert_eq!(state.hand(&PlayerId::new("c")).unwrap().len(), 5);
}
