use dudo_engine::errors::GameError;
use dudo_engine::player::PlayerId;
use dudo_engine::roster::next_active_player;

fn ids(names: &[&str]) -> Vec<PlayerId> {
    names.iter().map(|n| PlayerId::new(*n)).collect()
}

#[test]
fn rotation_follows_roster_order() {
    let roster = ids(&["a", "b", "c"]);
    let next = next_active_player(&roster, &roster, &roster[0]).unwrap();
    assert_eq!(next, roster[1]);
    let next = next_active_player(&roster, &roster, &roster[1]).unwrap();
    assert_eq!(next, roster[2]);
}

#[test]
fn rotation_wraps_around_the_roster() {
    let roster = ids(&["a", "b", "c"]);
    let next = next_active_player(&roster, &roster, &roster[2]).unwrap();
    assert_eq!(next, roster[0]);
}

#[test]
fn eliminated_players_are_skipped() {
    let roster = ids(&["a", "b", "c"]);
    let living = ids(&["a", "c"]);
    let next = next_active_player(&roster, &living, &roster[0]).unwrap();
    assert_eq!(next, roster[2]);
}

#[test]
fn sole_living_player_is_trivially_next() {
    let roster = ids(&["a", "b", "c"]);
    let living = ids(&["b"]);
    let next = next_active_player(&roster, &living, &roster[1]).unwrap();
    assert_eq!(next, roster[1]);
}

#[test]
fn current_player_missing_from_roster_is_an_error() {
    let roster = ids(&["a", "b"]);
    let stranger = PlayerId::new("z");
    let err = next_active_player(&roster, &roster, &stranger).unwrap_err();
    assert_eq!(err, GameError::NotInRoster(stranger));
}

#[test]
fn empty_living_set_is_an_error() {
    let roster = ids(&["a", "b"]);
    let err = next_active_player(&roster, &[], &roster[0]).unwrap_err();
    assert_eq!(err, GameError::NoLivingPlayers);
}

#[test]
fn rotation_always_lands_on_a_living_player() {
    let roster = ids(&["a", "b", "c", "d"]);
    let living = ids(&["b", "d"]);
    let mut current = roster[1].clone();
    for _ in 0..8 {
        current = next_active_player(&roster, &living, &current).unwrap();
        assert!(living.contains(&current));
    }
}
