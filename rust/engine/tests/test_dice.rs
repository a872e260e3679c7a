use dudo_engine::dice::DiceRoller;

#[test]
fn same_seed_rolls_identical_hands() {
    let mut a = DiceRoller::new_with_seed(42);
    let mut b = DiceRoller::new_with_seed(42);
    assert_eq!(a.roll_hand(5), b.roll_hand(5));
    assert_eq!(a.roll_hand(3), b.roll_hand(3));
}

#[test]
fn faces_stay_in_range() {
    let mut roller = DiceRoller::new_with_seed(7);
    for _ in 0..1000 {
        let face = roller.roll_die();
        assert!((1..=6).contains(&face), "rolled {}", face);
    }
}

#[test]
fn all_faces_show_up_eventually() {
    let mut roller = DiceRoller::new_with_seed(0);
    let mut seen = [false; 6];
    for _ in 0..1000 {
        seen[(roller.roll_die() - 1) as usize] = true;
    }
    assert!(seen.iter().all(|&s| s), "distribution hole: {:?}", seen);
}

#[test]
fn roll_hand_produces_requested_size() {
    let mut roller = DiceRoller::new_with_seed(1);
    assert_eq!(roller.roll_hand(5).len(), 5);
    assert_eq!(roller.roll_hand(2).len(), 2);
    assert!(roller.roll_hand(0).is_empty());
}
