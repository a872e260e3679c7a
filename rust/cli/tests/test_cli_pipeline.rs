//! End-to-end runs through the public `run` entry point: simulate,
//! then feed the recorded file to stats and replay.

use serial_test::serial;

fn run_cli(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = dudo_cli::run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
#[serial]
fn sim_stats_replay_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");
    let path_str = path.to_str().unwrap();

    let (code, out, err) = run_cli(&[
        "dudo", "sim", "--games", "3", "--seed", "42", "--output", path_str,
    ]);
    assert_eq!(code, 0, "sim failed: {}", err);
    assert!(out.contains("sim: games=3 bots=2 seed=42"));
    assert!(path.exists());

    let (code, out, err) = run_cli(&["dudo", "stats", "--input", path_str]);
    assert_eq!(code, 0, "stats failed: {}", err);
    assert!(out.contains("Games: 3"));
    assert!(out.contains("Wins:"));

    let (code, out, err) = run_cli(&["dudo", "replay", "--input", path_str]);
    assert_eq!(code, 0, "replay failed: {}", err);
    assert!(out.contains("=== Game "));
    assert!(out.contains("Started a new game."));
    assert!(out.contains("Winner: "));
}

#[test]
#[serial]
fn replay_can_select_a_single_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.jsonl");
    let path_str = path.to_str().unwrap();

    let (code, _out, _err) = run_cli(&[
        "dudo", "sim", "--games", "2", "--seed", "7", "--output", path_str,
    ]);
    assert_eq!(code, 0);

    // ids are date-prefixed, so fish the first one out of the file
    let contents = std::fs::read_to_string(&path).unwrap();
    let first: serde_json::Value =
        serde_json::from_str(contents.lines().next().unwrap()).unwrap();
    let game_id = first["game_id"].as_str().unwrap();

    let (code, out, _err) = run_cli(&["dudo", "replay", "--input", path_str, "--game", game_id]);
    assert_eq!(code, 0);
    assert_eq!(out.matches("=== Game ").count(), 1);
}

#[test]
fn rng_is_deterministic_across_runs() {
    let (code1, out1, _) = run_cli(&["dudo", "rng", "--seed", "123"]);
    let (code2, out2, _) = run_cli(&["dudo", "rng", "--seed", "123"]);
    assert_eq!(code1, 0);
    assert_eq!(code2, 0);
    assert_eq!(out1, out2);
}

#[test]
fn sim_with_same_seed_records_identical_outcomes() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.jsonl");
    let b = dir.path().join("b.jsonl");

    for path in [&a, &b] {
        let (code, _out, err) = run_cli(&[
            "dudo", "sim", "--games", "2", "--seed", "99", "--output",
            path.to_str().unwrap(),
        ]);
        assert_eq!(code, 0, "sim failed: {}", err);
    }

    let winners = |p: &std::path::Path| -> Vec<String> {
        std::fs::read_to_string(p)
            .unwrap()
            .lines()
            .map(|l| {
                let v: serde_json::Value = serde_json::from_str(l).unwrap();
                v["winner"].as_str().unwrap_or("").to_string()
            })
            .collect()
    };
    assert_eq!(winners(&a), winners(&b));
}

#[test]
fn stats_on_missing_file_exits_2() {
    let (code, _out, err) = run_cli(&["dudo", "stats", "--input", "no-such-file.jsonl"]);
    assert_eq!(code, 2);
    assert!(err.contains("Error:"));
}
