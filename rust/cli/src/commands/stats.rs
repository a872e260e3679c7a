//! Statistics aggregation over recorded games.
//!
//! Reads a JSONL game record file and reports totals: games, rounds,
//! and wins per player. Corrupted lines are skipped with a warning so
//! one bad record does not hide an otherwise usable file.

use std::collections::BTreeMap;
use std::io::Write;

use dudo_engine::logger::GameRecord;
use dudo_engine::player::PlayerId;

use crate::error::CliError;
use crate::io_utils::read_jsonl_lines;

/// Handle the stats command.
///
/// # Errors
///
/// `CliError::Io` when the input file cannot be read,
/// `CliError::InvalidInput` when it contains no parseable records.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let lines = read_jsonl_lines(&input)
        .map_err(|e| CliError::Io(std::io::Error::other(format!("{}: {}", input, e))))?;

    let mut games = 0u64;
    let mut rounds = 0u64;
    let mut wins: BTreeMap<PlayerId, u64> = BTreeMap::new();
    let mut unfinished = 0u64;
    let mut skipped = 0u64;

    for line in &lines {
        match serde_json::from_str::<GameRecord>(line) {
            Ok(record) => {
                games += 1;
                rounds += u64::from(record.rounds);
                match record.winner {
                    Some(winner) => *wins.entry(winner).or_insert(0) += 1,
                    None => unfinished += 1,
                }
            }
            Err(_) => skipped += 1,
        }
    }

    if skipped > 0 {
        writeln!(err, "Warning: {} corrupted record(s) skipped", skipped)?;
    }
    if games == 0 {
        return Err(CliError::InvalidInput(format!(
            "no valid game records in {}",
            input
        )));
    }

    writeln!(out, "Games: {}", games)?;
    writeln!(out, "Rounds: {}", rounds)?;
    if unfinished > 0 {
        writeln!(out, "Unfinished: {}", unfinished)?;
    }
    writeln!(out, "Wins:")?;
    for (id, count) in &wins {
        writeln!(out, "  {}: {}", id, count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn record_line(game_id: &str, winner: Option<&str>, rounds: u32) -> String {
        let record = serde_json::json!({
            "game_id": game_id,
            "seed": 1,
            "roster": ["a", "b"],
            "scores": {"a": 0, "b": rounds},
            "winner": winner,
            "rounds": rounds,
            "log": [],
        });
        record.to_string()
    }

    #[test]
    fn test_stats_aggregates_games_rounds_and_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "{}", record_line("20260101-000001", Some("b"), 5)).unwrap();
        writeln!(f, "{}", record_line("20260101-000002", Some("a"), 7)).unwrap();
        writeln!(f, "{}", record_line("20260101-000003", Some("b"), 6)).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_stats_command(path.to_string_lossy().into_owned(), &mut out, &mut err);
        assert!(result.is_ok());

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Games: 3"));
        assert!(output.contains("Rounds: 18"));
        assert!(output.contains("  a: 1"));
        assert!(output.contains("  b: 2"));
    }

    #[test]
    fn test_stats_skips_corrupted_lines_with_a_warning() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "{}", record_line("20260101-000001", Some("a"), 5)).unwrap();
        writeln!(f, "not json at all").unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_stats_command(path.to_string_lossy().into_owned(), &mut out, &mut err);
        assert!(result.is_ok());

        assert!(String::from_utf8(err).unwrap().contains("1 corrupted record(s)"));
        assert!(String::from_utf8(out).unwrap().contains("Games: 1"));
    }

    #[test]
    fn test_stats_counts_unfinished_games() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "{}", record_line("20260101-000001", None, 2)).unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_stats_command(path.to_string_lossy().into_owned(), &mut out, &mut err);
        assert!(result.is_ok());
        assert!(String::from_utf8(out).unwrap().contains("Unfinished: 1"));
    }

    #[test]
    fn test_stats_fails_on_missing_file() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_stats_command("nonexistent.jsonl".to_string(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::Io(_))));
    }

    #[test]
    fn test_stats_fails_when_nothing_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("games.jsonl");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "garbage").unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_stats_command(path.to_string_lossy().into_owned(), &mut out, &mut err);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
