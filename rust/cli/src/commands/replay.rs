//! Replay command: prints the audit log of recorded games.
//!
//! The engine writes a complete narration of every game into the
//! record, so replay is a matter of echoing those lines back in order.

use std::io::Write;

use dudo_engine::logger::GameRecord;

use crate::error::CliError;
use crate::io_utils::read_jsonl_lines;
use crate::ui;

/// Handle the replay command.
///
/// Replays every record in the file, or just the one matching `game`
/// when an id is given.
///
/// # Errors
///
/// `CliError::Io` when the input file cannot be read,
/// `CliError::InvalidInput` when no record matches.
pub fn handle_replay_command(
    input: String,
    game: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let lines = read_jsonl_lines(&input)
        .map_err(|e| CliError::Io(std::io::Error::other(format!("{}: {}", input, e))))?;

    let mut shown = 0u64;
    let mut skipped = 0u64;
    for line in &lines {
        let record = match serde_json::from_str::<GameRecord>(line) {
            Ok(record) => record,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        if let Some(wanted) = &game
            && &record.game_id != wanted
        {
            continue;
        }

        writeln!(out, "=== Game {} ===", record.game_id)?;
        for entry in &record.log {
            writeln!(out, "{}", entry)?;
        }
        match &record.winner {
            Some(winner) => writeln!(out, "Winner: {}", winner)?,
            None => writeln!(out, "No winner recorded")?,
        }
        shown += 1;
    }

    if skipped > 0 {
        writeln!(err, "Warning: {} corrupted record(s) skipped", skipped)?;
    }
    if shown == 0 {
        let msg = match &game {
            Some(wanted) => format!("no record with game_id {} in {}", wanted, input),
            None => format!("no valid game records in {}", input),
        };
        ui::write_error(err, &msg)?;
        return Err(CliError::InvalidInput(msg));
    }
    Ok(())
}
