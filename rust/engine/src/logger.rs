use std::collections::BTreeMap;
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::game::GameState;
use crate::player::PlayerId;

/// Summary of one finished game, serialized as a single JSONL line
/// for archival and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed the dice roller was created with (enables replay)
    pub seed: Option<u64>,
    /// All participants, in roster order
    pub roster: Vec<PlayerId>,
    /// Final round-win tally per player
    pub scores: BTreeMap<PlayerId, u32>,
    /// The player who took the game, if it ran to completion
    pub winner: Option<PlayerId>,
    /// Rounds resolved over the whole game
    pub rounds: u32,
    /// The full audit log as the engine wrote it
    pub log: Vec<String>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    /// Builds a record from a final snapshot.
    pub fn from_state(game_id: String, seed: Option<u64>, state: &GameState) -> Self {
        Self {
            game_id,
            seed,
            roster: state.roster.clone(),
            scores: state.scores.clone(),
            winner: state.winner.clone(),
            rounds: state.rounds_played(),
            log: state.log.clone(),
            ts: None,
            meta: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`GameRecord`]s to a JSONL file, stamping each line and
/// handing out sequential game ids.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
