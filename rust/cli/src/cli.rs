//! Command-line argument definitions.
//!
//! All subcommands and their flags live here so the dispatch logic in
//! [`crate::run`] stays free of clap details.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "dudo", version, about = "Liar's dice at the terminal")]
pub struct DudoCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive game against bot opponents
    Play {
        /// Number of bot opponents (1-7)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=7))]
        bots: Option<u8>,
        /// RNG seed for a reproducible deal
        #[arg(long)]
        seed: Option<u64>,
        /// Round wins needed to take the game
        #[arg(long)]
        win_score: Option<u32>,
        /// Dice per player at the start of each round
        #[arg(long)]
        hand_size: Option<u8>,
    },
    /// Run bot-vs-bot games and record them as JSONL
    Sim {
        /// Number of games to run
        #[arg(long)]
        games: u64,
        /// Path to write game records (JSONL)
        #[arg(long)]
        output: Option<String>,
        /// Base RNG seed (game i uses seed + i)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of bots per game (2-8)
        #[arg(long, value_parser = clap::value_parser!(u8).range(2..=8))]
        bots: Option<u8>,
    },
    /// Aggregate statistics from recorded games
    Stats {
        /// Path to a JSONL game record file
        #[arg(long)]
        input: String,
    },
    /// Replay the audit log of a recorded game
    Replay {
        /// Path to a JSONL game record file
        #[arg(long)]
        input: String,
        /// Game id to replay (defaults to every record in the file)
        #[arg(long)]
        game: Option<String>,
    },
    /// Verify RNG determinism
    Rng {
        /// Seed value (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
