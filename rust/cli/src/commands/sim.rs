//! Simulation command handler for bot-vs-bot game generation.
//!
//! Runs N complete games between baseline bots and optionally records
//! each one as a JSONL [`GameRecord`] for later `stats` and `replay`
//! runs. Game i uses seed `base + i`, so a whole batch can be
//! reproduced from the printed base seed.

use std::collections::BTreeMap;
use std::io::Write;

use dudo_ai::{BotOpponent, create_bot};
use dudo_engine::engine::Engine;
use dudo_engine::game::{GameConfig, GameState};
use dudo_engine::logger::{GameLogger, GameRecord};
use dudo_engine::player::PlayerId;

use crate::commands::apply_move;
use crate::error::CliError;
use crate::ui;

/// Handle the sim command: run bot-vs-bot games.
///
/// # Arguments
///
/// * `games` - Number of games to run (must be >= 1)
/// * `output` - Optional JSONL path for game records
/// * `seed` - Base RNG seed (random if omitted)
/// * `bots` - Bots per game (2-8, default 2)
/// * `out` - Output stream for the summary
/// * `err` - Output stream for error messages
pub fn handle_sim_command(
    games: u64,
    output: Option<String>,
    seed: Option<u64>,
    bots: Option<u8>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        ui::write_error(err, "games must be >= 1")?;
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let bots = bots.unwrap_or(2).clamp(2, 8);
    let base_seed = seed.unwrap_or_else(rand::random);

    let mut logger = match &output {
        Some(path) => Some(GameLogger::create(path)?),
        None => None,
    };

    let mut wins: BTreeMap<PlayerId, u64> = BTreeMap::new();
    let mut rounds_total = 0u64;
    for i in 0..games {
        let game_seed = base_seed.wrapping_add(i);
        let state = run_bot_game(game_seed, bots)?;
        rounds_total += u64::from(state.rounds_played());
        if let Some(winner) = &state.winner {
            *wins.entry(winner.clone()).or_insert(0) += 1;
        }
        if let Some(logger) = &mut logger {
            let record = GameRecord::from_state(logger.next_id(), Some(game_seed), &state);
            logger.write(&record)?;
        }
    }

    writeln!(out, "sim: games={} bots={} seed={}", games, bots, base_seed)?;
    writeln!(out, "Rounds played: {}", rounds_total)?;
    writeln!(out, "Wins:")?;
    for (id, count) in &wins {
        writeln!(out, "  {}: {}", id, count)?;
    }
    Ok(())
}

/// Plays one game to completion with a baseline bot per seat.
fn run_bot_game(seed: u64, bots: u8) -> Result<GameState, CliError> {
    let mut players = Vec::new();
    let mut seats: BTreeMap<PlayerId, Box<dyn BotOpponent>> = BTreeMap::new();
    for i in 1..=bots {
        let id = PlayerId::new(format!("bot{}", i));
        seats.insert(id.clone(), create_bot("baseline", seed.wrapping_add(i as u64)));
        players.push(id);
    }

    let mut engine = Engine::new(Some(seed), players, GameConfig::default())?;
    while engine.is_active() {
        let active = engine.active_player().clone();
        let Some(bot) = seats.get_mut(&active) else {
            return Err(CliError::Engine(format!("no bot registered for {}", active)));
        };
        let mv = bot.choose(engine.state(), &active);
        apply_move(&mut engine, &mv)?;
    }
    Ok(engine.into_state())
}
