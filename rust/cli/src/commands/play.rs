//! # Play Command
//!
//! Interactive liar's dice against bot opponents.
//!
//! The human plays as `you` against `bot1..botN`. Each turn the CLI
//! prints the audit log entries the engine produced, shows the
//! player's hand and the standing bid, and prompts for a move. Bots
//! act automatically through the baseline policy.

use std::collections::BTreeMap;
use std::io::{BufRead, Write};

use dudo_ai::{BotOpponent, create_bot};
use dudo_engine::engine::Engine;
use dudo_engine::game::GameConfig;
use dudo_engine::player::PlayerId;

use crate::commands::apply_move;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_hand, format_scores};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_move};

/// Handle the play command: interactive liar's dice.
///
/// Flags override the resolved configuration, which in turn overrides
/// the built-in defaults. Returns `Ok(())` both on game completion and
/// when the user quits early.
pub fn handle_play_command(
    bots: Option<u8>,
    seed: Option<u64>,
    win_score: Option<u32>,
    hand_size: Option<u8>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?
        .config;

    let bots = bots.unwrap_or(cfg.bots).clamp(1, 7);
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let game_config = GameConfig {
        hand_size: hand_size.unwrap_or(cfg.hand_size),
        win_score: win_score.unwrap_or(cfg.win_score),
    };
    if game_config.hand_size == 0 {
        ui::write_error(err, "hand_size must be >= 1")?;
        return Err(CliError::InvalidInput("hand_size must be >= 1".to_string()));
    }
    if game_config.win_score == 0 {
        ui::write_error(err, "win_score must be >= 1")?;
        return Err(CliError::InvalidInput("win_score must be >= 1".to_string()));
    }

    writeln!(
        out,
        "play: bots={} seed={} win_score={} hand_size={}",
        bots, seed, game_config.win_score, game_config.hand_size
    )?;

    let human = PlayerId::new("you");
    let mut players = vec![human.clone()];
    let mut opponents: BTreeMap<PlayerId, Box<dyn BotOpponent>> = BTreeMap::new();
    for i in 1..=bots {
        let id = PlayerId::new(format!("bot{}", i));
        opponents.insert(id.clone(), create_bot("baseline", seed.wrapping_add(i as u64)));
        players.push(id);
    }

    let mut engine = Engine::new(Some(seed), players, game_config)?;
    let mut seen = 0usize;
    flush_log(out, &engine, &mut seen)?;

    let mut quit_requested = false;
    while engine.is_active() && !quit_requested {
        let active = engine.active_player().clone();
        if active == human {
            writeln!(
                out,
                "Your hand: {}",
                format_hand(engine.hand_of(&human).unwrap_or(&[]))
            )?;
            match engine.high_bid() {
                Some(bid) => writeln!(out, "Standing bid: {}", bid)?,
                None => writeln!(out, "No standing bid")?,
            }
            write!(out, "Enter move (bid <count>x<rank> / bluff / spoton / q): ")?;
            out.flush()?;

            match read_stdin_line(stdin) {
                Some(input) => match parse_player_move(&input) {
                    ParseResult::Move(mv) => {
                        if let Err(e) = apply_move(&mut engine, &mv) {
                            ui::write_error(err, &format!("Rejected move: {}", e))?;
                        }
                    }
                    ParseResult::Quit => quit_requested = true,
                    ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
                },
                None => quit_requested = true,
            }
        } else {
            let Some(bot) = opponents.get_mut(&active) else {
                return Err(CliError::Engine(format!("no opponent registered for {}", active)));
            };
            let mv = bot.choose(engine.state(), &active);
            if let Err(e) = apply_move(&mut engine, &mv) {
                ui::write_error(err, &format!("Opponent move failed: {}", e))?;
                return Err(e.into());
            }
        }
        flush_log(out, &engine, &mut seen)?;
    }

    if quit_requested {
        writeln!(out, "Game abandoned.")?;
    }
    if let Some(winner) = engine.winner() {
        writeln!(out, "Winner: {}", winner)?;
    }
    writeln!(out, "Scores:")?;
    writeln!(out, "{}", format_scores(engine.scores()))?;
    Ok(())
}

/// Prints audit log entries added since the last call.
fn flush_log(out: &mut dyn Write, engine: &Engine, seen: &mut usize) -> std::io::Result<()> {
    for line in &engine.log()[*seen..] {
        writeln!(out, "{}", line)?;
    }
    *seen = engine.log().len();
    Ok(())
}
