//! Configuration command handler.
//!
//! Displays the resolved configuration as pretty JSON, pairing each
//! value with the layer that supplied it (default, file, or env).

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails,
/// `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "hand_size": {
            "value": config.hand_size,
            "source": sources.hand_size,
        },
        "win_score": {
            "value": config.win_score,
            "source": sources.win_score,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "bots": {
            "value": config.bots,
            "source": sources.bots,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
