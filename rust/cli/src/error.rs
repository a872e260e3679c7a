//! Error types for the CLI application.

use std::fmt;

use dudo_engine::errors::{ErrorKind, GameError};

/// Custom error type for CLI operations.
///
/// Encompasses every failure a subcommand can hit, so handlers can
/// propagate with the `?` operator and the dispatcher can map the
/// result to an exit code.
#[derive(Debug)]
pub enum CliError {
    /// I/O error (file operations, stdout/stderr writes, etc.)
    Io(std::io::Error),

    /// Invalid user input or command-line arguments
    InvalidInput(String),

    /// Configuration error
    Config(String),

    /// Engine-related error
    Engine(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "I/O error: {}", e),
            CliError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Engine(msg) => write!(f, "Engine error: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(error: std::io::Error) -> Self {
        CliError::Io(error)
    }
}

impl From<String> for CliError {
    fn from(error: String) -> Self {
        CliError::Engine(error)
    }
}

impl From<&str> for CliError {
    fn from(error: &str) -> Self {
        CliError::Engine(error.to_string())
    }
}

// Rejected moves are user mistakes; everything else from the engine
// is a real fault.
impl From<GameError> for CliError {
    fn from(error: GameError) -> Self {
        match error.kind() {
            ErrorKind::InvalidMove => CliError::InvalidInput(error.to_string()),
            _ => CliError::Engine(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dudo_engine::player::PlayerId;

    #[test]
    fn test_rejected_move_maps_to_invalid_input() {
        let err: CliError = GameError::NoStandingBid.into();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }

    #[test]
    fn test_roster_fault_maps_to_engine_error() {
        let err: CliError = GameError::NotEnoughPlayers(1).into();
        assert!(matches!(err, CliError::Engine(_)));

        let err: CliError = GameError::DuplicatePlayer(PlayerId::new("a")).into();
        assert!(matches!(err, CliError::Engine(_)));
    }

    #[test]
    fn test_display_carries_the_underlying_message() {
        let err: CliError = GameError::GameOver.into();
        assert!(err.to_string().contains("already over"));
    }
}
