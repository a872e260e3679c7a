//! Subcommand handlers, one module per command.

pub mod cfg;
pub mod play;
pub mod replay;
pub mod rng;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use play::handle_play_command;
pub use replay::handle_replay_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

use dudo_engine::engine::Engine;
use dudo_engine::errors::GameError;
use dudo_engine::player::PlayerMove;

/// Routes a parsed move to the matching engine operation.
pub(crate) fn apply_move(engine: &mut Engine, mv: &PlayerMove) -> Result<(), GameError> {
    match mv {
        PlayerMove::Bid(bid) => engine.place_bid(*bid),
        PlayerMove::CallBluff => engine.call_bluff(),
        PlayerMove::CallSpotOn => engine.call_spot_on(),
    }
}
