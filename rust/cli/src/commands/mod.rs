//! Command handler modules for the `parlor` CLI.
//!
//! One file per subcommand, each exposing
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>` with output
//! streams (and stdin for interactive commands) passed in as parameters.

mod cfg;
mod deal;
mod madlibs;
mod play;
mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use madlibs::handle_madlibs_command;
pub use play::{handle_play_command, PlayOptions};
pub use stats::handle_stats_command;
