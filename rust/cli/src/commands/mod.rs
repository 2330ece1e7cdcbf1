//! Command handler modules for the cardtable CLI.
//!
//! Each subcommand lives in its own module with a public
//! `handle_COMMAND_command(...) -> Result<(), CliError>` entry point that
//! takes its output streams as `&mut dyn Write` parameters.

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
