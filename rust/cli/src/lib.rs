//! # cardtable CLI Library
//!
//! Command-line front end for the `cardtable-engine` crate: deal hands,
//! play a hot-seat betting round from stdin, and inspect configuration.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and executes the subcommand, writing to the
//! given streams and returning the process exit code.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = cardtable_cli::run(
//!     ["cardtable", "deal", "--players", "2", "--seed", "42"],
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Starting player"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal 13 cards to each of 2-4 seats and show who opens
//! - `play`: Take betting actions from stdin for whoever holds the turn
//! - `cfg`: Display the resolved configuration and value sources

#[macro_use]
mod macros;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use clap::Parser;
use std::io::{BufRead, Write};

use cli::{CardtableCli, Commands};
use commands::{PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Interactive input for `play` comes from the process stdin; see
/// [`run_with_input`] to supply it directly.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, out, err, &mut stdin_lock)
}

/// [`run`] reading interactive input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["deal", "play", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardtableCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Usage: cardtable <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: cardtable --help");
            return exit_code::ERROR;
        }
    };

    match dispatch(cli.cmd, out, err, input) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn dispatch(
    cmd: Commands,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: &mut dyn BufRead,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Deal { players, seed } => {
            let config = config::load_with_sources()?.config;
            let players = players.map(usize::from).unwrap_or(config.players);
            handle_deal_command(players, seed.or(config.seed), out)
        }
        Commands::Play {
            players,
            seed,
            log,
            rotation,
        } => {
            let config = config::load_with_sources()?.config;
            let mut opts = PlayOptions::from_config(&config);
            if let Some(n) = players {
                opts.players = usize::from(n);
            }
            if let Some(r) = rotation {
                opts.rotation = r;
            }
            opts.seed = seed.or(opts.seed);
            opts.log = log;
            handle_play_command(opts, out, err, input)
        }
    }
}
