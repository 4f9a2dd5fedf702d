//! # Parlor CLI Library
//!
//! Command-line front end for the parlor games: interactive Blackjack
//! against the dealer plus a Mad Libs story filler.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand. All output goes
//! through the writers passed in, so every command can be driven from tests.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["parlor", "play", "--seed", "42", "--chips", "200"];
//! let code = parlor_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play Blackjack rounds with a persistent bankroll
//! - `deal`: Deal one opening hand for inspection
//! - `stats`: Summarize round-history JSONL files
//! - `madlibs`: List stories or fill one in
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, ParlorCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_madlibs_command, handle_play_command,
    handle_stats_command, PlayOptions,
};

pub use error::CliError;

/// Scripted stdin for interactive commands, used when set.
pub const TEST_INPUT_ENV: &str = "PARLOR_TEST_INPUT";

const COMMANDS: &[&str] = &["play", "deal", "stats", "madlibs", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the process exit code: `0` for success, `2` for errors, `130`
/// when input was interrupted.
///
/// ```
/// use std::io;
/// let args = vec!["parlor", "deal", "--seed", "42"];
/// let code = parlor_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match ParlorCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout with success
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Parlor: Blackjack and Mad Libs");
                    write_or_exit!(err, "Usage: parlor <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: parlor --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play {
            seed,
            chips,
            scoring,
            dealer,
            history,
        } => {
            let opts = PlayOptions {
                seed,
                chips,
                scoring: scoring.map(Into::into),
                dealer: dealer.map(Into::into),
                history,
            };
            with_stdin(|stdin| handle_play_command(opts, out, stdin))
        }
        Commands::Deal { seed, scoring } => {
            handle_deal_command(seed, scoring.map(Into::into), out)
        }
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Madlibs { story, set, list } => {
            with_stdin(|stdin| handle_madlibs_command(story, set, list, out, stdin))
        }
        Commands::Cfg => handle_cfg_command(out),
    };

    // handlers return failures unprinted
    let Err(e) = result else {
        return exit_code::SUCCESS;
    };
    if ui::write_error(err, &e.to_string()).is_err() {
        return exit_code::ERROR;
    }
    match e {
        CliError::Interrupted(_) => exit_code::INTERRUPTED,
        _ => exit_code::ERROR,
    }
}

/// Run `f` against real stdin, or against `PARLOR_TEST_INPUT` when it is set.
fn with_stdin<T>(f: impl FnOnce(&mut dyn BufRead) -> T) -> T {
    match std::env::var(TEST_INPUT_ENV) {
        Ok(script) => {
            let mut cursor = std::io::Cursor::new(script.into_bytes());
            f(&mut cursor)
        }
        Err(_) => {
            let stdin = std::io::stdin();
            let mut lock = stdin.lock();
            f(&mut lock)
        }
    }
}
