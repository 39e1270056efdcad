//! # pokersquares CLI Library
//!
//! Command-line interface for playing, simulating and evaluating Poker
//! Squares players.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["pokersquares", "play", "--player", "expectimax", "--seed", "7"];
//! let code = pokersquares_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one game and print the transcript
//! - `sim`: Play many games, summarize scores, optionally record JSONL
//! - `eval`: Compare two players on identical deals
//! - `score`: Score a completed grid
//! - `cfg`: Display the resolved configuration

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
mod macros;
pub mod ui;

use cli::{Commands, PokerSquaresCli};
use commands::{
    handle_cfg_command, handle_eval_command, handle_play_command, handle_score_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "eval", "score", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["pokersquares", "score", "--system", "american", "--cards",
///     "AS KS QS JS TS 2H 2D 2C 3H 3D 4C 5C 6C 7C 8C 9H 9D 4H 4D 6H 7S 8S 5H 5D 6D"];
/// let code = pokersquares_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match PokerSquaresCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: pokersquares <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: pokersquares --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Play { opts } => handle_play_command(&opts, out, err),
        Commands::Sim {
            games,
            opts,
            output,
        } => handle_sim_command(games, &opts, output, out, err),
        Commands::Eval {
            player_a,
            player_b,
            games,
            seed,
            system,
            depth,
        } => {
            let opts = cli::GameOptions {
                player: None,
                system,
                seed,
                depth,
            };
            handle_eval_command(&player_a, &player_b, games, &opts, out, err)
        }
        Commands::Score { cards, system } => handle_score_command(&cards, system, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::warn!(error = %e, "command failed");
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}
