//! # holdem CLI Library
//!
//! Command-line driver for the `holdem-engine` table engine. It seats a human
//! against bots, runs bot-only simulations, deals and evaluates hands, and
//! shows the resolved configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `play`: Play hands against bots, reading actions from stdin
//! - `sim`: Bots only; prints per-hand winners and final stacks, optional JSONL history
//! - `deal`: Deal a single hand for inspection
//! - `eval`: Evaluate 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, HoldemCli};
use commands::{
    PlayArgs, SimArgs, handle_cfg_command, handle_deal_command, handle_eval_command,
    handle_play_command, handle_sim_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = holdem_cli::run(["holdem", "deal", "--seed", "42"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().starts_with("Seed: 42"));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "deal", "eval", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
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
                    let _ = write_usage(err, &e.to_string(), COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    logging::init_logging(cli.verbose);

    match dispatch(cli.cmd, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = ui::display_warning(err, &format!("interrupted: {}", msg));
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn dispatch(cmd: Commands, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { players, seed } => {
            let seed = seed.or(config::load()?.seed);
            handle_deal_command(players, seed, out)
        }
        Commands::Play {
            players,
            hands,
            seed,
            bot,
        } => {
            let config = config::load()?;
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let args = PlayArgs {
                players,
                hands,
                seed,
                bot,
            };
            handle_play_command(args, &config, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            hands,
            players,
            seed,
            output,
            bot,
        } => {
            let config = config::load()?;
            let args = SimArgs {
                hands,
                players,
                seed,
                output,
                bot,
            };
            handle_sim_command(args, &config, out, err)
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_error: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", clap_error)?;
    writeln!(err)?;
    writeln!(err, "Hold'em table CLI")?;
    writeln!(err, "Usage: holdem <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: holdem --help")
}
