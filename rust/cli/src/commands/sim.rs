//! Simulation command handler: bots play each other for a number of hands.
//!
//! # Environment Variables
//!
//! - `HOLDEM_SIM_BREAK_AFTER`: stop after N hands as if interrupted (for testing)
//!
//! # Examples
//!
//! ```no_run
//! use holdem_cli::commands::sim::{handle_sim_command, SimArgs};
//! use holdem_cli::config::Config;
//! use std::io;
//!
//! let args = SimArgs {
//!     hands: 1000,
//!     players: Some(6),
//!     seed: Some(42),
//!     output: Some("data/sim.jsonl".into()),
//!     bot: "baseline".into(),
//! };
//! handle_sim_command(args, &Config::default(), &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use std::io::Write;
use std::path::PathBuf;

use holdem_ai::create_bot;
use holdem_engine::logger::HandLogger;
use tracing::info;

use super::table::{Table, TableClosed};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::format_payout;
use crate::io_utils::ensure_parent_dir;
use crate::ui;
use crate::validation::{validate_hands, validate_player_count};

pub struct SimArgs {
    pub hands: u32,
    pub players: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
    pub bot: String,
}

/// Handle the sim command.
///
/// Prints one line per hand and the final stacks. With `output` set every
/// finished hand is appended to a JSONL hand history.
pub fn handle_sim_command(
    args: SimArgs,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let players = args.players.unwrap_or(config.players);
    validate_player_count(players).map_err(CliError::InvalidInput)?;
    validate_hands(args.hands).map_err(CliError::InvalidInput)?;

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let bot = create_bot(&args.bot, seed).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let seats: Vec<(String, String)> = (1..=players)
        .map(|i| (format!("p{i}"), format!("Player {i}")))
        .collect();
    let mut table = Table::seat(config.game_options(Some(seed)), &seats, config.buy_in, bot)?;

    let mut logger = match &args.output {
        Some(path) => {
            if let Err(e) = ensure_parent_dir(path) {
                ui::write_error(err, &e)?;
                return Err(CliError::Io(std::io::Error::other(e)));
            }
            HandLogger::create(path)?
        }
        None => HandLogger::sink(),
    };

    let break_after = std::env::var("HOLDEM_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u32>().ok());

    let mut completed = 0u32;
    while completed < args.hands {
        let mut outcome = match table.deal()? {
            Ok(outcome) => outcome,
            Err(TableClosed::Winner(id)) => {
                writeln!(out, "Game over: {} has all the chips", id)?;
                break;
            }
            Err(TableClosed::NotEnoughPlayers) => {
                writeln!(out, "Game over: not enough players")?;
                break;
            }
        };
        while outcome.is_none() {
            let Some(actor) = table.actor()? else {
                break;
            };
            outcome = table.bot_turn(&actor)?.1.hand;
        }
        let Some(outcome) = outcome else {
            ui::display_warning(err, "hand ended without an outcome")?;
            continue;
        };

        completed += 1;
        let winners: Vec<String> = outcome.winners.iter().map(format_payout).collect();
        writeln!(out, "Hand {}: {}", outcome.hand_number, winners.join(", "))?;
        if let Some(record) = table.game()?.last_hand() {
            logger.write(record)?;
        }

        if let Some(b) = break_after
            && completed == b
        {
            writeln!(out, "Interrupted: saved {}/{}", completed, args.hands)?;
            return Err(CliError::Interrupted(format!(
                "saved {}/{}",
                completed, args.hands
            )));
        }
    }

    info!(hands = completed, written = logger.written(), "simulation finished");
    let stacks: Vec<String> = table
        .stacks()?
        .iter()
        .map(|(id, chips)| format!("{}={}", id, chips))
        .collect();
    writeln!(out, "Final stacks: {}", stacks.join(" "))?;
    writeln!(out, "Simulated: {} hands", completed)?;
    Ok(())
}
