//! Play command handler for interactive play against bots.
//!
//! The human sits in seat 0 (`you`) and the remaining seats are filled with
//! bots. Actions are read line by line from the supplied reader, so tests
//! drive the command with a `Cursor`.

use std::io::{BufRead, Write};

use holdem_ai::create_bot;
use holdem_engine::game::HandOutcome;
use holdem_engine::snapshot::render;

use super::table::{Table, TableClosed};
use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_action, format_payout};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action, validate_hands, validate_player_count};

/// Player id of the human seat.
pub const HUMAN: &str = "you";

pub struct PlayArgs {
    pub players: Option<usize>,
    pub hands: u32,
    pub seed: Option<u64>,
    pub bot: String,
}

/// Handle the play command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` for bad option values,
/// `CliError::Interrupted` when the user quits or input ends mid-session.
pub fn handle_play_command(
    args: PlayArgs,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let players = args.players.unwrap_or(config.players);
    validate_player_count(players).map_err(CliError::InvalidInput)?;
    validate_hands(args.hands).map_err(CliError::InvalidInput)?;

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    let bot = create_bot(&args.bot, seed).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let mut seats = vec![(HUMAN.to_string(), "You".to_string())];
    seats.extend((1..players).map(|i| (format!("bot{i}"), format!("Bot {i}"))));
    let mut table = Table::seat(config.game_options(Some(seed)), &seats, config.buy_in, bot)?;

    writeln!(
        out,
        "play: players={} hands={} seed={} blinds={}/{}",
        players, args.hands, seed, config.small_blind, config.big_blind
    )?;

    let mut played = 0;
    for _ in 0..args.hands {
        let mut outcome = match table.deal()? {
            Ok(outcome) => outcome,
            Err(closed) => {
                write_closed(out, &closed)?;
                break;
            }
        };
        let hand_number = table.game()?.hand_number();
        ui::write_header(out, &format!("Hand {}", hand_number))?;

        while outcome.is_none() {
            let Some(actor) = table.actor()? else {
                break;
            };
            if actor == HUMAN {
                outcome = human_turn(&mut table, out, err, stdin)?;
            } else {
                let (action, result) = table.bot_turn(&actor)?;
                writeln!(out, "{}: {}", actor, format_action(&action))?;
                outcome = result.hand;
            }
        }

        played += 1;
        if let Some(outcome) = outcome {
            write_outcome(&table, out, &outcome)?;
        }
        if table.game()?.player(HUMAN).is_none_or(|p| p.chips() == 0) {
            writeln!(out, "You are out of chips.")?;
            break;
        }
    }

    writeln!(out, "Hands played: {}", played)?;
    Ok(())
}

/// Prompts until the human submits an accepted action.
fn human_turn(
    table: &mut Table,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<HandOutcome>, CliError> {
    writeln!(out, "{}", table.manager.render(table.game, Some(HUMAN))?)?;
    loop {
        let snapshot = table.manager.game_state(table.game, Some(HUMAN))?;
        let to_call = snapshot
            .player(HUMAN)
            .map_or(0, |p| snapshot.current_bet.saturating_sub(p.bet));
        write!(out, "Your action (to call {}): ", to_call)?;
        out.flush()?;

        let Some(line) = read_stdin_line(stdin) else {
            return leave(table, out, "input closed");
        };
        match parse_player_action(&line) {
            ParseResult::Quit => return leave(table, out, "player quit"),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
            ParseResult::Action(action) => {
                match table.manager.player_action(table.game, HUMAN, action) {
                    Ok(result) => {
                        writeln!(out, "{}: {}", HUMAN, format_action(&action))?;
                        return Ok(result.hand);
                    }
                    Err(e) if e.is_recoverable() => ui::write_error(err, &e.to_string())?,
                    Err(e) => return Err(e.into()),
                }
            }
        }
    }
}

/// Folds the human out of the hand and ends the session.
fn leave(table: &mut Table, out: &mut dyn Write, reason: &str) -> Result<Option<HandOutcome>, CliError> {
    if let Some(outcome) = table.manager.remove_player(table.game, HUMAN)? {
        write_outcome(table, out, &outcome)?;
    }
    Err(CliError::Interrupted(reason.to_string()))
}

fn write_outcome(table: &Table, out: &mut dyn Write, outcome: &HandOutcome) -> Result<(), CliError> {
    let snapshot = table.manager.game_state(table.game, Some(HUMAN))?;
    if !outcome.uncontested {
        writeln!(out, "{}", render(&snapshot))?;
    }
    for payout in &outcome.winners {
        writeln!(out, "{}", format_payout(payout))?;
    }
    let stacks: Vec<String> = table
        .stacks()?
        .iter()
        .map(|(id, chips)| format!("{}={}", id, chips))
        .collect();
    writeln!(out, "Stacks: {}", stacks.join(" "))?;
    Ok(())
}

fn write_closed(out: &mut dyn Write, closed: &TableClosed) -> Result<(), CliError> {
    match closed {
        TableClosed::Winner(id) => writeln!(out, "Game over: {} has all the chips", id)?,
        TableClosed::NotEnoughPlayers => writeln!(out, "Game over: not enough players")?,
    }
    Ok(())
}
