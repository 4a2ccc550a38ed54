//! Interactive play driven through an in-memory reader.

use std::io::Cursor;

use holdem_cli::CliError;
use holdem_cli::commands::{PlayArgs, handle_play_command};
use holdem_cli::config::Config;

fn play(players: usize, hands: u32, script: &str) -> (Result<(), CliError>, String, String) {
    let args = PlayArgs {
        players: Some(players),
        hands,
        seed: Some(2024),
        bot: "baseline".to_string(),
    };
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let result = handle_play_command(args, &Config::default(), &mut out, &mut err, &mut input);
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_calling_station_finishes_the_session() {
    let script = "call\n".repeat(200);
    let (result, out, _) = play(3, 3, &script);
    assert!(result.is_ok(), "{result:?}");
    assert!(out.contains("== Hand 1 "));
    assert!(out.contains("Stacks: "));
    assert!(out.contains("wins"));
}

#[test]
fn test_table_is_rendered_for_the_human() {
    let (result, out, _) = play(4, 1, "fold\n");
    assert!(result.is_ok(), "{result:?}");
    assert!(out.contains("Board: "));
    assert!(out.contains("you: fold"));
}

#[test]
fn test_illegal_action_reprompts_without_losing_the_turn() {
    // heads-up the human posts the small blind and cannot check
    let (result, out, err) = play(2, 1, "check\nfold\n");
    assert!(result.is_ok(), "{result:?}");
    assert!(err.contains("Cannot check"));
    assert_eq!(out.matches("Your action").count(), 2);
    assert!(out.contains("bot1 wins 30"));
}

#[test]
fn test_eof_interrupts() {
    let (result, _, _) = play(2, 1, "");
    assert!(matches!(result, Err(CliError::Interrupted(ref m)) if m == "input closed"));
}
