//! Input parsing and validation for interactive commands.
//!
//! Handles the action prompt of `holdem play` and the numeric bounds of the
//! command-line options shared by `play`, `sim` and `deal`.

use holdem_engine::config::MAX_SEATS;
use holdem_engine::player::PlayerAction;

/// Result type for parsing user input into player actions.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid player action parsed from input
    Action(PlayerAction),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input string into a PlayerAction or special commands.
///
/// Accepts the following input formats (case-insensitive):
/// - "f" or "fold" → Fold
/// - "k" or "check" → Check
/// - "c" or "call" → Call
/// - "raise X" or "r X" → Raise the round bet to X
/// - "allin", "all-in" or "a" → All-in
/// - "q" or "quit" → Quit command
///
/// # Example
///
/// ```rust
/// # use holdem_cli::validation::{parse_player_action, ParseResult};
/// use holdem_engine::player::PlayerAction;
///
/// assert_eq!(
///     parse_player_action("fold"),
///     ParseResult::Action(PlayerAction::Fold)
/// );
///
/// assert_eq!(
///     parse_player_action("raise 100"),
///     ParseResult::Action(PlayerAction::Raise(100))
/// );
///
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
///
/// match parse_player_action("invalid") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    let Some(&verb) = parts.first() else {
        return ParseResult::Invalid("Empty input".to_string());
    };

    match verb {
        "q" | "quit" => ParseResult::Quit,
        "fold" | "f" => ParseResult::Action(PlayerAction::Fold),
        "check" | "k" => ParseResult::Action(PlayerAction::Check),
        "call" | "c" => ParseResult::Action(PlayerAction::Call),
        "allin" | "all-in" | "a" => ParseResult::Action(PlayerAction::AllIn),
        "raise" | "r" => {
            let Some(amount) = parts.get(1) else {
                return ParseResult::Invalid(
                    "Raise requires an amount (e.g., 'raise 60')".to_string(),
                );
            };
            match amount.parse::<u32>() {
                Ok(amount) if amount > 0 => ParseResult::Action(PlayerAction::Raise(amount)),
                Ok(_) => ParseResult::Invalid("Raise amount must be positive".to_string()),
                Err(_) => ParseResult::Invalid("Invalid raise amount".to_string()),
            }
        }
        _ => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Valid actions: fold, check, call, raise <amount>, allin, q",
            verb
        )),
    }
}

/// Validates a seat count given on the command line.
pub fn validate_player_count(players: usize) -> Result<(), String> {
    if !(2..=MAX_SEATS).contains(&players) {
        return Err(format!(
            "players must be between 2 and {}, got {}",
            MAX_SEATS, players
        ));
    }
    Ok(())
}

/// Validates a hand count: zero hands is rejected.
pub fn validate_hands(hands: u32) -> Result<(), String> {
    if hands == 0 {
        return Err("hands must be >= 1".to_string());
    }
    Ok(())
}
