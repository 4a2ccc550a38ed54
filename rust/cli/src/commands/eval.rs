//! Hand evaluation command: `holdem eval As Ks Qs Js Ts`.

use std::io::Write;

use holdem_engine::cards::parse_cards;
use holdem_engine::hand::evaluate;

use crate::error::CliError;
use crate::formatters::format_board;

/// Evaluates 5 to 7 cards and prints category, value and the best five.
///
/// Cards may be given as separate arguments or in one quoted string.
pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(&cards.join(" "))?;
    let result = evaluate(&cards)?;
    writeln!(out, "Cards: {}", format_board(&cards))?;
    writeln!(out, "Hand: {}", result.category)?;
    writeln!(out, "Value: {:#08x}", result.value)?;
    writeln!(out, "Best five: {}", format_board(&result.cards))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::errors::GameError;

    fn args(s: &str) -> Vec<String> {
        s.split(' ').map(String::from).collect()
    }

    #[test]
    fn test_eval_prints_category_and_best_five() {
        let mut out = Vec::new();
        handle_eval_command(&args("Ah Kh Qh Jh Th 2c 3d"), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Hand: Royal Flush"));
        assert!(output.contains("Value: 0xa"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn test_eval_accepts_one_quoted_argument() {
        let mut out = Vec::new();
        handle_eval_command(&["5c 4d 3h 2s Ac".to_string()], &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Hand: Straight"));
    }

    #[test]
    fn test_eval_rejects_bad_counts_and_cards() {
        let mut out = Vec::new();
        assert!(matches!(
            handle_eval_command(&args("Ah Kh"), &mut out),
            Err(CliError::Engine(GameError::InvalidCardCount(2)))
        ));
        assert!(matches!(
            handle_eval_command(&args("Ah Kh Qh Jh Zz"), &mut out),
            Err(CliError::Engine(GameError::InvalidCard(_)))
        ));
    }
}
