//! Card, board, and action formatters for terminal display.
//!
//! Unicode suit symbols are used where the terminal is likely to render
//! them; otherwise the ASCII letters `c d h s` stand in.
//!
//! ## Example
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let board = vec![ace_spades];
//! assert!(format_board(&board).starts_with("[A"));
//! ```

use holdem_engine::cards::{Card, Suit};
use holdem_engine::game::Payout;
use holdem_engine::player::PlayerAction;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> char {
    if supports_unicode() {
        suit.symbol()
    } else {
        suit.letter()
    }
}

/// Format a Card as rank followed by suit, e.g. "A♠" (Unicode) or "As" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.letter(), format_suit(card.suit))
}

/// Format a board (list of cards) as a string in bracket notation.
///
/// # Example
///
/// ```rust
/// use holdem_engine::cards::parse_cards;
/// # use holdem_cli::formatters::format_board;
///
/// let flop = parse_cards("As Kh Qd").unwrap();
/// let formatted = format_board(&flop);
/// assert!(formatted.starts_with("[A"));
/// assert!(formatted.ends_with("]"));
/// assert_eq!(format_board(&[]), "[]");
/// ```
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Format a PlayerAction as a human-readable string.
///
/// # Example
///
/// ```rust
/// use holdem_engine::player::PlayerAction;
/// # use holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::Fold), "fold");
/// assert_eq!(format_action(&PlayerAction::Raise(100)), "raise to 100");
/// assert_eq!(format_action(&PlayerAction::AllIn), "all-in");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Fold => "fold".to_string(),
        PlayerAction::Check => "check".to_string(),
        PlayerAction::Call => "call".to_string(),
        PlayerAction::Raise(to) => format!("raise to {}", to),
        PlayerAction::AllIn => "all-in".to_string(),
    }
}

/// One line per payout: `p1 wins 120` or `p1 wins 120 with Flush (...)`.
pub fn format_payout(payout: &Payout) -> String {
    match &payout.hand {
        Some(hand) => {
            let cards: Vec<String> = hand.cards.iter().map(format_card).collect();
            format!(
                "{} wins {} with {} [{}]",
                payout.player_id,
                payout.amount,
                hand.category,
                cards.join(" ")
            )
        }
        None => format!("{} wins {}", payout.player_id, payout.amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;
    use holdem_engine::hand::evaluate;

    #[test]
    fn test_format_card_uses_rank_letter() {
        let card = parse_cards("Td").unwrap()[0];
        let s = format_card(&card);
        assert!(s == "T♦" || s == "Td");
    }

    #[test]
    fn test_format_board_joins_with_spaces() {
        let board = parse_cards("2c 3c 4c").unwrap();
        assert_eq!(format_board(&board).split(' ').count(), 3);
    }

    #[test]
    fn test_format_action_raise_amount() {
        assert_eq!(format_action(&PlayerAction::Raise(60)), "raise to 60");
        assert_eq!(format_action(&PlayerAction::Check), "check");
        assert_eq!(format_action(&PlayerAction::Call), "call");
    }

    #[test]
    fn test_format_payout_with_and_without_hand() {
        let uncontested = Payout {
            player_id: "p1".into(),
            amount: 30,
            hand: None,
        };
        assert_eq!(format_payout(&uncontested), "p1 wins 30");

        let hand = evaluate(&parse_cards("As Ks Qs Js 9s").unwrap()).unwrap();
        let shown = Payout {
            player_id: "p2".into(),
            amount: 120,
            hand: Some(hand),
        };
        assert!(format_payout(&shown).starts_with("p2 wins 120 with Flush ["));
    }
}
