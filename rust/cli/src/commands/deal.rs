//! Deal command handler: deals one hand straight from a deck and shows
//! every player's best hand, without any betting.

use std::cmp::Ordering;
use std::io::Write;

use holdem_engine::deck::Deck;
use holdem_engine::hand::{compare_hands, evaluate};

use crate::error::CliError;
use crate::formatters::format_board;
use crate::validation::validate_player_count;

/// Handle the deal command.
///
/// The same seed always deals the same cards.
///
/// # Examples
///
/// ```ignore
/// let mut out = Vec::new();
/// handle_deal_command(3, Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(
    players: usize,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    validate_player_count(players).map_err(CliError::InvalidInput)?;
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.reset();

    let mut holes = vec![Vec::with_capacity(2); players];
    for _ in 0..2 {
        for hole in holes.iter_mut() {
            hole.push(deck.draw()?);
        }
    }
    let mut board = Vec::with_capacity(5);
    for n in [3, 1, 1] {
        deck.burn()?;
        board.extend(deck.draw_multiple(n)?);
    }

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Board: {}", format_board(&board))?;
    let mut results = Vec::with_capacity(players);
    for (i, hole) in holes.iter().enumerate() {
        let mut cards = hole.clone();
        cards.extend_from_slice(&board);
        let result = evaluate(&cards)?;
        writeln!(
            out,
            "P{}: {}  {} {}",
            i + 1,
            format_board(hole),
            result.category,
            format_board(&result.cards)
        )?;
        results.push(result);
    }

    let mut best: Vec<usize> = Vec::new();
    for (i, result) in results.iter().enumerate() {
        match best.first().map(|&b| compare_hands(result, &results[b])) {
            None | Some(Ordering::Greater) => best = vec![i],
            Some(Ordering::Equal) => best.push(i),
            Some(Ordering::Less) => {}
        }
    }
    let names: Vec<String> = best.iter().map(|i| format!("P{}", i + 1)).collect();
    writeln!(out, "Best: {}", names.join(", "))?;
    Ok(())
}
