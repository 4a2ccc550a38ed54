use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck drawn from the top.
///
/// Cards are kept in reverse draw order so that drawing is a `pop`. A stacked
/// deck replays a fixed order on every [`Deck::reset`] instead of shuffling.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha20Rng,
    preset: Option<Vec<Card>>,
}

impl Deck {
    pub fn new() -> Self {
        Self::new_with_seed(rand::random())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until reset is called
        let mut cards = full_deck();
        cards.reverse();
        Self {
            cards,
            rng,
            preset: None,
        }
    }

    /// Deck that deals `order[0]` first, then `order[1]`, and so on.
    pub fn stacked(order: Vec<Card>) -> Self {
        let mut cards = order.clone();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha20Rng::seed_from_u64(0),
            preset: Some(order),
        }
    }

    /// Rebuilds all 52 cards and shuffles them (Fisher-Yates).
    pub fn reset(&mut self) {
        match &self.preset {
            Some(order) => {
                self.cards = order.clone();
                self.cards.reverse();
            }
            None => {
                self.cards = full_deck();
                self.cards.shuffle(&mut self.rng);
            }
        }
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        self.cards.pop().ok_or(GameError::EmptyDeck)
    }

    /// Draws `n` cards, or none at all if fewer than `n` remain.
    pub fn draw_multiple(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        if n > self.cards.len() {
            return Err(GameError::EmptyDeck);
        }
        let split = self.cards.len() - n;
        let mut drawn = self.cards.split_off(split);
        drawn.reverse();
        Ok(drawn)
    }

    pub fn burn(&mut self) -> Result<(), GameError> {
        self.draw().map(|_| ())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn stacked_deck_deals_in_given_order_after_reset() {
        let order = vec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Clubs),
        ];
        let mut deck = Deck::stacked(order.clone());
        assert_eq!(deck.draw().unwrap(), order[0]);
        deck.reset();
        assert_eq!(deck.draw_multiple(2).unwrap(), order);
        assert!(deck.is_empty());
    }

    #[test]
    fn failed_draw_multiple_removes_nothing() {
        let mut deck = Deck::new_with_seed(3);
        deck.reset();
        deck.draw_multiple(50).unwrap();
        assert_eq!(deck.draw_multiple(3), Err(GameError::EmptyDeck));
        assert_eq!(deck.remaining(), 2);
    }
}
