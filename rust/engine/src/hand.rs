use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};
use crate::errors::GameError;

/// Hand categories, ordinal 1 (high card) through 10 (royal flush).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of evaluating a hand.
///
/// `value` orders all hands totally: the category sits in bits 20..24 and the
/// five ranks that decide ties follow as 4-bit nibbles, highest group first.
/// `cards` holds the five contributing cards in that same order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandResult {
    pub category: Category,
    pub value: u32,
    pub cards: [Card; 5],
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (", self.category)?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str(")")
    }
}

/// Evaluates the best five-card hand out of 5 to 7 cards.
///
/// Six and seven card inputs are solved by evaluating every five-card subset
/// and keeping the highest `value`.
///
/// # Errors
///
/// Returns [`GameError::InvalidCardCount`] for fewer than 5 or more than 7 cards.
///
/// # Examples
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::hand::{evaluate, Category};
///
/// let cards = parse_cards("Ts Js Qs Ks As 2c 3d").unwrap();
/// let result = evaluate(&cards).unwrap();
/// assert_eq!(result.category, Category::RoyalFlush);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandResult, GameError> {
    let n = cards.len();
    if !(5..=7).contains(&n) {
        return Err(GameError::InvalidCardCount(n));
    }
    let mut best: Option<HandResult> = None;
    for mask in 0u32..(1 << n) {
        if mask.count_ones() != 5 {
            continue;
        }
        let mut five = [cards[0]; 5];
        let mut k = 0;
        for (i, &c) in cards.iter().enumerate() {
            if mask & (1 << i) != 0 {
                five[k] = c;
                k += 1;
            }
        }
        let result = evaluate_five(&five);
        if best.as_ref().map_or(true, |b| result.value > b.value) {
            best = Some(result);
        }
    }
    best.ok_or(GameError::InvalidCardCount(n))
}

pub fn evaluate_five(cards: &[Card; 5]) -> HandResult {
    let mut sorted = *cards;
    sorted.sort_unstable_by(|a, b| b.rank.cmp(&a.rank));

    // (count, rank), biggest group first, then highest rank
    let mut groups: Vec<(u8, Rank)> = Vec::with_capacity(5);
    for c in &sorted {
        match groups.iter_mut().find(|g| g.1 == c.rank) {
            Some(g) => g.0 += 1,
            None => groups.push((1, c.rank)),
        }
    }
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let flush = sorted.iter().all(|c| c.suit == sorted[0].suit);
    let straight = straight_high(&sorted);

    let category = match (flush, straight) {
        (true, Some(14)) => Category::RoyalFlush,
        (true, Some(_)) => Category::StraightFlush,
        _ if groups[0].0 == 4 => Category::FourOfAKind,
        _ if groups[0].0 == 3 && groups[1].0 == 2 => Category::FullHouse,
        (true, None) => Category::Flush,
        (false, Some(_)) => Category::Straight,
        _ if groups[0].0 == 3 => Category::ThreeOfAKind,
        _ if groups[0].0 == 2 && groups[1].0 == 2 => Category::TwoPair,
        _ if groups[0].0 == 2 => Category::Pair,
        _ => Category::HighCard,
    };

    let group_size = |r: Rank| groups.iter().find(|g| g.1 == r).map_or(0, |g| g.0);
    sorted.sort_by(|a, b| {
        group_size(b.rank)
            .cmp(&group_size(a.rank))
            .then(b.rank.cmp(&a.rank))
    });

    let wheel = straight == Some(5);
    if wheel {
        // ace plays low
        sorted.rotate_left(1);
    }

    let mut value = (category as u32) << 20;
    for (i, c) in sorted.iter().enumerate() {
        let r = if wheel && c.rank == Rank::Ace {
            1
        } else {
            c.rank as u32
        };
        value |= r << (4 * (4 - i));
    }

    HandResult {
        category,
        value,
        cards: sorted,
    }
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    a.value.cmp(&b.value)
}

/// High card of a straight in rank-descending `sorted`, 5 for the wheel.
fn straight_high(sorted: &[Card; 5]) -> Option<u8> {
    let ranks: Vec<u8> = sorted.iter().map(|c| c.rank as u8).collect();
    let distinct = ranks.windows(2).all(|w| w[0] != w[1]);
    if !distinct {
        return None;
    }
    if ranks[0] - ranks[4] == 4 {
        Some(ranks[0])
    } else if ranks == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}
