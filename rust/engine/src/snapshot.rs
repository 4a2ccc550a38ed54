use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::{HandOutcome, PokerGame, Round};
use crate::manager::GameId;
use crate::player::PlayerId;

/// What one viewer may see of a seated player.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub chips: u32,
    pub bet: u32,
    pub total_bet: u32,
    pub is_active: bool,
    pub is_folded: bool,
    pub is_all_in: bool,
    pub is_dealer: bool,
    /// `None` when the cards are hidden from the viewer
    pub hole_cards: Option<Vec<Card>>,
}

/// Public table state as seen by one viewer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game_id: GameId,
    pub round: Round,
    pub hand_number: u32,
    pub pot: u32,
    pub current_bet: u32,
    pub small_blind: u32,
    pub big_blind: u32,
    pub community_cards: Vec<Card>,
    pub dealer: usize,
    pub current_player: Option<PlayerId>,
    pub players: Vec<PlayerView>,
    pub last_outcome: Option<HandOutcome>,
}

impl GameSnapshot {
    pub fn player(&self, id: &str) -> Option<&PlayerView> {
        self.players.iter().find(|p| p.id == id)
    }
}

impl PokerGame {
    /// Snapshot for `viewer`, or for a spectator when `None`.
    ///
    /// Hole cards are visible to their owner. After a contested showdown the
    /// cards of every player who did not fold are visible to everyone.
    pub fn snapshot(&self, viewer: Option<&str>) -> GameSnapshot {
        let revealed = matches!(self.round(), Round::Showdown | Round::Finished)
            && self.last_outcome().is_some_and(|o| !o.uncontested);
        let players = self
            .players()
            .iter()
            .enumerate()
            .map(|(seat, p)| {
                let visible = !p.hole_cards().is_empty()
                    && (viewer == Some(p.id()) || (revealed && !p.is_folded()));
                PlayerView {
                    id: p.id().to_string(),
                    name: p.name().to_string(),
                    chips: p.chips(),
                    bet: p.bet_amount(),
                    total_bet: p.total_bet(),
                    is_active: p.is_active(),
                    is_folded: p.is_folded(),
                    is_all_in: p.is_all_in(),
                    is_dealer: seat == self.dealer() && self.hand_number() > 0,
                    hole_cards: visible.then(|| p.hole_cards().to_vec()),
                }
            })
            .collect();
        GameSnapshot {
            game_id: self.id(),
            round: self.round(),
            hand_number: self.hand_number(),
            pot: self.pot(),
            current_bet: self.current_bet(),
            small_blind: self.options().small_blind,
            big_blind: self.options().big_blind,
            community_cards: self.community_cards().to_vec(),
            dealer: self.dealer(),
            current_player: self.current_player().map(|p| p.id().to_string()),
            players,
            last_outcome: self.last_outcome().cloned(),
        }
    }
}

fn cards_text(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain-text table view.
pub fn render(s: &GameSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Game {} | hand #{} | {:?} | blinds {}/{}",
        s.game_id, s.hand_number, s.round, s.small_blind, s.big_blind
    );
    let board = if s.community_cards.is_empty() {
        "-".to_string()
    } else {
        cards_text(&s.community_cards)
    };
    let _ = writeln!(out, "Board: {}  Pot: {}  To call: {}", board, s.pot, s.current_bet);
    for p in &s.players {
        let marker = if s.current_player.as_deref() == Some(p.id.as_str()) {
            '>'
        } else {
            ' '
        };
        let button = if p.is_dealer { "(D)" } else { "   " };
        let cards = match &p.hole_cards {
            Some(c) => cards_text(c),
            None if p.is_folded => "--".to_string(),
            None => "?? ??".to_string(),
        };
        let status = if p.is_folded {
            " folded"
        } else if p.is_all_in {
            " all-in"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "{marker}{button} {:<12} {:>6} chips  bet {:>5}  [{}]{}",
            p.name, p.chips, p.bet, cards, status
        );
    }
    if let Some(o) = &s.last_outcome {
        for w in &o.winners {
            match &w.hand {
                Some(h) => {
                    let _ = writeln!(out, "{} wins {} with {}", w.player_id, w.amount, h);
                }
                None => {
                    let _ = writeln!(out, "{} wins {}", w.player_id, w.amount);
                }
            }
        }
    }
    out
}
