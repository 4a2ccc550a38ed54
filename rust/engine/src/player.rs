use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// Opaque player identifier supplied by the caller.
pub type PlayerId = String;

/// Represents a player action during a betting round.
/// Only `Raise` carries an amount: the player's total bet for the round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "amount", rename_all = "lowercase")]
pub enum PlayerAction {
    /// Fold and forfeit the hand
    Fold,
    /// Check (only valid when the player's bet matches the current bet)
    Check,
    /// Match the current bet, going all-in when short
    Call,
    /// Raise the round bet to the given total
    Raise(u32),
    /// Bet all remaining chips
    AllIn,
}

impl PlayerAction {
    pub fn name(&self) -> &'static str {
        match self {
            PlayerAction::Fold => "fold",
            PlayerAction::Check => "check",
            PlayerAction::Call => "call",
            PlayerAction::Raise(_) => "raise",
            PlayerAction::AllIn => "allin",
        }
    }
}

/// Lifetime statistics kept across hands.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub hands_played: u32,
    pub hands_won: u32,
    pub chips_won: u64,
}

/// A seated player with their stack, hole cards and per-hand betting state.
///
/// `is_folded` and `is_all_in` are never both set. `is_active` is false
/// exactly when the player has folded or has no chips behind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    chips: u32,
    hole: Vec<Card>,
    bet: u32,
    total_bet: u32,
    is_active: bool,
    is_folded: bool,
    is_all_in: bool,
    has_acted: bool,
    stats: PlayerStats,
}

impl Player {
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, chips: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chips,
            hole: Vec::with_capacity(2),
            bet: 0,
            total_bet: 0,
            is_active: chips > 0,
            is_folded: false,
            is_all_in: false,
            has_acted: false,
            stats: PlayerStats::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn hole_cards(&self) -> &[Card] {
        &self.hole
    }
    pub fn bet_amount(&self) -> u32 {
        self.bet
    }
    pub fn total_bet(&self) -> u32 {
        self.total_bet
    }
    pub fn is_active(&self) -> bool {
        self.is_active
    }
    pub fn is_folded(&self) -> bool {
        self.is_folded
    }
    pub fn is_all_in(&self) -> bool {
        self.is_all_in
    }
    pub fn has_acted(&self) -> bool {
        self.has_acted
    }
    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    /// Still contesting the pot (all-in players included).
    pub fn in_hand(&self) -> bool {
        !self.is_folded
    }

    /// Able to take a betting action.
    pub fn can_act(&self) -> bool {
        self.is_active && !self.is_folded && !self.is_all_in
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        if self.hole.len() >= 2 {
            return Err(GameError::InvalidCardCount(self.hole.len() + 1));
        }
        self.hole.push(c);
        Ok(())
    }

    pub fn clear_cards(&mut self) {
        self.hole.clear();
    }

    /// Moves up to `amount` chips from the stack into the current bet.
    ///
    /// A request larger than the stack is clamped to the whole stack. Returns
    /// the chips actually moved.
    pub fn bet(&mut self, amount: u32) -> u32 {
        let moved = amount.min(self.chips);
        self.chips -= moved;
        self.bet += moved;
        self.total_bet += moved;
        if self.chips == 0 && moved > 0 {
            self.is_all_in = true;
            self.is_active = false;
        }
        moved
    }

    pub fn fold(&mut self) {
        self.is_folded = true;
        self.is_active = false;
    }

    pub fn check(&self, current_bet: u32) -> Result<(), GameError> {
        if self.bet == current_bet {
            Ok(())
        } else {
            Err(GameError::CannotCheck {
                bet: self.bet,
                current_bet,
            })
        }
    }

    pub(crate) fn mark_acted(&mut self) {
        self.has_acted = true;
    }

    pub(crate) fn reopen_action(&mut self) {
        self.has_acted = false;
    }

    pub fn award(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Returns every chip committed this hand to the stack.
    pub(crate) fn refund(&mut self) -> u32 {
        let refunded = self.total_bet;
        self.chips = self.chips.saturating_add(refunded);
        self.bet = 0;
        self.total_bet = 0;
        refunded
    }

    pub(crate) fn record_hand(&mut self, won: u32) {
        self.stats.hands_played += 1;
        if won > 0 {
            self.stats.hands_won += 1;
            self.stats.chips_won += u64::from(won);
        }
    }

    pub fn reset_for_new_round(&mut self) {
        self.bet = 0;
        self.has_acted = false;
    }

    pub fn reset_for_new_hand(&mut self) {
        self.hole.clear();
        self.bet = 0;
        self.total_bet = 0;
        self.is_folded = false;
        self.is_all_in = false;
        self.has_acted = false;
        self.is_active = self.chips > 0;
    }
}
