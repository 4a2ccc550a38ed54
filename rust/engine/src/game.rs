use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::cards::Card;
use crate::config::GameOptions;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, HandResult};
use crate::logger::{format_hand_id, ActionKind, ActionRecord, HandRecord, ShowdownInfo};
use crate::manager::GameId;
use crate::player::{Player, PlayerAction, PlayerId};
use crate::pot::{compute_side_pots, split_pot, SidePot};
use crate::rules::{validate_action, ValidatedAction};

/// Stage of the table's state machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Round {
    /// Seating players, no hand dealt yet (or the last hand was aborted)
    Setup,
    Preflop,
    Flop,
    Turn,
    River,
    /// Hand settled; waiting for the next one
    Showdown,
    /// Fewer than the minimum number of players have chips
    Finished,
}

impl Round {
    pub fn is_betting(self) -> bool {
        matches!(
            self,
            Round::Preflop | Round::Flop | Round::Turn | Round::River
        )
    }
}

/// Chips paid to one player at the end of a hand.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Payout {
    pub player_id: PlayerId,
    pub amount: u32,
    /// Best hand, when the pot was decided at showdown
    pub hand: Option<HandResult>,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandOutcome {
    pub hand_number: u32,
    pub pot: u32,
    pub winners: Vec<Payout>,
    pub pots: Vec<SidePot>,
    /// Everyone else folded; no cards were compared
    pub uncontested: bool,
    /// When the caller should start the next hand; `None` once the game is finished
    pub next_hand_in: Option<Duration>,
}

/// Returned for every accepted action.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub pot: u32,
    pub current_bet: u32,
    pub round: Round,
    /// Present when this action ended the hand
    pub hand: Option<HandOutcome>,
}

/// One poker table: seats, deck, board, pot and the betting state machine.
///
/// Every mutating call either applies completely or returns an error before
/// touching state. The only exception is an integrity failure, which aborts
/// the hand and refunds every bet.
#[derive(Debug, Clone)]
pub struct PokerGame {
    id: GameId,
    options: GameOptions,
    players: Vec<Player>,
    deck: Deck,
    community: Vec<Card>,
    pot: u32,
    current_bet: u32,
    round: Round,
    dealer: usize,
    small_blind_seat: usize,
    big_blind_seat: usize,
    current: Option<usize>,
    hand_number: u32,
    hand_start_chips: u64,
    action_log: Vec<ActionRecord>,
    departing: Vec<PlayerId>,
    last_outcome: Option<HandOutcome>,
    last_hand: Option<HandRecord>,
}

impl PokerGame {
    pub fn new(id: GameId, options: GameOptions) -> Result<Self, GameError> {
        let deck = match options.seed {
            Some(seed) => Deck::new_with_seed(seed),
            None => Deck::new(),
        };
        Self::with_deck(id, options, deck)
    }

    /// Table that deals from the given deck, e.g. a stacked one for replays.
    pub fn with_deck(id: GameId, options: GameOptions, deck: Deck) -> Result<Self, GameError> {
        options.validate()?;
        Ok(Self {
            id,
            players: Vec::with_capacity(options.max_players),
            options,
            deck,
            community: Vec::with_capacity(5),
            pot: 0,
            current_bet: 0,
            round: Round::Setup,
            dealer: 0,
            small_blind_seat: 0,
            big_blind_seat: 0,
            current: None,
            hand_number: 0,
            hand_start_chips: 0,
            action_log: Vec::new(),
            departing: Vec::new(),
            last_outcome: None,
            last_hand: None,
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }
    pub fn options(&self) -> &GameOptions {
        &self.options
    }
    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == id)
    }
    pub fn community_cards(&self) -> &[Card] {
        &self.community
    }
    pub fn pot(&self) -> u32 {
        self.pot
    }
    pub fn current_bet(&self) -> u32 {
        self.current_bet
    }
    pub fn round(&self) -> Round {
        self.round
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn blind_seats(&self) -> (usize, usize) {
        (self.small_blind_seat, self.big_blind_seat)
    }
    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }
    pub fn current_seat(&self) -> Option<usize> {
        self.current
    }
    pub fn current_player(&self) -> Option<&Player> {
        self.current.map(|i| &self.players[i])
    }
    /// Blinds and actions of the hand in progress (or the last one).
    pub fn action_log(&self) -> &[ActionRecord] {
        &self.action_log
    }
    pub fn last_outcome(&self) -> Option<&HandOutcome> {
        self.last_outcome.as_ref()
    }
    pub fn last_hand(&self) -> Option<&HandRecord> {
        self.last_hand.as_ref()
    }
    pub fn hand_in_progress(&self) -> bool {
        self.round.is_betting()
    }
    pub fn is_finished(&self) -> bool {
        self.round == Round::Finished
    }

    /// Chips on the table: every stack plus the pot.
    pub fn total_chips(&self) -> u64 {
        self.players
            .iter()
            .map(|p| u64::from(p.chips()))
            .sum::<u64>()
            + u64::from(self.pot)
    }

    fn seat_of(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    /// Seats a player between hands. Returns the seat index.
    pub fn add_player(
        &mut self,
        id: impl Into<PlayerId>,
        name: impl Into<String>,
        buy_in: u32,
    ) -> Result<usize, GameError> {
        let id = id.into();
        if self.hand_in_progress() {
            return Err(GameError::GameInProgress);
        }
        if self.seat_of(&id).is_some() {
            return Err(GameError::DuplicatePlayer(id));
        }
        if self.players.len() >= self.options.max_players {
            return Err(GameError::TableFull {
                max: self.options.max_players,
            });
        }
        if buy_in < self.options.min_buy_in || buy_in > self.options.max_buy_in {
            return Err(GameError::BuyInOutOfRange {
                amount: buy_in,
                min: self.options.min_buy_in,
                max: self.options.max_buy_in,
            });
        }
        info!(game = %self.id, player = %id, buy_in, "player seated");
        self.players.push(Player::new(id, name, buy_in));
        Ok(self.players.len() - 1)
    }

    /// Removes a player from the table.
    ///
    /// Between hands the seat is freed at once. During a hand the player
    /// folds immediately, keeping their committed chips in the pot, and the
    /// seat is freed when the next hand starts. Returns the hand outcome if
    /// the fold ended the hand.
    pub fn remove_player(&mut self, id: &str) -> Result<Option<HandOutcome>, GameError> {
        let seat = self
            .seat_of(id)
            .ok_or_else(|| GameError::UnknownPlayer(id.to_string()))?;
        if !self.hand_in_progress() {
            self.free_seat(seat);
            info!(game = %self.id, player = %id, "player left");
            return Ok(None);
        }
        if !self.departing.iter().any(|d| d == id) {
            self.departing.push(id.to_string());
        }
        let player = &mut self.players[seat];
        if player.is_folded() || player.is_all_in() {
            return Ok(None);
        }
        player.fold();
        info!(game = %self.id, player = %id, "player left mid-hand and folded");
        self.record(seat, ActionKind::Player(PlayerAction::Fold), 0);
        let actor = (self.current == Some(seat)).then_some(seat);
        self.progress(actor)
    }

    fn free_seat(&mut self, seat: usize) {
        self.players.remove(seat);
        if self.players.is_empty() {
            self.dealer = 0;
        } else if seat <= self.dealer && self.hand_number > 0 {
            // keep the button where the next rotation expects it
            self.dealer = match self.dealer {
                0 => self.players.len() - 1,
                d => d - 1,
            };
        } else if self.dealer >= self.players.len() {
            self.dealer = 0;
        }
    }

    /// Starts the next hand: rotates the button, posts blinds and deals.
    ///
    /// Busted and departed players are unseated first. Returns an outcome
    /// right away if the blinds put every player all-in and the hand ran out.
    pub fn start_new_hand(&mut self) -> Result<Option<HandOutcome>, GameError> {
        if self.hand_in_progress() {
            return Err(GameError::GameInProgress);
        }
        let available = self
            .players
            .iter()
            .filter(|p| p.chips() > 0 && !self.departing.iter().any(|d| d == p.id()))
            .count();
        if available < self.options.min_players {
            return Err(GameError::NotEnoughPlayers {
                required: self.options.min_players,
                available,
            });
        }

        let departing = std::mem::take(&mut self.departing);
        while let Some(seat) = self
            .players
            .iter()
            .position(|p| p.chips() == 0 || departing.iter().any(|d| d == p.id()))
        {
            debug!(game = %self.id, player = %self.players[seat].id(), "unseating player");
            self.free_seat(seat);
        }

        let n = self.players.len();
        if self.hand_number > 0 {
            self.dealer = (self.dealer + 1) % n;
        } else {
            self.dealer = 0;
        }
        if n == 2 {
            // heads-up: the button posts the small blind
            self.small_blind_seat = self.dealer;
            self.big_blind_seat = (self.dealer + 1) % n;
        } else {
            self.small_blind_seat = (self.dealer + 1) % n;
            self.big_blind_seat = (self.dealer + 2) % n;
        }

        for p in &mut self.players {
            p.reset_for_new_hand();
        }
        self.community.clear();
        self.pot = 0;
        self.current_bet = 0;
        self.action_log.clear();
        self.last_outcome = None;
        self.hand_number += 1;
        self.hand_start_chips = self.total_chips();
        self.deck.reset();
        self.round = Round::Preflop;

        let sb = self.small_blind_seat;
        let bb = self.big_blind_seat;
        let posted = self.players[sb].bet(self.options.small_blind);
        self.pot += posted;
        self.record(sb, ActionKind::SmallBlind, posted);
        let posted = self.players[bb].bet(self.options.big_blind);
        self.pot += posted;
        self.record(bb, ActionKind::BigBlind, posted);
        self.current_bet = self.players[sb]
            .bet_amount()
            .max(self.players[bb].bet_amount());

        for _ in 0..2 {
            for k in 1..=n {
                let seat = (self.dealer + k) % n;
                let dealt = self
                    .deck
                    .draw()
                    .and_then(|card| self.players[seat].give_card(card));
                if let Err(e) = dealt {
                    return Err(self.abort_hand(e));
                }
            }
        }

        info!(
            game = %self.id,
            hand = self.hand_number,
            dealer = %self.players[self.dealer].id(),
            players = n,
            "hand started"
        );

        self.current = self.next_to_act(bb);
        if self.is_betting_round_complete() {
            return self.finish_round();
        }
        Ok(None)
    }

    /// Applies `action` for `player_id`.
    ///
    /// Rejected actions return a validation error and leave the table untouched.
    pub fn player_action(
        &mut self,
        player_id: &str,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        let result = self.apply_action(player_id, action);
        if let Err(e) = &result {
            if e.is_recoverable() {
                warn!(game = %self.id, player = %player_id, ?action, error = %e, "action rejected");
            }
        }
        result
    }

    fn apply_action(
        &mut self,
        player_id: &str,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        if !self.hand_in_progress() {
            return Err(GameError::NoHandInProgress);
        }
        let seat = self
            .seat_of(player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))?;
        let player = &self.players[seat];
        if player.is_folded() {
            return Err(GameError::PlayerFolded(player_id.to_string()));
        }
        if !player.can_act() {
            return Err(GameError::PlayerInactive(player_id.to_string()));
        }
        let current = self.current.ok_or(GameError::NoHandInProgress)?;
        if current != seat {
            return Err(GameError::NotPlayersTurn {
                expected: self.players[current].id().to_string(),
                actual: player_id.to_string(),
            });
        }
        let validated = validate_action(player, self.current_bet, action)?;

        // validated: from here on the action is applied in full
        let player = &mut self.players[seat];
        let moved = match validated {
            ValidatedAction::Fold => {
                player.fold();
                0
            }
            ValidatedAction::Check => 0,
            other => player.bet(other.chips_moved()),
        };
        player.mark_acted();
        let new_bet = player.bet_amount();
        self.pot += moved;
        if new_bet > self.current_bet {
            self.current_bet = new_bet;
            for (i, p) in self.players.iter_mut().enumerate() {
                if i != seat && p.can_act() {
                    p.reopen_action();
                }
            }
        }
        self.record(seat, ActionKind::Player(action), moved);
        debug!(
            game = %self.id,
            hand = self.hand_number,
            player = %player_id,
            action = action.name(),
            moved,
            pot = self.pot,
            "action applied"
        );

        self.verify_chips()?;
        let pot = self.pot;
        let current_bet = self.current_bet;
        let hand = self.progress(Some(seat))?;
        Ok(ActionOutcome {
            pot: if hand.is_some() { pot } else { self.pot },
            current_bet: if hand.is_some() {
                current_bet
            } else {
                self.current_bet
            },
            round: self.round,
            hand,
        })
    }

    /// True when nobody still able to bet owes an action this round.
    ///
    /// That holds when no such player remains, when exactly one remains and
    /// has matched the current bet, or when all of them have matched it and
    /// acted at least once this round.
    pub fn is_betting_round_complete(&self) -> bool {
        let actors: Vec<&Player> = self.players.iter().filter(|p| p.can_act()).collect();
        match actors.as_slice() {
            [] => true,
            [only] => only.bet_amount() >= self.current_bet,
            many => many
                .iter()
                .all(|p| p.has_acted() && p.bet_amount() == self.current_bet),
        }
    }

    /// Moves to the next street, dealing a burn card and the new board cards.
    /// After the river this settles the hand instead.
    ///
    /// Fails without changing anything unless a hand is running and its
    /// betting round is complete.
    pub fn next_round(&mut self) -> Result<Option<HandOutcome>, GameError> {
        if !self.round.is_betting() {
            return Err(GameError::NoHandInProgress);
        }
        if !self.is_betting_round_complete() {
            return Err(GameError::BettingRoundOpen);
        }
        self.advance_street()
    }

    fn advance_street(&mut self) -> Result<Option<HandOutcome>, GameError> {
        let (next, count) = match self.round {
            Round::Preflop => (Round::Flop, 3),
            Round::Flop => (Round::Turn, 1),
            Round::Turn => (Round::River, 1),
            Round::River => return self.settle().map(Some),
            _ => return Err(GameError::NoHandInProgress),
        };
        for p in &mut self.players {
            p.reset_for_new_round();
        }
        self.current_bet = 0;
        let dealt = self
            .deck
            .burn()
            .and_then(|()| self.deck.draw_multiple(count));
        let cards = match dealt {
            Ok(cards) => cards,
            Err(e) => return Err(self.abort_hand(e)),
        };
        self.community.extend(cards);
        self.round = next;
        self.current = self.next_to_act(self.dealer);
        debug!(game = %self.id, hand = self.hand_number, round = ?next, board = ?self.community, "street dealt");
        Ok(None)
    }

    /// Settles the pot.
    ///
    /// A lone remaining player takes everything. Otherwise each side pot goes
    /// to the best hand among its eligible players; ties split it with the odd
    /// chips going to the first winners after the button.
    ///
    /// Only a running hand can be settled, and a contested one only once the
    /// river betting is complete.
    pub fn showdown(&mut self) -> Result<HandOutcome, GameError> {
        if !self.round.is_betting() {
            return Err(GameError::NoHandInProgress);
        }
        let contested = self.players.iter().filter(|p| p.in_hand()).count() > 1;
        if contested && !(self.round == Round::River && self.is_betting_round_complete()) {
            return Err(GameError::BettingRoundOpen);
        }
        self.settle()
    }

    fn settle(&mut self) -> Result<HandOutcome, GameError> {
        let contenders: Vec<usize> = (0..self.players.len())
            .filter(|&i| self.players[i].in_hand())
            .collect();
        let uncontested = contenders.len() == 1;

        let mut results: Vec<Option<HandResult>> = vec![None; self.players.len()];
        if !uncontested {
            for &i in &contenders {
                let mut cards = self.players[i].hole_cards().to_vec();
                cards.extend_from_slice(&self.community);
                match evaluate(&cards) {
                    Ok(r) => results[i] = Some(r),
                    Err(e) => return Err(self.abort_hand(e)),
                }
            }
        }

        let pots = compute_side_pots(&self.players);
        let distributed: u64 = pots.iter().map(|p| u64::from(p.amount)).sum();
        if distributed != u64::from(self.pot) {
            let e = GameError::ChipsNotConserved {
                expected: u64::from(self.pot),
                actual: distributed,
            };
            return Err(self.abort_hand(e));
        }

        let n = self.players.len();
        let mut won = vec![0u32; n];
        let mut split = false;
        for side in &pots {
            // eligible seats ordered from the first seat after the button
            let seats: Vec<usize> = (1..=n)
                .map(|k| (self.dealer + k) % n)
                .filter(|&i| side.eligible.iter().any(|e| e == self.players[i].id()))
                .collect();
            let best = seats
                .iter()
                .filter_map(|&i| results[i].as_ref().map(|r| r.value))
                .max();
            let winners: Vec<PlayerId> = seats
                .iter()
                .filter(|&&i| best.is_none() || results[i].as_ref().map(|r| r.value) == best)
                .map(|&i| self.players[i].id().to_string())
                .collect();
            split |= winners.len() > 1;
            for (id, amount) in split_pot(side.amount, &winners) {
                if let Some(i) = self.seat_of(&id) {
                    won[i] += amount;
                }
            }
        }

        let pot = self.pot;
        let mut winners = Vec::new();
        for (i, player) in self.players.iter_mut().enumerate() {
            player.award(won[i]);
            player.record_hand(won[i]);
            if won[i] > 0 {
                winners.push(Payout {
                    player_id: player.id().to_string(),
                    amount: won[i],
                    hand: results[i].clone(),
                });
            }
        }
        self.pot = 0;
        self.current = None;

        let remaining = self
            .players
            .iter()
            .filter(|p| p.chips() > 0 && !self.departing.iter().any(|d| d == p.id()))
            .count();
        let next_hand_in = if remaining >= self.options.min_players {
            self.round = Round::Showdown;
            Some(self.options.next_hand_delay())
        } else {
            self.round = Round::Finished;
            None
        };

        let outcome = HandOutcome {
            hand_number: self.hand_number,
            pot,
            winners,
            pots,
            uncontested,
            next_hand_in,
        };
        for w in &outcome.winners {
            info!(game = %self.id, hand = self.hand_number, player = %w.player_id, amount = w.amount, uncontested, "pot awarded");
        }
        if self.round == Round::Finished {
            info!(game = %self.id, hands = self.hand_number, "game finished");
        }
        self.last_hand = Some(self.hand_record(&outcome, split));
        self.last_outcome = Some(outcome.clone());
        Ok(outcome)
    }

    fn hand_record(&self, outcome: &HandOutcome, split: bool) -> HandRecord {
        let result = outcome
            .winners
            .iter()
            .map(|w| format!("{} wins {}", w.player_id, w.amount))
            .collect::<Vec<_>>()
            .join(", ");
        let showdown = (!outcome.uncontested).then(|| ShowdownInfo {
            winners: outcome.winners.iter().map(|w| w.player_id.clone()).collect(),
            notes: split.then(|| "split pot".to_string()),
        });
        HandRecord {
            hand_id: format_hand_id(&format!("game{}", self.id), self.hand_number),
            seed: self.options.seed,
            actions: self.action_log.clone(),
            board: self.community.clone(),
            result: Some(result),
            ts: None,
            showdown,
        }
    }

    /// Decides what follows an accepted action by `actor`.
    fn progress(&mut self, actor: Option<usize>) -> Result<Option<HandOutcome>, GameError> {
        if self.players.iter().filter(|p| p.in_hand()).count() <= 1 {
            return self.settle().map(Some);
        }
        if self.is_betting_round_complete() {
            return self.finish_round();
        }
        if let Some(seat) = actor {
            self.current = self.next_to_act(seat);
        }
        if self.current.is_none() {
            return self.finish_round();
        }
        Ok(None)
    }

    /// Deals further streets while nobody can bet, then returns the outcome
    /// if the hand reached showdown.
    fn finish_round(&mut self) -> Result<Option<HandOutcome>, GameError> {
        loop {
            if let Some(outcome) = self.advance_street()? {
                return Ok(Some(outcome));
            }
            if !self.is_betting_round_complete() {
                return Ok(None);
            }
        }
    }

    /// First seat after `from` that can bet and still owes an action.
    fn next_to_act(&self, from: usize) -> Option<usize> {
        let n = self.players.len();
        (1..=n).map(|k| (from + k) % n).find(|&i| {
            let p = &self.players[i];
            p.can_act() && (!p.has_acted() || p.bet_amount() < self.current_bet)
        })
    }

    fn record(&mut self, seat: usize, kind: ActionKind, amount: u32) {
        self.action_log.push(ActionRecord {
            hand: self.hand_number,
            round: self.round,
            player_id: self.players[seat].id().to_string(),
            kind,
            amount,
            pot: self.pot,
        });
    }

    fn verify_chips(&mut self) -> Result<(), GameError> {
        let actual = self.total_chips();
        if actual != self.hand_start_chips {
            let e = GameError::ChipsNotConserved {
                expected: self.hand_start_chips,
                actual,
            };
            return Err(self.abort_hand(e));
        }
        Ok(())
    }

    /// Fails the hand closed: refunds every committed chip and returns to setup.
    fn abort_hand(&mut self, cause: GameError) -> GameError {
        error!(
            game = %self.id,
            hand = self.hand_number,
            pot = self.pot,
            error = %cause,
            "integrity failure, hand aborted and bets refunded"
        );
        for p in &mut self.players {
            p.refund();
            p.reset_for_new_hand();
        }
        self.pot = 0;
        self.current_bet = 0;
        self.community.clear();
        self.current = None;
        self.round = Round::Setup;
        cause
    }
}
