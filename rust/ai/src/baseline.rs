//! Rule-based bot used for simulations and as the default opponent.
//!
//! Decisions are deterministic: the same snapshot always yields the same action.

use crate::{call_and_stack, Bot};
use holdem_engine::cards::Card;
use holdem_engine::game::Round;
use holdem_engine::hand::{evaluate, Category};
use holdem_engine::player::PlayerAction;
use holdem_engine::snapshot::GameSnapshot;

/// Simple rule-based strategy.
///
/// # Strategy
///
/// **Preflop:**
/// - Strong hands (high pairs 77+, AK, AQ): Raise or call
/// - Medium hands (suited connectors, Ax, small pairs): Call if cheap
/// - Weak hands: Fold to raises, check if free
///
/// **Postflop:**
/// - Strong hands (Two Pair+): Bet or call
/// - Medium hands (One Pair): Check or call small bets
/// - Weak hands: Calculate pot odds, fold if unfavorable
///
/// # Example
///
/// ```rust
/// use holdem_ai::baseline::BaselineBot;
/// use holdem_ai::Bot;
///
/// let bot = BaselineBot::new();
/// assert_eq!(bot.name(), "BaselineBot");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineBot;

impl BaselineBot {
    pub fn new() -> Self {
        Self
    }

    /// Preflop hand strength on a scale of 0-10.
    ///
    /// - 9-10: Premium hands (AA, KK, QQ, JJ, AKs)
    /// - 7-8: Strong hands (TT-99, AK, AQ, KQs)
    /// - 5-6: Medium hands (88-77, AJ, suited connectors)
    /// - 3-4: Marginal hands (66-22, Ax, broadway)
    /// - 0-2: Weak hands (offsuit low cards)
    fn preflop_strength(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank as u8;
        let r2 = hole[1].rank as u8;
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;
        let pick = |s: u8, o: u8| if suited { s } else { o };

        if r1 == r2 {
            return match high {
                13..=14 => 10,
                11..=12 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => pick(10, 8),
            (14, 12) => pick(8, 7),
            (14, 11) => pick(7, 6),
            (14, 10) => pick(6, 5),
            (14, _) => pick(5, 4),
            (13, 12) => pick(7, 6),
            (13, 11) => pick(6, 5),
            (13, 10) => pick(5, 4),
            (12, 11) => pick(6, 5),
            (12, 10) => pick(5, 4),
            _ if suited && high - low <= 2 => {
                if high >= 9 {
                    5
                } else {
                    4
                }
            }
            _ if high >= 11 && low >= 9 => 4,
            _ => 2,
        }
    }

    /// Postflop strength from the best hand over hole and board cards.
    fn postflop_strength(hole: [Card; 2], board: &[Card]) -> Option<u8> {
        let mut cards = hole.to_vec();
        cards.extend_from_slice(board);
        let result = evaluate(&cards).ok()?;

        let base = match result.category {
            Category::HighCard => 1,
            Category::Pair => 3,
            Category::TwoPair => 5,
            Category::ThreeOfAKind => 6,
            Category::Straight => 7,
            Category::Flush => 8,
            Category::FullHouse => 9,
            Category::FourOfAKind | Category::StraightFlush | Category::RoyalFlush => 10,
        };
        let kicker_boost = u8::from(result.cards[0].rank as u8 >= 12);
        Some((base + kicker_boost).min(10))
    }

    /// Pot odds as `pot / (pot + call)`.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }

    /// Picks an action. `raise_step` is the smallest raise increment the bot uses.
    fn decide_action(
        strength: u8,
        current_bet: u32,
        to_call: u32,
        raise_step: u32,
        stack: u32,
        pot: u32,
    ) -> PlayerAction {
        if to_call == 0 {
            return Self::decide_unopened(strength, current_bet, raise_step, stack, pot);
        }
        if to_call >= stack {
            return if strength >= 7 {
                PlayerAction::AllIn
            } else {
                PlayerAction::Fold
            };
        }

        let odds = Self::pot_odds(pot, to_call);
        match strength {
            9..=10 => {
                let extra = (pot / 2).max(raise_step);
                if to_call + extra < stack {
                    PlayerAction::Raise(current_bet + extra)
                } else {
                    PlayerAction::Call
                }
            }
            7..=8 => PlayerAction::Call,
            5..=6 if odds >= 0.7 || to_call <= pot / 4 => PlayerAction::Call,
            3..=4 if odds >= 0.8 || to_call <= pot / 6 => PlayerAction::Call,
            _ => PlayerAction::Fold,
        }
    }

    /// Nothing to call: bet strong hands for value, check the rest.
    fn decide_unopened(
        strength: u8,
        current_bet: u32,
        raise_step: u32,
        stack: u32,
        pot: u32,
    ) -> PlayerAction {
        let size = match strength {
            9..=10 => pot * 2 / 3,
            7..=8 => pot / 2,
            _ => return PlayerAction::Check,
        };
        let extra = size.max(raise_step);
        if extra < stack {
            PlayerAction::Raise(current_bet + extra)
        } else {
            PlayerAction::Check
        }
    }
}

impl Bot for BaselineBot {
    fn decide(&self, snapshot: &GameSnapshot, player_id: &str) -> PlayerAction {
        let (to_call, stack) = call_and_stack(snapshot, player_id);
        let hole = match snapshot
            .player(player_id)
            .and_then(|p| p.hole_cards.as_deref())
        {
            Some([a, b]) => [*a, *b],
            _ => {
                return if to_call == 0 {
                    PlayerAction::Check
                } else {
                    PlayerAction::Fold
                };
            }
        };

        let strength = match snapshot.round {
            Round::Flop | Round::Turn | Round::River => {
                Self::postflop_strength(hole, &snapshot.community_cards)
                    .unwrap_or_else(|| Self::preflop_strength(hole))
            }
            _ => Self::preflop_strength(hole),
        };

        Self::decide_action(
            strength,
            snapshot.current_bet,
            to_call,
            snapshot.big_blind,
            stack,
            snapshot.pot,
        )
    }

    fn name(&self) -> &str {
        "BaselineBot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;
    use holdem_engine::config::GameOptions;
    use holdem_engine::manager::GameManager;

    fn hole(s: &str) -> [Card; 2] {
        let v = parse_cards(s).unwrap();
        [v[0], v[1]]
    }

    #[test]
    fn premium_pairs_and_big_slick() {
        assert_eq!(BaselineBot::preflop_strength(hole("Ah As")), 10);
        assert_eq!(BaselineBot::preflop_strength(hole("Kh Ks")), 10);
        assert_eq!(BaselineBot::preflop_strength(hole("Ah Kh")), 10);
        assert_eq!(BaselineBot::preflop_strength(hole("Ah Ks")), 8);
    }

    #[test]
    fn weak_and_suited_connectors() {
        assert!(BaselineBot::preflop_strength(hole("7h 2s")) <= 3);
        let sc = BaselineBot::preflop_strength(hole("9h 8h"));
        assert!((4..=6).contains(&sc));
    }

    #[test]
    fn pot_odds_calculation() {
        assert!((BaselineBot::pot_odds(100, 50) - 0.667).abs() < 0.01);
        assert_eq!(BaselineBot::pot_odds(100, 0), 1.0);
    }

    #[test]
    fn postflop_uses_flop_without_padding() {
        let s = BaselineBot::postflop_strength(hole("Ah As"), &parse_cards("Ad Kc Qh").unwrap());
        assert!(s.unwrap() >= 6);
    }

    #[test]
    fn short_stack_facing_bet_shoves_or_folds() {
        assert_eq!(
            BaselineBot::decide_action(8, 400, 300, 20, 200, 500),
            PlayerAction::AllIn
        );
        assert_eq!(
            BaselineBot::decide_action(4, 400, 300, 20, 200, 500),
            PlayerAction::Fold
        );
    }

    #[test]
    fn raises_are_always_above_the_current_bet() {
        match BaselineBot::decide_action(10, 20, 10, 20, 1_000, 30) {
            PlayerAction::Raise(to) => assert!(to > 20),
            other => panic!("expected raise, got {other:?}"),
        }
        match BaselineBot::decide_unopened(8, 0, 20, 1_000, 100) {
            PlayerAction::Raise(to) => assert_eq!(to, 50),
            other => panic!("expected bet, got {other:?}"),
        }
    }

    #[test]
    fn bots_play_a_full_hand_without_illegal_actions() {
        let mut manager = GameManager::new();
        let id = manager
            .create_game(GameOptions::default().with_seed(42))
            .unwrap();
        for i in 0..4 {
            manager
                .add_player(id, format!("b{i}"), format!("Bot {i}"), 500)
                .unwrap();
        }
        let bot = BaselineBot::new();
        manager.start(id).unwrap();
        for _ in 0..200 {
            let game = manager.get_game(id).unwrap();
            if !game.hand_in_progress() {
                break;
            }
            let actor = game.current_player().unwrap().id().to_string();
            let snapshot = manager.game_state(id, Some(&actor)).unwrap();
            let action = bot.decide(&snapshot, &actor);
            manager.player_action(id, &actor, action).unwrap();
        }
        assert!(!manager.get_game(id).unwrap().hand_in_progress());
    }

    #[test]
    fn without_cards_checks_or_folds() {
        let mut manager = GameManager::new();
        let id = manager.create_game(GameOptions::default()).unwrap();
        manager.add_player(id, "a", "A", 500).unwrap();
        let snapshot = manager.game_state(id, Some("a")).unwrap();
        assert_eq!(BaselineBot::new().decide(&snapshot, "a"), PlayerAction::Check);
    }
}
