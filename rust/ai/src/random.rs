//! Bot that picks uniformly among the legal actions.

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{call_and_stack, Bot};
use holdem_engine::player::PlayerAction;
use holdem_engine::snapshot::GameSnapshot;

/// Seeded random player. Useful for shaking out engine edge cases in `sim`.
#[derive(Debug)]
pub struct RandomBot {
    rng: Mutex<ChaCha20Rng>,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl Bot for RandomBot {
    fn decide(&self, snapshot: &GameSnapshot, player_id: &str) -> PlayerAction {
        let (to_call, stack) = call_and_stack(snapshot, player_id);
        let Ok(mut rng) = self.rng.lock() else {
            return PlayerAction::Fold;
        };
        // all-in stays rare so hands reach later streets
        let roll: u32 = rng.random_range(0..20);
        match roll {
            0 => PlayerAction::AllIn,
            1..=3 if to_call > 0 => PlayerAction::Fold,
            4..=6 if stack > to_call + snapshot.big_blind => {
                let extra = rng.random_range(1..=4) * snapshot.big_blind;
                PlayerAction::Raise(snapshot.current_bet + extra)
            }
            _ if to_call == 0 => PlayerAction::Check,
            _ => PlayerAction::Call,
        }
    }

    fn name(&self) -> &str {
        "RandomBot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::config::GameOptions;
    use holdem_engine::manager::GameManager;

    #[test]
    fn random_bots_keep_chips_conserved() {
        let mut manager = GameManager::new();
        let id = manager
            .create_game(GameOptions::default().with_seed(3))
            .unwrap();
        for i in 0..5 {
            manager
                .add_player(id, format!("r{i}"), format!("R{i}"), 400)
                .unwrap();
        }
        let bot = RandomBot::new(17);
        for _ in 0..20 {
            if manager.next_hand(id).is_err() {
                break;
            }
            while manager.get_game(id).unwrap().hand_in_progress() {
                let game = manager.get_game(id).unwrap();
                let actor = game.current_player().unwrap().id().to_string();
                let snap = game.snapshot(Some(&actor));
                let action = bot.decide(&snap, &actor);
                manager.player_action(id, &actor, action).unwrap();
            }
            assert_eq!(manager.get_game(id).unwrap().total_chips(), 2_000);
        }
    }
}
