//! # holdem-ai: Computer Players for holdem-engine
//!
//! Bots decide from the same [`GameSnapshot`] a human at the table would see,
//! so they never look at other players' hole cards.
//!
//! ## Core Components
//!
//! - [`Bot`] - Trait defining the interface for decision-making
//! - [`baseline`] - Rule-based bot driven by hand strength and pot odds
//! - [`random`] - Seeded bot that picks legal actions at random
//! - [`create_bot`] - Factory for bots by name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::{create_bot, Bot};
//! use holdem_engine::config::GameOptions;
//! use holdem_engine::manager::GameManager;
//!
//! let mut manager = GameManager::new();
//! let id = manager.create_game(GameOptions::default().with_seed(42)).unwrap();
//! manager.add_player(id, "bot1", "Bot 1", 500).unwrap();
//! manager.add_player(id, "bot2", "Bot 2", 500).unwrap();
//! manager.start(id).unwrap();
//!
//! let bot = create_bot("baseline", 0).unwrap();
//! let snapshot = manager.game_state(id, Some("bot1")).unwrap();
//! let action = bot.decide(&snapshot, "bot1");
//! manager.player_action(id, "bot1", action).unwrap();
//! ```

use holdem_engine::player::PlayerAction;
use holdem_engine::snapshot::GameSnapshot;
use thiserror::Error;

pub mod baseline;
pub mod random;

/// Interface shared by every computer player.
///
/// # Example Implementation
///
/// ```rust
/// use holdem_ai::Bot;
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::snapshot::GameSnapshot;
///
/// struct CallingStation;
///
/// impl Bot for CallingStation {
///     fn decide(&self, _snapshot: &GameSnapshot, _player_id: &str) -> PlayerAction {
///         PlayerAction::Call
///     }
///
///     fn name(&self) -> &str {
///         "CallingStation"
///     }
/// }
/// ```
pub trait Bot: Send + Sync {
    /// Chooses an action for `player_id` given the table as that player sees it.
    ///
    /// The returned action is always legal for the snapshot it was computed from.
    fn decide(&self, snapshot: &GameSnapshot, player_id: &str) -> PlayerAction;

    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown bot type: {0} (expected baseline or random)")]
pub struct UnknownBot(pub String);

/// Bot names accepted by [`create_bot`].
pub const BOT_TYPES: [&str; 2] = ["baseline", "random"];

/// Creates a bot by name. `seed` only affects bots that use randomness.
///
/// ```rust
/// use holdem_ai::create_bot;
///
/// assert_eq!(create_bot("baseline", 0).unwrap().name(), "BaselineBot");
/// assert!(create_bot("shark", 0).is_err());
/// ```
pub fn create_bot(kind: &str, seed: u64) -> Result<Box<dyn Bot>, UnknownBot> {
    match kind.to_ascii_lowercase().as_str() {
        "baseline" => Ok(Box::new(baseline::BaselineBot::new())),
        "random" => Ok(Box::new(random::RandomBot::new(seed))),
        other => Err(UnknownBot(other.to_string())),
    }
}

/// Chips `player_id` must add to stay in, and their remaining stack.
pub(crate) fn call_and_stack(snapshot: &GameSnapshot, player_id: &str) -> (u32, u32) {
    snapshot
        .player(player_id)
        .map(|p| (snapshot.current_bet.saturating_sub(p.bet), p.chips))
        .unwrap_or((0, 0))
}
