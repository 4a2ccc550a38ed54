//! # holdem-engine: Texas Hold'em Table Engine
//!
//! A multi-player Texas Hold'em engine for 2 to 10 seats. Provides card and
//! deck modeling, hand evaluation, a turn-based betting state machine with
//! side pots, and hand-history records. The engine performs no I/O and holds
//! no timers; callers submit actions and render the returned state.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Seedable ChaCha20 deck with Fisher-Yates shuffling
//! - [`hand`] - Hand evaluation for 5 to 7 cards
//! - [`player`] - Player state, actions, and stack management
//! - [`rules`] - Action validation against the current bet
//! - [`pot`] - Side pot calculation and split remainder policy
//! - [`game`] - The per-table state machine (`PokerGame`)
//! - [`manager`] - Registry of tables keyed by `GameId`
//! - [`snapshot`] - Viewer-specific state snapshots and text rendering
//! - [`logger`] - Action log and JSONL hand history
//! - [`config`] - Table options and their validation
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::hand::{evaluate, Category};
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let result = evaluate(&cards).unwrap();
//! assert_eq!(result.category, Category::RoyalFlush);
//! ```
//!
//! ## Running a Table
//!
//! ```rust
//! use holdem_engine::config::GameOptions;
//! use holdem_engine::manager::GameManager;
//! use holdem_engine::player::PlayerAction;
//!
//! let mut manager = GameManager::new();
//! let id = manager.create_game(GameOptions::default().with_seed(7)).unwrap();
//! manager.add_player(id, "alice", "Alice", 500).unwrap();
//! manager.add_player(id, "bob", "Bob", 500).unwrap();
//! manager.add_player(id, "carol", "Carol", 500).unwrap();
//! manager.start(id).unwrap();
//!
//! // alice has the button; bob and carol posted 10/20
//! manager.player_action(id, "alice", PlayerAction::Fold).unwrap();
//! let outcome = manager.player_action(id, "bob", PlayerAction::Fold).unwrap();
//!
//! let hand = outcome.hand.unwrap();
//! assert!(hand.uncontested);
//! assert_eq!(hand.winners[0].player_id, "carol");
//! assert_eq!(hand.winners[0].amount, 30);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All game outcomes are reproducible using a seeded RNG:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.reset();
//! b.reset();
//! assert_eq!(a.draw_multiple(5).unwrap(), b.draw_multiple(5).unwrap());
//! ```

pub mod cards;
pub mod config;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod logger;
pub mod manager;
pub mod player;
pub mod pot;
pub mod rules;
pub mod snapshot;
