use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Hard limit on seats at one table.
pub const MAX_SEATS: usize = 10;

/// Table settings supplied when a game is created.
///
/// Every field has a default, so partial TOML or JSON documents deserialize.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameOptions {
    pub small_blind: u32,
    pub big_blind: u32,
    pub min_buy_in: u32,
    pub max_buy_in: u32,
    pub max_players: usize,
    pub min_players: usize,
    /// Seed for the deck RNG; random when absent
    pub seed: Option<u64>,
    /// Pause the caller should leave between hands
    pub next_hand_delay_ms: u64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            min_buy_in: 200,
            max_buy_in: 2_000,
            max_players: MAX_SEATS,
            min_players: 2,
            seed: None,
            next_hand_delay_ms: 3_000,
        }
    }
}

impl GameOptions {
    pub fn with_blinds(mut self, small_blind: u32, big_blind: u32) -> Self {
        self.small_blind = small_blind;
        self.big_blind = big_blind;
        self
    }

    pub fn with_buy_in(mut self, min: u32, max: u32) -> Self {
        self.min_buy_in = min;
        self.max_buy_in = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn next_hand_delay(&self) -> Duration {
        Duration::from_millis(self.next_hand_delay_ms)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |msg: &str| Err(GameError::InvalidOptions(msg.to_string()));
        if self.small_blind == 0 || self.big_blind == 0 {
            return invalid("blinds must be > 0");
        }
        if self.small_blind > self.big_blind {
            return invalid("small_blind must not exceed big_blind");
        }
        if self.min_buy_in < self.big_blind {
            return invalid("min_buy_in must cover the big blind");
        }
        if self.min_buy_in > self.max_buy_in {
            return invalid("min_buy_in must not exceed max_buy_in");
        }
        if self.min_players < 2 || self.min_players > self.max_players {
            return invalid("min_players must be between 2 and max_players");
        }
        if self.max_players > MAX_SEATS {
            return invalid("max_players must be <= 10");
        }
        // every chip on the table must fit in one pot
        if u64::from(self.max_buy_in) * self.max_players as u64 > u64::from(u32::MAX) {
            return invalid("max_buy_in times max_players must fit in a u32 pot");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameOptions::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_blinds_and_buy_ins() {
        let o = GameOptions::default().with_blinds(50, 20);
        assert!(matches!(o.validate(), Err(GameError::InvalidOptions(_))));
        let o = GameOptions::default().with_buy_in(500, 100);
        assert!(o.validate().is_err());
        let o = GameOptions {
            max_players: 11,
            ..GameOptions::default()
        };
        assert!(o.validate().is_err());
    }

    #[test]
    fn rejects_buy_ins_that_could_overflow_the_pot() {
        let o = GameOptions::default().with_buy_in(200, u32::MAX);
        assert!(matches!(o.validate(), Err(GameError::InvalidOptions(_))));

        let limit = u32::MAX / MAX_SEATS as u32;
        assert!(GameOptions::default().with_buy_in(200, limit).validate().is_ok());
        let o = GameOptions {
            max_players: 2,
            ..GameOptions::default().with_buy_in(200, u32::MAX / 2)
        };
        assert!(o.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let o: GameOptions = serde_json::from_str(r#"{"small_blind":5,"big_blind":10}"#).unwrap();
        assert_eq!(o.small_blind, 5);
        assert_eq!(o.max_players, 10);
        assert_eq!(o.next_hand_delay(), Duration::from_secs(3));
    }
}
