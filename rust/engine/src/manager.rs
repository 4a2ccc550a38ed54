use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GameOptions;
use crate::errors::GameError;
use crate::game::{ActionOutcome, HandOutcome, PokerGame, Round};
use crate::player::{PlayerAction, PlayerId};
use crate::snapshot::{render, GameSnapshot};

/// Handle of a table inside a [`GameManager`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when a player takes a seat.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerHandle {
    pub game_id: GameId,
    pub player_id: PlayerId,
    pub seat: usize,
}

/// Manager guarded for callers that create and delete games from several threads.
pub type SharedGameManager = Arc<Mutex<GameManager>>;

/// Registry of running tables keyed by [`GameId`].
///
/// Ids are handed out sequentially starting at 1 and never reused.
#[derive(Debug, Default)]
pub struct GameManager {
    games: HashMap<GameId, PokerGame>,
    next_id: u64,
}

impl GameManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedGameManager {
        Arc::new(Mutex::new(Self::new()))
    }

    pub fn create_game(&mut self, options: GameOptions) -> Result<GameId, GameError> {
        let id = GameId(self.next_id + 1);
        let game = PokerGame::new(id, options)?;
        self.next_id = id.0;
        info!(game = %id, "game created");
        self.games.insert(id, game);
        Ok(id)
    }

    /// Registers an already built table, e.g. one dealing from a stacked deck.
    pub fn insert_game(&mut self, game: PokerGame) -> Result<GameId, GameError> {
        let id = game.id();
        if self.games.contains_key(&id) {
            return Err(GameError::InvalidOptions(format!("game {id} already exists")));
        }
        self.next_id = self.next_id.max(id.0);
        self.games.insert(id, game);
        Ok(id)
    }

    pub fn get_game(&self, id: GameId) -> Result<&PokerGame, GameError> {
        self.games.get(&id).ok_or(GameError::GameNotFound(id))
    }

    pub fn get_game_mut(&mut self, id: GameId) -> Result<&mut PokerGame, GameError> {
        self.games.get_mut(&id).ok_or(GameError::GameNotFound(id))
    }

    pub fn delete_game(&mut self, id: GameId) -> Result<PokerGame, GameError> {
        let game = self.games.remove(&id).ok_or(GameError::GameNotFound(id))?;
        info!(game = %id, hands = game.hand_number(), "game deleted");
        Ok(game)
    }

    /// Ids of every game that has not finished, in creation order.
    pub fn active_games(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self
            .games
            .iter()
            .filter(|(_, g)| !g.is_finished())
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn add_player(
        &mut self,
        game_id: GameId,
        player_id: impl Into<PlayerId>,
        name: impl Into<String>,
        buy_in: u32,
    ) -> Result<PlayerHandle, GameError> {
        let player_id = player_id.into();
        let seat = self
            .get_game_mut(game_id)?
            .add_player(player_id.clone(), name, buy_in)?;
        Ok(PlayerHandle {
            game_id,
            player_id,
            seat,
        })
    }

    pub fn remove_player(
        &mut self,
        game_id: GameId,
        player_id: &str,
    ) -> Result<Option<HandOutcome>, GameError> {
        self.get_game_mut(game_id)?.remove_player(player_id)
    }

    /// Deals the first hand. Later hands go through [`GameManager::next_hand`].
    ///
    /// A table whose first hand was aborted is back in setup and can be
    /// started again.
    pub fn start(&mut self, game_id: GameId) -> Result<Option<HandOutcome>, GameError> {
        let game = self.get_game_mut(game_id)?;
        if game.round() != Round::Setup {
            return Err(GameError::GameInProgress);
        }
        game.start_new_hand()
    }

    /// Deals the next hand once the previous one has been settled.
    pub fn next_hand(&mut self, game_id: GameId) -> Result<Option<HandOutcome>, GameError> {
        let game = self.get_game_mut(game_id)?;
        if game.is_finished() {
            return Err(GameError::GameFinished);
        }
        game.start_new_hand()
    }

    pub fn player_action(
        &mut self,
        game_id: GameId,
        player_id: &str,
        action: PlayerAction,
    ) -> Result<ActionOutcome, GameError> {
        self.get_game_mut(game_id)?.player_action(player_id, action)
    }

    pub fn game_state(
        &self,
        game_id: GameId,
        viewer: Option<&str>,
    ) -> Result<GameSnapshot, GameError> {
        Ok(self.get_game(game_id)?.snapshot(viewer))
    }

    pub fn render(&self, game_id: GameId, viewer: Option<&str>) -> Result<String, GameError> {
        Ok(render(&self.game_state(game_id, viewer)?))
    }
}
