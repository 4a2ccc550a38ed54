//! Table driver shared by `play` and `sim`: seats players, deals hands and
//! plays the bots' turns.

use holdem_ai::Bot;
use holdem_engine::config::GameOptions;
use holdem_engine::errors::GameError;
use holdem_engine::game::{ActionOutcome, HandOutcome, PokerGame};
use holdem_engine::manager::{GameId, GameManager};
use holdem_engine::player::PlayerAction;
use tracing::warn;

use crate::error::CliError;

pub(crate) struct Table {
    pub manager: GameManager,
    pub game: GameId,
    bot: Box<dyn Bot>,
}

/// Why no further hand could be dealt.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum TableClosed {
    /// Only one player has chips left
    Winner(String),
    NotEnoughPlayers,
}

impl Table {
    pub fn seat(
        options: GameOptions,
        players: &[(String, String)],
        buy_in: u32,
        bot: Box<dyn Bot>,
    ) -> Result<Self, CliError> {
        let mut manager = GameManager::new();
        let game = manager.create_game(options)?;
        for (id, name) in players {
            manager.add_player(game, id.as_str(), name.as_str(), buy_in)?;
        }
        Ok(Self { manager, game, bot })
    }

    pub fn game(&self) -> Result<&PokerGame, CliError> {
        Ok(self.manager.get_game(self.game)?)
    }

    /// Deals the next hand, or reports why the table is closed.
    ///
    /// `Ok(Ok(Some(_)))` means the hand ran out straight from the blinds.
    pub fn deal(&mut self) -> Result<Result<Option<HandOutcome>, TableClosed>, CliError> {
        let started = if self.game()?.hand_number() == 0 {
            self.manager.start(self.game)
        } else {
            self.manager.next_hand(self.game)
        };
        match started {
            Ok(outcome) => Ok(Ok(outcome)),
            Err(GameError::GameFinished) => Ok(Err(self.closed()?)),
            Err(GameError::NotEnoughPlayers { .. }) => Ok(Err(self.closed()?)),
            Err(e) => Err(e.into()),
        }
    }

    fn closed(&self) -> Result<TableClosed, CliError> {
        let funded: Vec<_> = self
            .game()?
            .players()
            .iter()
            .filter(|p| p.chips() > 0)
            .collect();
        Ok(match funded.as_slice() {
            [winner] => TableClosed::Winner(winner.id().to_string()),
            _ => TableClosed::NotEnoughPlayers,
        })
    }

    /// Id of the player whose turn it is.
    pub fn actor(&self) -> Result<Option<String>, CliError> {
        Ok(self.game()?.current_player().map(|p| p.id().to_string()))
    }

    /// Lets the bot act for `player_id`.
    ///
    /// A rejected bot action is logged and replaced by a fold, which is
    /// always legal for the player to act.
    pub fn bot_turn(&mut self, player_id: &str) -> Result<(PlayerAction, ActionOutcome), CliError> {
        let snapshot = self.manager.game_state(self.game, Some(player_id))?;
        let action = self.bot.decide(&snapshot, player_id);
        match self.manager.player_action(self.game, player_id, action) {
            Ok(outcome) => Ok((action, outcome)),
            Err(e) if e.is_recoverable() => {
                warn!(player = %player_id, bot = self.bot.name(), error = %e, "bot action rejected, folding");
                let outcome = self
                    .manager
                    .player_action(self.game, player_id, PlayerAction::Fold)?;
                Ok((PlayerAction::Fold, outcome))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Stacks in seat order.
    pub fn stacks(&self) -> Result<Vec<(String, u32)>, CliError> {
        Ok(self
            .game()?
            .players()
            .iter()
            .map(|p| (p.id().to_string(), p.chips()))
            .collect())
    }
}
