use crate::errors::GameError;
use crate::player::{Player, PlayerAction as A};

/// An action resolved to the exact chip movement it causes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips moved to match the current bet (may be zero)
    Call(u32),
    /// New round total `to`, of which `moved` leaves the stack now
    Raise { to: u32, moved: u32 },
    /// The whole remaining stack
    AllIn(u32),
}

impl ValidatedAction {
    pub fn chips_moved(&self) -> u32 {
        match self {
            ValidatedAction::Fold | ValidatedAction::Check => 0,
            ValidatedAction::Call(n) | ValidatedAction::AllIn(n) => *n,
            ValidatedAction::Raise { moved, .. } => *moved,
        }
    }
}

/// Validates a player action against the current bet and the player's stack.
///
/// Converts a [`PlayerAction`](crate::player::PlayerAction) into a
/// [`ValidatedAction`] without touching any state. Calls and raises the stack
/// cannot cover become all-ins.
///
/// # Errors
///
/// - [`GameError::CannotCheck`] - checking while facing a bet
/// - [`GameError::InvalidRaise`] - raising to an amount not above the current bet
///
/// # Examples
///
/// ```
/// use holdem_engine::player::{Player, PlayerAction};
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// let player = Player::new("p1", "Alice", 1000);
/// assert_eq!(
///     validate_action(&player, 50, PlayerAction::Call),
///     Ok(ValidatedAction::Call(50))
/// );
///
/// let short = Player::new("p2", "Bob", 80);
/// assert_eq!(
///     validate_action(&short, 50, PlayerAction::Raise(100)),
///     Ok(ValidatedAction::AllIn(80))
/// );
/// ```
pub fn validate_action(
    player: &Player,
    current_bet: u32,
    action: A,
) -> Result<ValidatedAction, GameError> {
    let stack = player.chips();
    let bet = player.bet_amount();
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check => {
            player.check(current_bet)?;
            Ok(ValidatedAction::Check)
        }
        A::Call => {
            let to_call = current_bet.saturating_sub(bet);
            if to_call > 0 && to_call >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise(amount) => {
            if amount <= current_bet {
                return Err(GameError::InvalidRaise {
                    amount,
                    current_bet,
                });
            }
            let needed = amount - bet;
            if needed >= stack {
                Ok(ValidatedAction::AllIn(stack))
            } else {
                Ok(ValidatedAction::Raise {
                    to: amount,
                    moved: needed,
                })
            }
        }
        A::AllIn => Ok(ValidatedAction::AllIn(stack)),
    }
}
