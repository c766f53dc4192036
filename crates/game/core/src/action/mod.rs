//! Action domain.
//!
//! Every request the orchestration layer can make against a game is a small
//! value type implementing [`ActionTransition`]. The engine drives each one
//! through `pre_validate → apply → post_validate`; `apply` only runs when the
//! pre-conditions hold, so a rejected action leaves the game untouched.
//!
//! # Module Structure
//!
//! - `error`: [`ActionError`], shared by every action
//! - `effects`: detonation and the resolution pass shared by several actions
//! - `lobby`: joining and starting a game
//! - `movement`: walking and turning
//! - `bomb`: planting bombs
//! - `flame`: breathing fire at the adjacent cell
//! - `tick`: advancing simulation time

pub mod bomb;
pub mod effects;
pub mod error;
pub mod flame;
pub mod lobby;
pub mod movement;
pub mod tick;

pub use bomb::PlantBombAction;
pub use error::ActionError;
pub use flame::BreatheAction;
pub use lobby::{JoinAction, StartAction};
pub use movement::{MoveAction, TurnAction};
pub use tick::TickAction;

use crate::config::GameConfig;
use crate::event::GameEvent;
use crate::state::{Game, GameStatus, Player, PlayerSymbol};

/// Defines how a concrete action mutates a game.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the game **before** mutation.
    fn pre_validate(&self, _game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action and reports what happened.
    fn apply(&self, game: &mut Game, config: &GameConfig) -> Result<Vec<GameEvent>, Self::Error>;

    /// Validates post-conditions using the game **after** mutation.
    fn post_validate(&self, _game: &Game, _config: &GameConfig) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Every action the engine accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Join(JoinAction),
    Start(StartAction),
    Move(MoveAction),
    Turn(TurnAction),
    PlantBomb(PlantBombAction),
    Breathe(BreatheAction),
    Tick(TickAction),
}

impl Action {
    /// Player issuing the action; `None` for lobby and clock actions.
    pub fn player(&self) -> Option<PlayerSymbol> {
        match self {
            Action::Join(action) => Some(action.player),
            Action::Move(action) => Some(action.player),
            Action::Turn(action) => Some(action.player),
            Action::PlantBomb(action) => Some(action.player),
            Action::Breathe(action) => Some(action.player),
            Action::Start(_) | Action::Tick(_) => None,
        }
    }

    /// Returns the snake_case string representation of the action.
    ///
    /// Used for logging and serialization keys.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::Join(_) => "join",
            Action::Start(_) => "start",
            Action::Move(_) => "move",
            Action::Turn(_) => "turn",
            Action::PlantBomb(_) => "plant_bomb",
            Action::Breathe(_) => "breathe",
            Action::Tick(_) => "tick",
        }
    }
}

impl From<JoinAction> for Action {
    fn from(action: JoinAction) -> Self {
        Self::Join(action)
    }
}

impl From<StartAction> for Action {
    fn from(action: StartAction) -> Self {
        Self::Start(action)
    }
}

impl From<MoveAction> for Action {
    fn from(action: MoveAction) -> Self {
        Self::Move(action)
    }
}

impl From<TurnAction> for Action {
    fn from(action: TurnAction) -> Self {
        Self::Turn(action)
    }
}

impl From<PlantBombAction> for Action {
    fn from(action: PlantBombAction) -> Self {
        Self::PlantBomb(action)
    }
}

impl From<BreatheAction> for Action {
    fn from(action: BreatheAction) -> Self {
        Self::Breathe(action)
    }
}

impl From<TickAction> for Action {
    fn from(action: TickAction) -> Self {
        Self::Tick(action)
    }
}

pub(crate) fn require_status(game: &Game, expected: GameStatus) -> Result<(), ActionError> {
    if game.status() == expected {
        Ok(())
    } else {
        Err(ActionError::WrongStatus {
            expected,
            actual: game.status(),
        })
    }
}

/// Looks up a living player of a started game.
pub(crate) fn living_player(game: &Game, symbol: PlayerSymbol) -> Result<&Player, ActionError> {
    require_status(game, GameStatus::Started)?;
    let player = game
        .player(symbol)
        .ok_or(ActionError::PlayerNotFound(symbol))?;
    if player.dead {
        return Err(ActionError::PlayerDead(symbol));
    }
    Ok(player)
}

pub(crate) fn living_player_mut(
    game: &mut Game,
    symbol: PlayerSymbol,
) -> Result<&mut Player, ActionError> {
    living_player(game, symbol)?;
    game.player_mut(symbol)
        .ok_or(ActionError::PlayerNotFound(symbol))
}
