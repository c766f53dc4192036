//! Action execution errors.

use crate::error::{ErrorSeverity, GameError};
use crate::rules::MoveError;
use crate::state::{GameStatus, PlayerSymbol, Position, StateError};

/// Errors that can occur while validating or applying an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// The action needs a game in a different status.
    #[error("Game is {actual}, expected {expected}")]
    WrongStatus {
        expected: GameStatus,
        actual: GameStatus,
    },

    /// Not enough players joined to start.
    #[error("Need {required} players to start, have {joined}")]
    NotEnoughPlayers { required: usize, joined: usize },

    /// No player with this symbol is in the game.
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerSymbol),

    /// Eliminated players cannot act.
    #[error("Player {0} is dead")]
    PlayerDead(PlayerSymbol),

    /// Destination rejected by the move validator.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// Player already has as many bombs out as their stats allow.
    #[error("Player {player} already has {limit} bomb(s) on the board")]
    BombLimitReached { player: PlayerSymbol, limit: u32 },

    /// A bomb already sits on this cell.
    #[error("A bomb is already planted at {position}")]
    BombAlreadyPlanted { position: Position },

    /// Player's bomb counter disagrees with the bombs on the board.
    #[error("Bomb bookkeeping for {player} is out of sync ({counted} counted, {planted} planted)")]
    BombBookkeeping {
        player: PlayerSymbol,
        counted: u32,
        planted: u32,
    },

    /// A detonation or resolution step left a bomb with a spent fuse.
    #[error("Bomb at {position} should have detonated")]
    UndetonatedBomb { position: Position },

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            WrongStatus { .. } | NotEnoughPlayers { .. } => ErrorSeverity::Recoverable,
            BombLimitReached { .. } | BombAlreadyPlanted { .. } => ErrorSeverity::Recoverable,
            PlayerNotFound(_) | PlayerDead(_) => ErrorSeverity::Validation,
            Move(error) => error.severity(),
            State(error) => error.severity(),
            BombBookkeeping { .. } | UndetonatedBomb { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            WrongStatus { .. } => "ACTION_WRONG_STATUS",
            NotEnoughPlayers { .. } => "ACTION_NOT_ENOUGH_PLAYERS",
            PlayerNotFound(_) => "ACTION_PLAYER_NOT_FOUND",
            PlayerDead(_) => "ACTION_PLAYER_DEAD",
            Move(error) => error.error_code(),
            BombLimitReached { .. } => "ACTION_BOMB_LIMIT_REACHED",
            BombAlreadyPlanted { .. } => "ACTION_BOMB_ALREADY_PLANTED",
            BombBookkeeping { .. } => "ACTION_BOMB_BOOKKEEPING",
            UndetonatedBomb { .. } => "ACTION_UNDETONATED_BOMB",
            State(error) => error.error_code(),
        }
    }
}
