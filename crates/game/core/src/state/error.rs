//! State management errors.
//!
//! Errors related to board access, roster management and game status
//! transitions.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{GameStatus, PlayerSymbol, Position};

/// Errors that occur during game state operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// Position lies outside the board.
    #[error("Position {position} is out of bounds (board size: {rows}x{cols})")]
    PositionOutOfBounds {
        /// The invalid position.
        position: Position,
        /// Board height.
        rows: usize,
        /// Board width.
        cols: usize,
    },

    /// Board data has no cells.
    #[error("Board has no cells")]
    EmptyBoard,

    /// Board rows differ in width.
    #[error("Board row {row} has {found} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Board data contains a glyph that is not a tile.
    #[error("Unknown tile {symbol:?} at row {row}, column {col}")]
    UnknownTile { row: usize, col: usize, symbol: char },

    /// Status may only move pending → started → finished.
    #[error("Cannot move game from {from} to {to}")]
    InvalidStatusTransition { from: GameStatus, to: GameStatus },

    /// Roster already holds the maximum number of players.
    #[error("Roster is full (max: {max})")]
    RosterFull { max: usize },

    /// Another player already uses this symbol.
    #[error("Symbol {0} is already taken")]
    SymbolTaken(PlayerSymbol),
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            PositionOutOfBounds { .. } | RosterFull { .. } | SymbolTaken(_) => {
                ErrorSeverity::Validation
            }
            EmptyBoard | RaggedBoard { .. } | UnknownTile { .. } => ErrorSeverity::Validation,

            // Status regressions mean the caller's bookkeeping is broken
            InvalidStatusTransition { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            PositionOutOfBounds { .. } => "STATE_POSITION_OUT_OF_BOUNDS",
            EmptyBoard => "STATE_EMPTY_BOARD",
            RaggedBoard { .. } => "STATE_RAGGED_BOARD",
            UnknownTile { .. } => "STATE_UNKNOWN_TILE",
            InvalidStatusTransition { .. } => "STATE_INVALID_STATUS_TRANSITION",
            RosterFull { .. } => "STATE_ROSTER_FULL",
            SymbolTaken(_) => "STATE_SYMBOL_TAKEN",
        }
    }
}
