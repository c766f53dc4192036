use crate::error::{ErrorSeverity, GameError};
use crate::state::{Game, PlayerSymbol, Position, Tile};

/// Reason a cell cannot be entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveError {
    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is blocked by {tile}")]
    Blocked { destination: Position, tile: Tile },

    #[error("destination {destination} holds a bomb")]
    BombInTheWay { destination: Position },

    #[error("destination {destination} is occupied by {occupant}")]
    Occupied {
        destination: Position,
        occupant: PlayerSymbol,
    },
}

impl GameError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            MoveError::OutOfBounds { .. } => ErrorSeverity::Validation,
            MoveError::Blocked { .. }
            | MoveError::BombInTheWay { .. }
            | MoveError::Occupied { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            MoveError::OutOfBounds { .. } => "MOVE_OUT_OF_BOUNDS",
            MoveError::Blocked { .. } => "MOVE_BLOCKED",
            MoveError::BombInTheWay { .. } => "MOVE_BOMB_IN_THE_WAY",
            MoveError::Occupied { .. } => "MOVE_OCCUPIED",
        }
    }
}

/// Checks whether a player may stand on `target`.
///
/// Obstacles, active bombs and living players block the cell. Corpses do not.
/// Step distance is not checked here; callers only ever ask about adjacent
/// cells or spawn points.
pub fn validate_move(target: Position, game: &Game) -> Result<(), MoveError> {
    let tile = game
        .board
        .get(target)
        .ok_or(MoveError::OutOfBounds {
            destination: target,
        })?;

    if tile.is_obstacle() {
        return Err(MoveError::Blocked {
            destination: target,
            tile,
        });
    }

    if game.bomb_at(target).is_some() {
        return Err(MoveError::BombInTheWay {
            destination: target,
        });
    }

    if let Some(player) = game.living_player_at(target) {
        return Err(MoveError::Occupied {
            destination: target,
            occupant: player.symbol,
        });
    }

    Ok(())
}

/// Predicate form of [`validate_move`].
pub fn is_valid_move(target: Position, game: &Game) -> bool {
    validate_move(target, game).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Board, Bomb, PlayerStats};

    fn game() -> Game {
        let board = Board::from_rows(&["▩▩▩▩▩", "▩..□▩", "▩.▣.▩", "▩...▩", "▩▩▩▩▩"]).unwrap();
        Game::new(board)
    }

    #[test]
    fn empty_cells_are_valid() {
        let game = game();
        assert!(is_valid_move(Position::new(1, 1), &game));
        assert!(is_valid_move(Position::new(3, 3), &game));
    }

    #[test]
    fn obstacles_block() {
        let game = game();
        assert_eq!(
            validate_move(Position::new(1, 3), &game),
            Err(MoveError::Blocked {
                destination: Position::new(1, 3),
                tile: Tile::Crate
            })
        );
        assert!(!is_valid_move(Position::new(2, 2), &game));
        assert!(!is_valid_move(Position::new(0, 0), &game));
    }

    #[test]
    fn bombs_block() {
        let mut game = game();
        game.bombs
            .push(Bomb::new(Position::new(3, 1), 2, PlayerSymbol::Cross, 3));
        assert_eq!(
            validate_move(Position::new(3, 1), &game),
            Err(MoveError::BombInTheWay {
                destination: Position::new(3, 1)
            })
        );
    }

    #[test]
    fn living_players_block_but_corpses_do_not() {
        let mut game = game();
        let spot = Position::new(2, 1);
        game.add_player(PlayerSymbol::Nought, spot, PlayerStats::default())
            .unwrap();
        assert_eq!(
            validate_move(spot, &game),
            Err(MoveError::Occupied {
                destination: spot,
                occupant: PlayerSymbol::Nought
            })
        );

        game.player_mut(PlayerSymbol::Nought).unwrap().kill();
        assert!(is_valid_move(spot, &game));
    }

    #[test]
    fn off_board_targets_are_rejected() {
        let game = game();
        let error = validate_move(Position::new(-1, 2), &game).unwrap_err();
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "MOVE_OUT_OF_BOUNDS");
    }
}
