//! Death, victory and breathed-flame resolution.

use crate::state::{Bomb, Direction, Game, Player, PlayerSymbol, Position, StateError};

/// Result of checking the roster for a winner.
///
/// `Draw` and `Ongoing` both lack a winner but mean opposite things for the
/// game status, so they are kept apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Exactly one player is still alive.
    Winner(PlayerSymbol),
    /// Everybody is dead.
    Draw,
    /// Two or more players are alive.
    Ongoing,
}

impl Outcome {
    /// True for `Winner` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(self) -> Option<PlayerSymbol> {
        match self {
            Outcome::Winner(symbol) => Some(symbol),
            Outcome::Draw | Outcome::Ongoing => None,
        }
    }
}

/// Something a breathed flame landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlameHit<'a> {
    Player(&'a Player),
    Bomb(&'a Bomb),
}

/// Players standing in an active explosion or flame.
///
/// Dead players are matched as well; flagging them again is a no-op for the
/// caller. Each player appears at most once.
pub fn players_are_dead(game: &Game) -> Vec<&Player> {
    game.players
        .iter()
        .filter(|player| game.is_burning(player.position))
        .collect()
}

/// Decides whether the game is over and who won.
pub fn calculate_winner(game: &Game) -> Outcome {
    let mut alive = game.living_players();
    match (alive.next(), alive.next()) {
        (Some(player), None) => Outcome::Winner(player.symbol),
        (None, _) => Outcome::Draw,
        (Some(_), Some(_)) => Outcome::Ongoing,
    }
}

/// Cell a player standing on `position` breathes fire into.
///
/// `None` when the adjacent cell holds an obstacle or lies off the board. A
/// player position off the board is a caller error.
pub fn calculate_flame_pos(
    position: Position,
    game: &Game,
    facing: Direction,
) -> Result<Option<Position>, StateError> {
    if !game.board.contains(position) {
        return Err(game.board.out_of_bounds(position));
    }
    let target = position.step(facing);
    Ok(match game.board.get(target) {
        Some(tile) if !tile.is_obstacle() => Some(target),
        _ => None,
    })
}

/// What occupies a flame cell. Players take priority over bombs.
pub fn hit_by_flame(position: Position, game: &Game) -> Option<FlameHit<'_>> {
    game.player_at(position)
        .map(FlameHit::Player)
        .or_else(|| game.bomb_at(position).map(FlameHit::Bomb))
}
