//! Blast geometry.
//!
//! A detonation always covers its own cell and casts one ray per direction,
//! each at most `power` cells long. Per cell, in order:
//!
//! 1. another bomb stops the ray before that cell
//! 2. a sturdy tile stops the ray before that cell
//! 3. a destructible tile is included and stops the ray
//! 4. anything else is included and the ray continues
//!
//! The board edge behaves like a sturdy tile.

use crate::state::{Direction, ExplosionGeometry, Game, Position, StateError};

/// Cells reached by a single ray, nearest first.
///
/// `origin` itself is never part of the ray. An origin off the board is a
/// caller error.
pub fn explosion_line(
    origin: Position,
    game: &Game,
    direction: Direction,
    power: u32,
) -> Result<Vec<Position>, StateError> {
    if !game.board.contains(origin) {
        return Err(game.board.out_of_bounds(origin));
    }

    let reach = i32::try_from(power).unwrap_or(i32::MAX);
    let mut line = Vec::new();

    for distance in 1..=reach {
        let cell = origin.offset(direction, distance);
        if game.bomb_at(cell).is_some() {
            break;
        }
        let Some(tile) = game.board.get(cell) else {
            break;
        };
        if tile.is_sturdy() {
            break;
        }
        line.push(cell);
        if tile.is_destructible() {
            break;
        }
    }

    Ok(line)
}

/// Computes the full blast of a bomb at `origin`.
///
/// The detonating bomb must already be removed from `game.bombs`, otherwise
/// it is ignored anyway because rays start one cell away from the origin.
/// An origin off the board is a caller error.
pub fn calculate_explosion(
    origin: Position,
    game: &Game,
    power: u32,
) -> Result<ExplosionGeometry, StateError> {
    let mut geometry = ExplosionGeometry::new(origin);
    for direction in Direction::ALL {
        let line = explosion_line(origin, game, direction, power)?;
        if let Some(&tip) = line.last() {
            if game.board.get(tip).is_some_and(|tile| tile.is_destructible()) {
                geometry.mark_destroyed(tip);
            }
        }
        geometry.set_ray(direction, line);
    }

    Ok(geometry)
}
