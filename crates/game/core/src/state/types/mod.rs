pub mod board;
pub mod common;
pub mod entities;
pub mod explosion;

pub use board::{Board, DESTRUCTIBLE, STURDY, Tile};
pub use common::{Axis, Direction, Position, Tick};
pub use entities::{Bomb, Explosion, Flame, Player, PlayerStats, PlayerSymbol};
pub use explosion::{BlastTag, ExplosionGeometry};
