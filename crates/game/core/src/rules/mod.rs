//! Pure rule functions over a [`Game`](crate::state::Game) snapshot.
//!
//! Nothing here mutates state. The engine calls these to decide what an
//! action does, and orchestration layers may call them directly to preview
//! moves or blasts.
pub mod explosion;
pub mod movement;
pub mod resolution;

pub use explosion::{calculate_explosion, explosion_line};
pub use movement::{MoveError, is_valid_move, validate_move};
pub use resolution::{
    FlameHit, Outcome, calculate_flame_pos, calculate_winner, hit_by_flame, players_are_dead,
};
