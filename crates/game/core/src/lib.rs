//! Deterministic rules and data types for a grid arena game.
//!
//! `arena-core` defines the canonical game state, the pure rule functions
//! (movement validation, explosion geometry, flames, win resolution) and the
//! engine that applies player and clock actions. The rule functions are side
//! effect free and operate on a `&Game` snapshot; all mutation flows through
//! [`engine::GameEngine`].
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod event;
pub mod rules;
pub mod state;

pub use action::{
    Action, ActionError, ActionTransition, BreatheAction, JoinAction, MoveAction,
    PlantBombAction, StartAction, TickAction, TurnAction,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase, TransitionPhaseError};
pub use error::{ErrorSeverity, GameError};
pub use event::GameEvent;
pub use rules::{
    FlameHit, MoveError, Outcome, calculate_explosion, calculate_flame_pos, calculate_winner,
    explosion_line, hit_by_flame, is_valid_move, players_are_dead, validate_move,
};
pub use state::{
    Axis, BlastTag, Board, Bomb, Direction, Explosion, ExplosionGeometry, Flame, Game,
    GameStatus, Player, PlayerStats, PlayerSymbol, Position, Roster, StateError, Tick, Tile,
};
