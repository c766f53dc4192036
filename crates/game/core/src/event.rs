//! Notifications produced by the engine for broadcasting to clients.

use crate::rules::Outcome;
use crate::state::{Direction, ExplosionGeometry, PlayerSymbol, Position};

/// Observable consequence of an executed action, in the order it happened.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    PlayerJoined {
        player: PlayerSymbol,
        position: Position,
    },
    GameStarted,
    PlayerMoved {
        player: PlayerSymbol,
        from: Position,
        to: Position,
    },
    PlayerTurned {
        player: PlayerSymbol,
        facing: Direction,
    },
    BombPlanted {
        owner: PlayerSymbol,
        position: Position,
        power: u32,
    },
    BombDetonated {
        owner: PlayerSymbol,
        geometry: ExplosionGeometry,
    },
    ObstacleDestroyed {
        position: Position,
    },
    FlameSpawned {
        by: PlayerSymbol,
        position: Position,
    },
    PlayerEliminated {
        player: PlayerSymbol,
        position: Position,
    },
    GameFinished {
        outcome: Outcome,
    },
}

impl GameEvent {
    /// Snake-case name used for logging and client message types.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            GameEvent::PlayerJoined { .. } => "player_joined",
            GameEvent::GameStarted => "game_started",
            GameEvent::PlayerMoved { .. } => "player_moved",
            GameEvent::PlayerTurned { .. } => "player_turned",
            GameEvent::BombPlanted { .. } => "bomb_planted",
            GameEvent::BombDetonated { .. } => "bomb_detonated",
            GameEvent::ObstacleDestroyed { .. } => "obstacle_destroyed",
            GameEvent::FlameSpawned { .. } => "flame_spawned",
            GameEvent::PlayerEliminated { .. } => "player_eliminated",
            GameEvent::GameFinished { .. } => "game_finished",
        }
    }
}
