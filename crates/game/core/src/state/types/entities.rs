use super::{Direction, ExplosionGeometry, Position};
use crate::config::GameConfig;

/// Per-game player identity. At most one player per symbol may join a game.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerSymbol {
    #[strum(serialize = "x")]
    Cross,
    #[strum(serialize = "o")]
    Nought,
    #[strum(serialize = "☆")]
    Star,
    #[strum(serialize = "ᗣ")]
    Ghost,
}

impl PlayerSymbol {
    pub const ALL: [PlayerSymbol; GameConfig::MAX_PLAYERS] = [
        PlayerSymbol::Cross,
        PlayerSymbol::Nought,
        PlayerSymbol::Star,
        PlayerSymbol::Ghost,
    ];
}

/// Per-player attributes, copied from `GameConfig::starting_stats` on join.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlayerStats {
    /// Blast radius of bombs this player plants.
    pub power: u32,
    /// Maximum number of the player's bombs on the board at once.
    pub bombs: u32,
    /// Movement speed. Rate limiting is the caller's concern.
    pub speed: u32,
}

impl PlayerStats {
    pub const fn new(power: u32, bombs: u32, speed: u32) -> Self {
        Self {
            power,
            bombs,
            speed,
        }
    }
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self::new(1, 1, 3)
    }
}

/// A participant. Eliminated players stay in the roster with `dead` set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub symbol: PlayerSymbol,
    pub position: Position,
    pub facing: Direction,
    pub dead: bool,
    pub stats: PlayerStats,
    /// Bombs this player currently has on the board.
    pub active_bombs: u32,
}

impl Player {
    pub fn new(symbol: PlayerSymbol, position: Position, stats: PlayerStats) -> Self {
        Self {
            symbol,
            position,
            facing: Direction::default(),
            dead: false,
            stats,
            active_bombs: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    pub fn can_plant(&self) -> bool {
        self.active_bombs < self.stats.bombs
    }

    /// Flags the player as eliminated. Returns `false` if already dead.
    pub fn kill(&mut self) -> bool {
        !std::mem::replace(&mut self.dead, true)
    }
}

/// A planted bomb waiting for its fuse to run out.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bomb {
    pub position: Position,
    /// Blast radius in cells.
    pub power: u32,
    pub owner: PlayerSymbol,
    /// Ticks left before detonation.
    pub fuse: u32,
}

impl Bomb {
    pub fn new(position: Position, power: u32, owner: PlayerSymbol, fuse: u32) -> Self {
        Self {
            position,
            power,
            owner,
            fuse,
        }
    }
}

/// Blast of a single detonation. Lives for exactly one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explosion {
    pub geometry: ExplosionGeometry,
}

impl Explosion {
    pub fn new(geometry: ExplosionGeometry) -> Self {
        Self { geometry }
    }

    pub fn covers(&self, position: Position) -> bool {
        self.geometry.contains(position)
    }
}

/// Lingering hazardous cell, lethal until it burns out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flame {
    pub position: Position,
    /// Ticks left before the flame is removed.
    pub remaining: u32,
}

impl Flame {
    pub fn new(position: Position, remaining: u32) -> Self {
        Self {
            position,
            remaining,
        }
    }
}
