use crate::state::PlayerStats;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Ticks between planting a bomb and its detonation.
    pub bomb_fuse: u32,
    /// Ticks a breathed flame stays lethal.
    pub flame_lifetime: u32,
    /// Players required before a game may start.
    pub min_players: usize,
    /// Stats every player joins with.
    pub starting_stats: PlayerStats,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// One slot per player symbol.
    pub const MAX_PLAYERS: usize = 4;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOMB_FUSE: u32 = 3;
    pub const DEFAULT_FLAME_LIFETIME: u32 = 2;
    pub const DEFAULT_MIN_PLAYERS: usize = 2;

    pub fn new() -> Self {
        Self {
            bomb_fuse: Self::DEFAULT_BOMB_FUSE,
            flame_lifetime: Self::DEFAULT_FLAME_LIFETIME,
            min_players: Self::DEFAULT_MIN_PLAYERS,
            starting_stats: PlayerStats::default(),
        }
    }

    pub fn with_bomb_fuse(mut self, bomb_fuse: u32) -> Self {
        self.bomb_fuse = bomb_fuse;
        self
    }

    pub fn with_flame_lifetime(mut self, flame_lifetime: u32) -> Self {
        self.flame_lifetime = flame_lifetime;
        self
    }

    pub fn with_min_players(mut self, min_players: usize) -> Self {
        self.min_players = min_players;
        self
    }

    pub fn with_starting_stats(mut self, starting_stats: PlayerStats) -> Self {
        self.starting_stats = starting_stats;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
