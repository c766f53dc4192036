//! Authoritative game state representation.
//!
//! This module owns the board, the roster and the short-lived blast entities
//! of a single game. Orchestration layers clone or query this state but mutate
//! it through the engine, which keeps the status machine and the bomb
//! bookkeeping consistent.
pub mod error;
pub mod types;

use arrayvec::ArrayVec;

use crate::config::GameConfig;

pub use error::StateError;
pub use types::{
    Axis, BlastTag, Board, Bomb, DESTRUCTIBLE, Direction, Explosion, ExplosionGeometry, Flame,
    Player, PlayerStats, PlayerSymbol, Position, STURDY, Tick, Tile,
};

pub type Roster = ArrayVec<Player, { GameConfig::MAX_PLAYERS }>;

/// Lifecycle of a game. Only ever advances pending → started → finished.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum GameStatus {
    #[default]
    Pending,
    Started,
    Finished,
}

/// Canonical snapshot of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Game {
    pub board: Board,
    pub players: Roster,
    pub bombs: Vec<Bomb>,
    pub explosions: Vec<Explosion>,
    pub flames: Vec<Flame>,
    /// Number of ticks processed so far.
    pub tick: Tick,
    status: GameStatus,
    winner: Option<PlayerSymbol>,
}

impl Game {
    /// Creates a pending game on `board` with an empty roster.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            players: Roster::new(),
            bombs: Vec::new(),
            explosions: Vec::new(),
            flames: Vec::new(),
            tick: 0,
            status: GameStatus::Pending,
            winner: None,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Sole survivor of a finished game. `None` while running or after a draw.
    pub fn winner(&self) -> Option<PlayerSymbol> {
        self.winner
    }

    pub fn is_started(&self) -> bool {
        self.status == GameStatus::Started
    }

    /// Moves the game from pending to started.
    pub fn start(&mut self) -> Result<(), StateError> {
        self.advance(GameStatus::Pending, GameStatus::Started)
    }

    /// Moves the game from started to finished, recording the winner.
    pub fn finish(&mut self, winner: Option<PlayerSymbol>) -> Result<(), StateError> {
        self.advance(GameStatus::Started, GameStatus::Finished)?;
        self.winner = winner;
        Ok(())
    }

    fn advance(&mut self, expected: GameStatus, to: GameStatus) -> Result<(), StateError> {
        if self.status != expected {
            return Err(StateError::InvalidStatusTransition {
                from: self.status,
                to,
            });
        }
        self.status = to;
        Ok(())
    }

    /// Adds a player to the roster.
    pub fn add_player(
        &mut self,
        symbol: PlayerSymbol,
        position: Position,
        stats: PlayerStats,
    ) -> Result<&Player, StateError> {
        if self.player(symbol).is_some() {
            return Err(StateError::SymbolTaken(symbol));
        }
        if !self.board.contains(position) {
            return Err(self.board.out_of_bounds(position));
        }
        let index = self.players.len();
        self.players
            .try_push(Player::new(symbol, position, stats))
            .map_err(|_| StateError::RosterFull {
                max: GameConfig::MAX_PLAYERS,
            })?;
        Ok(&self.players[index])
    }

    pub fn player(&self, symbol: PlayerSymbol) -> Option<&Player> {
        self.players.iter().find(|player| player.symbol == symbol)
    }

    pub fn player_mut(&mut self, symbol: PlayerSymbol) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.symbol == symbol)
    }

    pub fn living_players(&self) -> impl Iterator<Item = &Player> {
        self.players.iter().filter(|player| player.is_alive())
    }

    /// First player (alive or dead) standing on `position`.
    pub fn player_at(&self, position: Position) -> Option<&Player> {
        self.players.iter().find(|player| player.position == position)
    }

    pub fn living_player_at(&self, position: Position) -> Option<&Player> {
        self.living_players()
            .find(|player| player.position == position)
    }

    pub fn bomb_at(&self, position: Position) -> Option<&Bomb> {
        self.bombs.iter().find(|bomb| bomb.position == position)
    }

    /// Removes and returns the bomb on `position`, if any.
    pub fn take_bomb_at(&mut self, position: Position) -> Option<Bomb> {
        let index = self
            .bombs
            .iter()
            .position(|bomb| bomb.position == position)?;
        Some(self.bombs.remove(index))
    }

    /// True when an active explosion or flame covers `position`.
    pub fn is_burning(&self, position: Position) -> bool {
        self.explosions
            .iter()
            .any(|explosion| explosion.covers(position))
            || self.flames.iter().any(|flame| flame.position == position)
    }
}
