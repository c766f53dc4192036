//! Board layout loader.
//!
//! A layout is the obstacle grid as glyph rows plus the cells players spawn
//! on, in join order.

use std::path::Path;

use anyhow::{Context, ensure};
use arena_core::{Board, Position, Tile};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const CLASSIC: &str = include_str!("../../data/boards/classic.ron");

/// Board data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoardRon {
    rows: Vec<String>,
    #[serde(default)]
    spawns: Vec<(i32, i32)>, // (row, col)
}

/// Parsed board with its spawn points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardLayout {
    pub board: Board,
    pub spawns: Vec<Position>,
}

impl BoardLayout {
    /// Spawn point for the `index`-th player to join.
    pub fn spawn(&self, index: usize) -> Option<Position> {
        self.spawns.get(index).copied()
    }
}

/// Loader for board layouts from RON files.
pub struct BoardLoader;

impl BoardLoader {
    /// Load a board layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<BoardLayout> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Invalid board file {}", path.display()))
    }

    /// Parse a board layout from RON text.
    ///
    /// Spawn points must be free cells inside the board.
    pub fn parse(content: &str) -> LoadResult<BoardLayout> {
        let data: BoardRon = ron::from_str(content).context("Failed to parse board RON")?;
        let board = Board::from_rows(data.rows.as_slice())?;

        let mut spawns = Vec::with_capacity(data.spawns.len());
        for spawn in data.spawns {
            let position = Position::from(spawn);
            let tile = board.tile(position)?;
            ensure!(tile == Tile::Empty, "Spawn {position} is on a {tile:?} tile");
            ensure!(!spawns.contains(&position), "Spawn {position} is listed twice");
            spawns.push(position);
        }

        Ok(BoardLayout { board, spawns })
    }
}

/// Bundled 11×11 arena with four corner spawns.
pub fn default_board() -> LoadResult<BoardLayout> {
    BoardLoader::parse(CLASSIC).context("Bundled classic board is invalid")
}
