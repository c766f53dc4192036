//! Content factory for seeding games from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use arena_core::{Game, GameConfig, Position};

use crate::loaders::{BoardLayout, BoardLoader, ConfigLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── boards/
///     ├── classic.ron
///     └── cross.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a board from `boards/{board_name}.ron`.
    pub fn load_board(&self, board_name: &str) -> LoadResult<BoardLayout> {
        let path = self
            .data_dir
            .join("boards")
            .join(format!("{}.ron", board_name));
        BoardLoader::load(&path)
    }

    /// Builds a pending game on the named board, returning its spawn points
    /// alongside.
    pub fn new_game(&self, board_name: &str) -> LoadResult<(Game, Vec<Position>)> {
        let layout = self
            .load_board(board_name)
            .with_context(|| format!("Failed to load board '{}'", board_name))?;
        tracing::info!(
            board = board_name,
            rows = layout.board.rows(),
            cols = layout.board.cols(),
            spawns = layout.spawns.len(),
            "new game"
        );
        Ok((Game::new(layout.board), layout.spawns))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
