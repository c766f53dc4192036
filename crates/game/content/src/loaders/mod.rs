//! Content loaders for reading game data from files.
//!
//! Boards are RON documents, tuning is TOML. Every loader reports failures as
//! [`anyhow::Error`] carrying the offending path.

pub mod board;
pub mod config;
pub mod factory;

pub use board::{BoardLayout, BoardLoader, default_board};
pub use config::ConfigLoader;
pub use factory::ContentFactory;

use std::path::Path;

use anyhow::Context;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file {}", path.display()))
}
