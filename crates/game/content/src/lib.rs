//! Data-driven arena content and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Board layouts with spawn points (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content seeds new games and never changes the rules in `arena-core`.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{BoardLayout, BoardLoader, ConfigLoader, ContentFactory, default_board};
