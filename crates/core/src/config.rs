//! Environment configuration
//!
//! Grid dimensions, seed and piece rule for a [`TetrisEnv`](crate::TetrisEnv).
//! Values can be set in code or read from the process environment:
//!
//! - `TETRIS_ENV_WIDTH`: grid width (default 10)
//! - `TETRIS_ENV_HEIGHT`: grid height (default 20)
//! - `TETRIS_ENV_SEED`: fixed piece seed (default: drawn once per environment)
//! - `TETRIS_ENV_PIECE_RULE`: `uniform` or `bag7` (default `uniform`)

use crate::error::{EnvError, Result};
use crate::rng::PieceRule;
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

/// Smallest accepted width or height; a vertical I needs four rows and a
/// horizontal one four columns.
pub const MIN_DIMENSION: usize = 4;

/// Largest accepted width or height
pub const MAX_DIMENSION: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub piece_rule: PieceRule,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            seed: None,
            piece_rule: PieceRule::Uniform,
        }
    }
}

impl EnvConfig {
    /// Config with a fixed seed and defaults for everything else
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// Absent or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let width = env::var("TETRIS_ENV_WIDTH")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.width);

        let height = env::var("TETRIS_ENV_HEIGHT")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.height);

        let seed = env::var("TETRIS_ENV_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());

        let piece_rule = env::var("TETRIS_ENV_PIECE_RULE")
            .ok()
            .and_then(|s| PieceRule::from_str(s.trim()))
            .unwrap_or(defaults.piece_rule);

        Self {
            width,
            height,
            seed,
            piece_rule,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&self.width) {
            return Err(EnvError::InvalidConfig(format!(
                "width {} not in {}..={}",
                self.width, MIN_DIMENSION, MAX_DIMENSION
            )));
        }
        if !range.contains(&self.height) {
            return Err(EnvError::InvalidConfig(format!(
                "height {} not in {}..={}",
                self.height, MIN_DIMENSION, MAX_DIMENSION
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = EnvConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_tiny_and_huge_grids() {
        let narrow = EnvConfig {
            width: 3,
            ..EnvConfig::default()
        };
        assert!(matches!(narrow.validate(), Err(EnvError::InvalidConfig(_))));

        let tall = EnvConfig {
            height: 256,
            ..EnvConfig::default()
        };
        assert!(matches!(tall.validate(), Err(EnvError::InvalidConfig(_))));

        let minimal = EnvConfig {
            width: 4,
            height: 4,
            ..EnvConfig::default()
        };
        assert!(minimal.validate().is_ok());
    }
}
