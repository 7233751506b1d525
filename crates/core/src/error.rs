//! Engine error kinds
//!
//! Every variant is a caller contract violation. Gameplay itself never fails:
//! blocked moves and rotations are silent no-ops.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// Action value outside the fixed action set
    #[error("invalid action {0}: expected 0 (left), 1 (right), 2 (down) or 3 (rotate)")]
    InvalidAction(i64),

    /// Grid access outside the fixed dimensions
    #[error("coordinate (row {row}, col {col}) is outside the grid")]
    InvalidCoordinate { row: i64, col: i64 },

    /// Cell value that is neither empty nor a piece id
    #[error("cell value {0} is outside 0..=7")]
    InvalidCell(u8),

    /// Configuration rejected before an environment was built
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, EnvError>;
