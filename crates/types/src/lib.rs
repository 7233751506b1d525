//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the engine, the adapter and any
//! external driver. All types are plain data with no external dependencies, so a
//! policy process can depend on this crate alone to talk about pieces and actions.
//!
//! # Grid Dimensions
//!
//! Default playfield dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//!
//! # Scoring and Reward Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_CLEAR_SCORE` | 100 | Score added per row cleared in one lock |
//! | `LINE_CLEAR_REWARD` | 10 | Step reward per row cleared in one lock |
//! | `GAME_OVER_REWARD` | -100 | Step reward on the tick that ends the game |
//!
//! # Examples
//!
//! ```
//! use tetris_env_types::{Action, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! // Piece ids are the cell values written into the grid
//! assert_eq!(PieceKind::I.id(), 1);
//! assert_eq!(PieceKind::from_id(7), Some(PieceKind::L));
//!
//! // Actions are addressed by index or by name
//! assert_eq!(Action::from_index(3), Some(Action::Rotate));
//! assert_eq!(Action::from_str("LEFT"), Some(Action::Left));
//! assert_eq!(Action::from_index(4), None);
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Default grid width in cells (10 columns)
pub const GRID_WIDTH: usize = 10;

/// Default grid height in cells (20 rows)
pub const GRID_HEIGHT: usize = 20;

/// Score added per row cleared
pub const LINE_CLEAR_SCORE: u32 = 100;

/// Step reward per row cleared
pub const LINE_CLEAR_REWARD: i32 = 10;

/// Step reward applied once, on the tick whose spawn collides
pub const GAME_OVER_REWARD: i32 = -100;

/// A cell on the grid
///
/// - `0`: empty
/// - `1..=7`: locked cell of the piece with that id (see [`PieceKind::id`])
pub type Cell = u8;

/// Value of an empty cell
pub const EMPTY_CELL: Cell = 0;

/// The seven tetromino piece kinds
///
/// The numeric id of each kind is the value written into grid cells when a
/// piece of that kind locks:
/// - **I** = 1, horizontal bar
/// - **O** = 2, 2x2 square
/// - **T** = 3
/// - **S** = 4
/// - **Z** = 5 (mirror of S)
/// - **J** = 6
/// - **L** = 7 (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in id order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Grid cell value for this kind (1..=7)
    pub fn id(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::id`]
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_env_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Actions accepted by a single simulation tick
///
/// The set is fixed and every member is always legal to submit: a move or
/// rotation that would collide simply leaves the piece where it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move piece one column left
    Left,
    /// Move piece one column right
    Right,
    /// Move piece one row down, locking it if blocked
    Down,
    /// Rotate piece 90° counter-clockwise
    Rotate,
}

impl Action {
    /// All actions in index order
    pub const ALL: [Action; 4] = [Action::Left, Action::Right, Action::Down, Action::Rotate];

    /// Numeric index of this action (0..=3)
    pub fn index(&self) -> usize {
        match self {
            Action::Left => 0,
            Action::Right => 1,
            Action::Down => 2,
            Action::Rotate => 3,
        }
    }

    /// Map a raw action index to an action
    ///
    /// Returns `None` for anything outside 0..=3.
    pub fn from_index(index: i64) -> Option<Self> {
        match index {
            0 => Some(Action::Left),
            1 => Some(Action::Right),
            2 => Some(Action::Down),
            3 => Some(Action::Rotate),
            _ => None,
        }
    }

    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_env_types::Action;
    ///
    /// assert_eq!(Action::from_str("down"), Some(Action::Down));
    /// assert_eq!(Action::from_str("Rotate"), Some(Action::Rotate));
    /// assert_eq!(Action::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            "down" => Some(Action::Down),
            "rotate" => Some(Action::Rotate),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Down => "down",
            Action::Rotate => "rotate",
        }
    }
}
