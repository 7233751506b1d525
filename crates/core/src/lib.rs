//! Core simulation engine - pure, deterministic, and testable
//!
//! This crate holds every game rule of the falling-block simulation and
//! nothing else: no rendering, sockets or files. An external driver (a human
//! front end, a scripted policy, a learning agent) owns a [`TetrisEnv`] and
//! calls [`reset`](TetrisEnv::reset) and [`step`](TetrisEnv::step) on it.
//!
//! - **Deterministic**: same seed plus same actions gives the same game
//! - **Isolated**: each `TetrisEnv` is an owned value; any number can coexist
//! - **Fixed action space**: every [`Action`](types::Action) is always legal;
//!   blocked moves are silent no-ops
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell grid with in-place row compaction
//! - [`pieces`]: the seven tetromino templates and shape rotation
//! - [`collision`]: bounds and overlap test for a shape at an offset
//! - [`active`]: the falling piece and its validated moves
//! - [`line_clear`]: lock a piece and remove full rows
//! - [`env`]: game state and the per-tick step scheduler
//! - [`rng`]: seeded uniform or 7-bag piece selection
//! - [`config`]: grid size, seed and piece rule
//! - [`snapshot`]: read-only view for observers
//!
//! # Tick Semantics
//!
//! One call to [`TetrisEnv::step`] is one tick:
//!
//! 1. If the game is over, return the unchanged overlay, reward 0, done.
//! 2. Apply the action. `Down` locks the piece when it cannot move.
//! 3. For any action other than `Down`, run the automatic fall: drop one row
//!    if possible, otherwise lock.
//!
//! A lock scores 100 per cleared row and rewards 10 per row. If the next piece
//! collides at its spawn position the game ends with a reward of -100.
//!
//! # Example
//!
//! ```
//! use tetris_env_core::{EnvConfig, TetrisEnv};
//! use tetris_env_core::types::Action;
//!
//! let mut env = TetrisEnv::new(EnvConfig::seeded(12345)).unwrap();
//! let overlay = env.reset();
//! assert_eq!(overlay.filled_count(), 4);
//!
//! let step = env.step(Action::Left);
//! assert_eq!(step.reward, 0);
//! assert!(!step.done);
//! assert!(step.info.is_empty());
//!
//! // Raw indices outside the action set are rejected
//! assert!(env.step_index(9).is_err());
//! ```

pub mod active;
pub mod collision;
pub mod config;
pub mod env;
pub mod error;
pub mod grid;
pub mod line_clear;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tetris_env_types as types;

// Re-export commonly used types for convenience
pub use active::{ActivePiece, MoveDown};
pub use collision::collides;
pub use config::EnvConfig;
pub use env::{GameState, Step, StepInfo, TetrisEnv};
pub use error::{EnvError, Result};
pub use grid::Grid;
pub use line_clear::lock_and_clear;
pub use pieces::{template, Shape};
pub use rng::{PieceQueue, PieceRule};
pub use snapshot::{ActiveSnapshot, EnvSnapshot};
