use crate::active::ActivePiece;
use crate::env::TetrisEnv;
use crate::grid::Grid;
use crate::rng::PieceRule;
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub x: i32,
    pub y: i32,
    pub rows: usize,
    pub cols: usize,
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(value: &ActivePiece) -> Self {
        Self {
            kind: value.kind(),
            x: value.x,
            y: value.y,
            rows: value.shape().rows(),
            cols: value.shape().cols(),
        }
    }
}

/// Read-only view of an environment at one instant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvSnapshot {
    /// Locked grid with the active piece drawn on top
    pub board: Grid,
    pub active: ActiveSnapshot,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u64,
    pub piece_rule: PieceRule,
    pub ticks: u32,
    pub pieces_locked: u32,
    pub score: u32,
    pub lines: u32,
}

impl EnvSnapshot {
    pub fn capture(env: &TetrisEnv) -> Self {
        let game = env.game();
        Self {
            board: game.overlay(),
            active: ActiveSnapshot::from(game.active()),
            game_over: game.game_over(),
            episode_id: env.episode_id(),
            seed: env.seed(),
            piece_rule: env.piece_rule(),
            ticks: game.ticks(),
            pieces_locked: game.pieces_locked(),
            score: game.score(),
            lines: game.lines_cleared(),
        }
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}
