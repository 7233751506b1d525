//! Active piece - the single falling tetromino and its validated moves
//!
//! Every move computes a candidate position (or shape), asks
//! [`collides`](crate::collision::collides) about it and only then commits.
//! Sideways moves and rotations that would collide are silently dropped;
//! a blocked downward move is reported so the caller can lock the piece.

use crate::collision::collides;
use crate::grid::Grid;
use crate::pieces::{spawn_column, template, Shape, SPAWN_ROW};
use crate::types::PieceKind;

/// Result of trying to move one row down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDown {
    Moved,
    /// The row below is out of bounds or occupied; the piece must lock.
    Blocked,
}

/// The currently falling piece
///
/// `x` is the column and `y` the row of the shape's top-left corner.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    kind: PieceKind,
    shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Fresh piece of `kind` at the spawn position for a grid `grid_width` wide
    pub fn spawn(kind: PieceKind, grid_width: usize) -> Self {
        let shape = template(kind);
        let x = spawn_column(grid_width, &shape);
        Self {
            kind,
            shape,
            x,
            y: SPAWN_ROW,
        }
    }

    /// Piece of `kind` in spawn orientation at an explicit position
    pub fn at(kind: PieceKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            shape: template(kind),
            x,
            y,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Cell value this piece writes into the grid
    pub fn id(&self) -> u8 {
        self.kind.id()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Absolute (row, col) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied()
            .map(move |(i, j)| (self.y + i as i32, self.x + j as i32))
    }

    /// Does the piece collide where it currently is?
    pub fn collides(&self, grid: &Grid) -> bool {
        collides(grid, &self.shape, self.x, self.y)
    }

    /// Would the piece collide one row lower?
    pub fn is_grounded(&self, grid: &Grid) -> bool {
        collides(grid, &self.shape, self.x, self.y + 1)
    }

    fn try_shift(&mut self, grid: &Grid, dx: i32) -> bool {
        if collides(grid, &self.shape, self.x + dx, self.y) {
            tracing::trace!(kind = self.kind.as_str(), dx, "shift rejected");
            return false;
        }
        self.x += dx;
        true
    }

    /// Move one column left; returns false (and stays put) if blocked
    pub fn move_left(&mut self, grid: &Grid) -> bool {
        self.try_shift(grid, -1)
    }

    /// Move one column right; returns false (and stays put) if blocked
    pub fn move_right(&mut self, grid: &Grid) -> bool {
        self.try_shift(grid, 1)
    }

    /// Move one row down, or report that the piece is blocked
    pub fn move_down(&mut self, grid: &Grid) -> MoveDown {
        if self.is_grounded(grid) {
            return MoveDown::Blocked;
        }
        self.y += 1;
        MoveDown::Moved
    }

    /// Rotate 90° counter-clockwise in place; returns false if blocked
    ///
    /// The top-left corner stays fixed and no kicks are attempted.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        let rotated = self.shape.rotated_ccw();
        if collides(grid, &rotated, self.x, self.y) {
            tracing::trace!(kind = self.kind.as_str(), "rotation rejected");
            return false;
        }
        self.shape = rotated;
        true
    }
}
