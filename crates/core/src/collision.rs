//! Collision detection
//!
//! A shape placed with its top-left corner at column `x`, row `y` collides if
//! any occupied cell lands outside the grid or on a filled cell. The check is
//! pure, so callers test candidate positions before committing a move.

use crate::grid::Grid;
use crate::pieces::Shape;
use crate::types::EMPTY_CELL;

/// Does `shape` at (x, y) overlap filled cells or leave the grid?
pub fn collides(grid: &Grid, shape: &Shape, x: i32, y: i32) -> bool {
    shape.occupied().any(|(i, j)| {
        let col = x + j as i32;
        let row = y + i as i32;
        !grid.in_bounds(row, col) || grid.cell(row as usize, col as usize) != EMPTY_CELL
    })
}
