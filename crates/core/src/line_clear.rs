//! Line clearing - lock a piece and remove full rows
//!
//! Pure grid transformation: the caller owns score and reward bookkeeping.

use crate::active::ActivePiece;
use crate::grid::Grid;

/// Stamp `piece` into `grid` at its current position, then remove every full
/// row. Returns the number of rows removed.
///
/// The piece is expected to sit at a non-colliding position; cells outside the
/// grid are skipped rather than written.
pub fn lock_and_clear(grid: &mut Grid, piece: &ActivePiece) -> usize {
    let id = piece.id();
    for (row, col) in piece.cells() {
        if grid.in_bounds(row, col) {
            grid.write(row as usize, col as usize, id);
        }
    }
    grid.clear_full_rows()
}
