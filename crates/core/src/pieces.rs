//! Pieces module - tetromino templates and shape matrices
//!
//! Each [`PieceKind`] has one immutable template, an occupancy matrix in its
//! spawn orientation. Shapes are rectangular, not square, so rotation swaps
//! their dimensions. Rotation is a plain 90° counter-clockwise matrix turn;
//! there is no wall-kick table.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Upper bound on shape cells (4x4 bounding box)
const MAX_SHAPE_CELLS: usize = 16;

/// Occupancy matrix of a piece, `rows x cols`, row-major
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: ArrayVec<bool, MAX_SHAPE_CELLS>,
}

impl Shape {
    /// Build a shape from rows of 0/1 values
    ///
    /// Panics if the rows are ragged or exceed a 4x4 box; shapes only come
    /// from the fixed template table.
    fn from_rows(rows: &[&[u8]]) -> Self {
        let cols = rows[0].len();
        let mut cells = ArrayVec::new();
        for row in rows {
            assert_eq!(row.len(), cols, "ragged shape template");
            cells.extend(row.iter().map(|&v| v != 0));
        }
        Self {
            rows: rows.len(),
            cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Occupancy at (row, col) inside the bounding box
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Iterate occupied (row, col) offsets in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &filled)| filled)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    /// Return this shape turned 90° counter-clockwise
    ///
    /// A `rows x cols` shape becomes `cols x rows`; four turns give back the
    /// original matrix.
    pub fn rotated_ccw(&self) -> Self {
        let mut cells = ArrayVec::new();
        for i in 0..self.cols {
            for j in 0..self.rows {
                cells.push(self.cells[j * self.cols + (self.cols - 1 - i)]);
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Get the spawn-orientation template for a piece kind
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// Spawn column for a shape: centered, truncating toward zero
pub fn spawn_column(grid_width: usize, shape: &Shape) -> i32 {
    (grid_width as i32 - shape.cols() as i32) / 2
}

/// Spawn row for every piece
pub const SPAWN_ROW: i32 = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(template(kind).occupied().count(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn i_rotation_swaps_dimensions() {
        let i = template(PieceKind::I);
        assert_eq!((i.rows(), i.cols()), (1, 4));
        let vertical = i.rotated_ccw();
        assert_eq!((vertical.rows(), vertical.cols()), (4, 1));
        assert_eq!(
            vertical.occupied().collect::<Vec<_>>(),
            vec![(0, 0), (1, 0), (2, 0), (3, 0)]
        );
    }

    #[test]
    fn t_rotates_counter_clockwise() {
        // [[0,1,0],[1,1,1]] turned CCW is [[0,1],[1,1],[0,1]]
        let t = template(PieceKind::T).rotated_ccw();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert!(!t.is_filled(0, 0));
        assert!(t.is_filled(0, 1));
        assert!(t.is_filled(1, 0));
        assert!(t.is_filled(1, 1));
        assert!(!t.is_filled(2, 0));
        assert!(t.is_filled(2, 1));
    }

    #[test]
    fn four_rotations_are_identity() {
        for kind in PieceKind::ALL {
            let shape = template(kind);
            let back = shape
                .rotated_ccw()
                .rotated_ccw()
                .rotated_ccw()
                .rotated_ccw();
            assert_eq!(shape, back, "{:?}", kind);
        }
    }

    #[test]
    fn spawn_columns_on_default_width() {
        assert_eq!(spawn_column(10, &template(PieceKind::I)), 3);
        assert_eq!(spawn_column(10, &template(PieceKind::O)), 4);
        assert_eq!(spawn_column(10, &template(PieceKind::T)), 3);
    }
}
