//! Grid module - the locked-cell playfield
//!
//! The grid is a fixed `width x height` matrix of [`Cell`] values where `0` is
//! empty and `1..=7` is the id of the piece that locked there.
//! Storage is a single flat, row-major allocation made once at construction;
//! line clearing compacts rows in place and never reallocates.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 the left edge.

use crate::error::{EnvError, Result};
use crate::types::{Cell, EMPTY_CELL};

/// Largest valid cell value (highest piece id)
const MAX_CELL: Cell = 7;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Box<[Cell]>,
}

impl Grid {
    /// Create a new empty grid
    ///
    /// # Panics
    ///
    /// Panics if `width` or `height` is zero. Environments only build grids
    /// from an [`EnvConfig`](crate::EnvConfig) that passed `validate`.
    pub fn new(width: usize, height: usize) -> Self {
        assert!(
            width > 0 && height > 0,
            "grid dimensions must be non-zero, got {}x{}",
            width,
            height
        );
        Self {
            width,
            height,
            cells: vec![EMPTY_CELL; width * height].into_boxed_slice(),
        }
    }

    /// Build a grid from explicit rows (top row first)
    ///
    /// Every row must have the same non-zero length and every value must be a
    /// valid cell (0..=7).
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(EnvError::InvalidConfig("grid must not be empty".to_string()));
        }
        if rows.iter().any(|r| r.len() != width) {
            return Err(EnvError::InvalidConfig(
                "grid rows must all have the same width".to_string(),
            ));
        }
        if rows.iter().flatten().any(|&c| c > MAX_CELL) {
            return Err(EnvError::InvalidConfig(format!(
                "grid cells must be within 0..={}",
                MAX_CELL
            )));
        }

        let cells: Vec<Cell> = rows.iter().flatten().copied().collect();
        Ok(Self {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Calculate flat index from (row, col), or None when out of bounds
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// True if (row, col) addresses a cell of this grid
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        self.index(row, col)
            .map(|idx| self.cells[idx])
            .ok_or(EnvError::InvalidCoordinate {
                row: row as i64,
                col: col as i64,
            })
    }

    /// Set cell at (row, col)
    ///
    /// `cell` must be 0 (empty) or a piece id.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        if cell > MAX_CELL {
            return Err(EnvError::InvalidCell(cell));
        }
        let idx = self.index(row, col).ok_or(EnvError::InvalidCoordinate {
            row: row as i64,
            col: col as i64,
        })?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Read a cell the caller has already bounds-checked
    #[inline(always)]
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    /// Write a cell the caller has already bounds-checked
    #[inline(always)]
    pub(crate) fn write(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.width + col] = cell;
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        self.row(row).iter().all(|&cell| cell != EMPTY_CELL)
    }

    /// Borrow one row
    ///
    /// Panics if `row >= height`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(self.width)
    }

    /// Indices of every currently full row, top to bottom
    pub fn full_rows(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.height).filter(move |&row| self.is_row_full(row))
    }

    /// Remove the given rows and shift everything above them down
    ///
    /// Each surviving row moves down by the number of removed rows beneath it,
    /// and as many zero rows as were removed appear at the top. Out-of-range
    /// and duplicate indices are ignored. Returns the number of rows removed.
    pub fn compact(&mut self, cleared: &[usize]) -> usize {
        self.compact_where(|row, _| cleared.contains(&row))
    }

    /// Remove every full row in place, returning how many were removed
    pub fn clear_full_rows(&mut self) -> usize {
        self.compact_where(|_, cells| cells.iter().all(|&c| c != EMPTY_CELL))
    }

    /// Two-pointer compaction: scan bottom to top, copying surviving rows to
    /// the lowest free slot, then zero whatever is left at the top.
    fn compact_where(&mut self, remove: impl Fn(usize, &[Cell]) -> bool) -> usize {
        let width = self.width;
        let mut write_row = self.height;

        for read_row in (0..self.height).rev() {
            let start = read_row * width;
            if remove(read_row, &self.cells[start..start + width]) {
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                self.cells
                    .copy_within(start..start + width, write_row * width);
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = EMPTY_CELL;
        }

        write_row
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True if no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == EMPTY_CELL)
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY_CELL).count()
    }

    /// Copy out as nested rows (top row first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}
