// src/grid.rs

//! Defines the `Grid` type: a fixed 64x64 matrix of binary cells, plus the
//! geometric operations the codec is built on (clockwise rotation and
//! population counting).
//!
//! Operations return new grids; the only call site that mutates a grid in
//! place is the decoder, which fills one owned buffer cell-by-cell while
//! replaying a command stream.

use std::fmt;

/// Side length of every grid. Dimensions are always exactly this; there is
/// no sparse or resizable representation.
pub const GRID_SIZE: usize = 64;

/// A square matrix of side [`GRID_SIZE`] with boolean cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates a grid with every cell inactive.
    pub fn zeroed() -> Self {
        Grid {
            cells: [[false; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either coordinate is outside `0..GRID_SIZE`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Sets the cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either coordinate is outside `0..GRID_SIZE`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, active: bool) {
        self.cells[row][col] = active;
    }

    /// Returns a new grid rotated 90 degrees clockwise
    /// (transpose, then reverse each row).
    pub fn rotate_cw_90(&self) -> Grid {
        let mut out = Grid::zeroed();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[col][GRID_SIZE - 1 - row] = self.cells[row][col];
            }
        }
        out
    }

    /// Returns a new grid rotated 270 degrees clockwise (90 degrees
    /// counter-clockwise). Exact inverse of [`Grid::rotate_cw_90`].
    pub fn rotate_cw_270(&self) -> Grid {
        let mut out = Grid::zeroed();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                out.cells[GRID_SIZE - 1 - col][row] = self.cells[row][col];
            }
        }
        out
    }

    /// Number of active cells.
    pub fn population_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&c| c).count())
            .sum()
    }

    /// Iterates over the coordinates of active cells in row-major order
    /// (rows top-to-bottom, columns left-to-right).
    pub fn active_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &active)| active)
                .map(move |(col, _)| (row, col))
        })
    }
}

// Compact row-per-line rendering; the derived form would print 4096 bools.
impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}:", GRID_SIZE, GRID_SIZE)?;
        for row in &self.cells {
            for &cell in row.iter() {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
