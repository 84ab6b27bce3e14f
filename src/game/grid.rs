use serde::{Deserialize, Serialize};

use super::action::Velocity;

/// A cell on the board, addressed by 1-indexed row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub column: i32,
}

impl Cell {
    pub fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Move cell by delta
    pub fn moved_by(&self, d_row: i32, d_column: i32) -> Self {
        Self {
            row: self.row + d_row,
            column: self.column + d_column,
        }
    }

    /// One unit step apart along a single axis
    pub fn is_adjacent(&self, other: Cell) -> bool {
        (self.row - other.row).abs() + (self.column - other.column).abs() == 1
    }

    /// Move cell by one tick of velocity
    pub fn moved_with(&self, velocity: Velocity) -> Self {
        self.moved_by(velocity.d_row, velocity.d_column)
    }
}

/// Fixed playing field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: i32,
    columns: i32,
}

impl Board {
    /// Callers are expected to have validated the dimensions through
    /// [`GameConfig::validate`](super::GameConfig::validate).
    pub(crate) fn new(rows: i32, columns: i32) -> Self {
        debug_assert!(rows >= 1 && columns >= 1);
        Self { rows, columns }
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Check if a cell lies within the playable range `1..=rows`, `1..=columns`
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 1 && cell.row <= self.rows && cell.column >= 1 && cell.column <= self.columns
    }

    /// Total number of playable cells
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Starting cell for a fresh chain.
    ///
    /// Halved dimensions are clamped to 1 so single-row or single-column
    /// boards still start in bounds.
    pub fn center(&self) -> Cell {
        Cell::new((self.rows / 2).max(1), (self.columns / 2).max(1))
    }

    /// Iterate every playable cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (1..=self.rows).flat_map(move |row| (1..=self.columns).map(move |column| Cell::new(row, column)))
    }
}
