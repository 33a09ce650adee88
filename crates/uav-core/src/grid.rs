//! Immutable grid map of obstacle codes or obstacle heights.

use crate::error::{PlannerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(row, col)` cell address.
///
/// Ordering is lexicographic by row, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of axis-aligned steps between two cells.
    pub fn manhattan(&self, other: &Coordinate) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular row-major grid backed by a flat Vec.
///
/// Cell values are either obstacle codes (0 = free) or obstacle heights in
/// meters, depending on which traversal rule reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i32>>", into = "Vec<Vec<i32>>")]
pub struct GridMap {
    cells: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl GridMap {
    /// Build a grid from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(PlannerError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (idx, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(PlannerError::RaggedGrid {
                    row: idx,
                    expected: cols,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols,
        })
    }

    /// Grid from a fixed-size array. Only used for built-in maps, which are
    /// never empty.
    pub(crate) fn from_array<const R: usize, const C: usize>(rows: [[i32; C]; R]) -> Self {
        Self {
            cells: rows.concat(),
            rows: R,
            cols: C,
        }
    }

    /// Grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: i32) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PlannerError::EmptyGrid);
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(PlannerError::GridTooLarge { rows, cols })?;
        Ok(Self {
            cells: vec![value; len],
            rows,
            cols,
        })
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Value stored at `coord`.
    pub fn value_at(&self, coord: Coordinate) -> Result<i32> {
        self.check_bounds(coord)?;
        Ok(self.cells[coord.row * self.cols + coord.col])
    }

    /// Fail with [`PlannerError::OutOfBounds`] if `coord` is outside the grid.
    pub fn check_bounds(&self, coord: Coordinate) -> Result<()> {
        if self.in_bounds(coord) {
            Ok(())
        } else {
            Err(PlannerError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// All cells with their coordinates, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, i32)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, value)| (Coordinate::new(idx / cols, idx % cols), *value))
    }

    /// Copy of the grid as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.cells.chunks(self.cols).map(|row| row.to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<i32>>> for GridMap {
    type Error = PlannerError;

    fn try_from(rows: Vec<Vec<i32>>) -> Result<Self> {
        GridMap::from_rows(rows)
    }
}

impl From<GridMap> for Vec<Vec<i32>> {
    fn from(grid: GridMap) -> Self {
        grid.to_rows()
    }
}
