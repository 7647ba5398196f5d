//! Grid geometry: coordinates, rectangular shapes and directional neighbour runs.

use alloc::{string::ToString, vec::Vec};
use core::{fmt, str::FromStr};

use crate::core::{
    common::{ConfigError, CoordinateError},
    config::ALPHABET,
};

/// A cell on the grid, addressed by column then row. Both are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    pub col: usize,
    pub row: usize,
}

impl Vector {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// `|Δcol| + |Δrow|` between two cells.
    pub fn manhattan(&self, other: &Vector) -> usize {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl From<(usize, usize)> for Vector {
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl fmt::Display for Vector {
    /// Formats as the text players type: column letter then row, e.g. `c10`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ALPHABET.as_bytes().get(self.col) {
            Some(&letter) => write!(f, "{}{}", letter as char, self.row),
            None => write!(f, "[{},{}]", self.col, self.row),
        }
    }
}

impl FromStr for Vector {
    type Err = CoordinateError;

    /// Parses a single letter followed by a non-negative row number (`a2`,
    /// `C10`). Bounds are not checked here, see [`Shape::is_out_of_bounds`].
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        let malformed = || CoordinateError::Malformed(input.to_string());
        let mut chars = input.chars();
        let letter = chars
            .next()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(malformed)?
            .to_ascii_lowercase();
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let row = digits.parse().map_err(|_| malformed())?;
        let col = (letter as u8 - b'a') as usize;
        Ok(Vector::new(col, row))
    }
}

/// Direction of a neighbour run, relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

/// A contiguous line of cells extending from (but not including) an origin.
///
/// Cells are ordered nearest-to-origin first in every direction, so the last
/// cell is always the farthest one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRun {
    pub direction: Direction,
    pub cells: Vec<Vector>,
}

impl NeighborRun {
    /// The cell of the run farthest from the origin.
    pub fn farthest(&self) -> Option<Vector> {
        self.cells.last().copied()
    }
}

/// Size of a rectangular grid, `width` columns by `height` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    width: usize,
    height: usize,
}

impl Shape {
    /// Create a shape. Both dimensions must be at least 1.
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Every coordinate of the grid in column-major order: `a0, a1, .., b0, ..`.
    pub fn all_positions(&self) -> Vec<Vector> {
        let height = self.height;
        (0..self.width)
            .flat_map(|col| (0..height).map(move |row| Vector::new(col, row)))
            .collect()
    }

    /// True if either axis of `coord` falls outside the grid.
    pub fn is_out_of_bounds(&self, coord: &Vector) -> bool {
        coord.col >= self.width || coord.row >= self.height
    }

    /// Runs of exactly `size` cells leading away from `origin`, in the order
    /// top, bottom, left, right. A direction is left out entirely when the
    /// full run does not fit on the grid; there are no partial runs.
    pub fn neighbor_runs(&self, origin: Vector, size: usize) -> Vec<NeighborRun> {
        if size == 0 {
            return Vec::new();
        }
        let Vector { col, row } = origin;
        let mut runs = Vec::with_capacity(4);
        if row >= size {
            runs.push(NeighborRun {
                direction: Direction::Top,
                cells: (1..=size).map(|i| Vector::new(col, row - i)).collect(),
            });
        }
        if row + size < self.height {
            runs.push(NeighborRun {
                direction: Direction::Bottom,
                cells: (1..=size).map(|i| Vector::new(col, row + i)).collect(),
            });
        }
        if col >= size {
            runs.push(NeighborRun {
                direction: Direction::Left,
                cells: (1..=size).map(|i| Vector::new(col - i, row)).collect(),
            });
        }
        if col + size < self.width {
            runs.push(NeighborRun {
                direction: Direction::Right,
                cells: (1..=size).map(|i| Vector::new(col + i, row)).collect(),
            });
        }
        runs
    }
}
