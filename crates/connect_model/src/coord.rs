//! Board coordinates and their parsing from user input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// A `(row, col)` pair addressing one cell. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given side.
    pub(crate) fn index(self, side: usize) -> usize {
        self.row * side + self.col
    }

    pub(crate) fn from_index(index: usize, side: usize) -> Self {
        Self::new(index / side, index % side)
    }

    /// Moves by `(d_row, d_col)`, returning `None` when the result leaves
    /// a board of the given side.
    pub fn offset(self, d_row: isize, d_col: isize, side: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        (row < side && col < side).then_some(Self { row, col })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Input that could not be read as a coordinate.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Cannot parse {:?} as a coordinate (expected \"row,col\")", _0)]
pub struct ParseCoordError(pub String);

impl std::error::Error for ParseCoordError {}

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parses `"row,col"` or `"row col"`, ignoring surrounding whitespace
    /// and optional parentheses.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError(s.to_string());
        let trimmed = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');

        let mut parts = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty());

        let row: usize = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let col: usize = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if parts.next().is_some() {
            return Err(err());
        }

        Ok(Self::new(row, col))
    }
}
