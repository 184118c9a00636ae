//! Core domain types for connect four.

use super::coord::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
///
/// Serializes as a one-character marker: `" "`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the single-character symbol used when rendering the cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => ' ',
            Cell::Occupied(_) => cell.symbol(),
        }
    }
}

impl TryFrom<char> for Cell {
    type Error = InvalidBoard;

    fn try_from(marker: char) -> Result<Self, Self::Error> {
        match marker {
            ' ' => Ok(Cell::Empty),
            'X' => Ok(Cell::Occupied(Player::X)),
            'O' => Ok(Cell::Occupied(Player::O)),
            other => Err(InvalidBoard::UnknownMarker(other)),
        }
    }
}

/// Square N×N board.
///
/// Cells are stored row-major: row 0 is the top row, column 0 the left column.
/// Serializes as N rows of N cell markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Vec<Cell>>", try_from = "Vec<Vec<Cell>>")]
pub struct Board {
    side: usize,
    cells: Vec<Cell>,
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = InvalidBoard;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        let side = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != side) {
            return Err(InvalidBoard::NotSquare {
                row,
                len: cells.len(),
                side,
            });
        }
        Ok(Self {
            side,
            cells: rows.into_iter().flatten().collect(),
        })
    }
}

/// Serialized board data that does not describe a square grid of markers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidBoard {
    /// A row's length differs from the number of rows.
    #[display("Row {} has {} cells on a board with {} rows", row, len, side)]
    NotSquare {
        /// Index of the offending row.
        row: usize,
        /// Cells found in that row.
        len: usize,
        /// Number of rows.
        side: usize,
    },
    /// A cell marker other than `" "`, `"X"` or `"O"`.
    #[display("Unknown cell marker {:?}", _0)]
    UnknownMarker(char),
}

impl std::error::Error for InvalidBoard {}

impl Board {
    /// Creates an empty board with the given side length.
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![Cell::Empty; side * side],
        }
    }

    /// Side length of the board.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.side && coord.col < self.side
    }

    /// Gets the cell at the given coordinate, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if !self.contains(coord) {
            return None;
        }
        self.cells.get(coord.index(self.side)).copied()
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Marks a cell. Callers validate bounds and emptiness first.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        if self.contains(coord) {
            let idx = coord.index(self.side);
            self.cells[idx] = cell;
        }
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks() panics on zero, and a zero-sided board has no rows anyway
        self.cells.chunks(self.side.max(1))
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// Coordinates of every empty cell, row-major.
    pub fn empty_coords(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(idx, _)| Coord::from_index(idx, self.side))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.side.saturating_sub(1).to_string().len();
        write!(f, "{:width$}", "")?;
        for col in 0..self.side {
            write!(f, " {:>width$}", col)?;
        }
        for (row, cells) in self.rows().enumerate() {
            write!(f, "\n{:>width$}", row)?;
            for cell in cells {
                write!(f, " {:>width$}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Game is ongoing.
    Ongoing,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Won(player) => write!(f, "won by {}", player),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}
