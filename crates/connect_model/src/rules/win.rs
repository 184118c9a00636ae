//! Win detection logic for connect four.
//!
//! Every call scans the whole board along all four axes. Boards are small
//! and moves are human-paced, so no incremental bookkeeping is kept.

use crate::{Board, Cell, Coord, Player};
use tracing::instrument;

/// Number of consecutive marks needed to win.
pub const RUN_LENGTH: usize = 4;

/// A line direction on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Axis {
    /// Rows, left to right.
    Horizontal,
    /// Columns, top to bottom.
    Vertical,
    /// Row increasing, column decreasing.
    AntiDiagonal,
    /// Row decreasing, column decreasing.
    MainDiagonal,
}

impl Axis {
    /// `(d_row, d_col)` step between consecutive cells of a line.
    pub fn step(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::AntiDiagonal => (1, -1),
            Axis::MainDiagonal => (-1, -1),
        }
    }

    /// First cell of every line along this axis.
    ///
    /// Diagonal starts sweep along one edge row and then along the right
    /// column, so each of the `2 * side - 1` diagonals appears exactly once.
    pub fn starts(self, side: usize) -> Vec<Coord> {
        let last = side.saturating_sub(1);
        match self {
            Axis::Horizontal => (0..side).map(|row| Coord::new(row, 0)).collect(),
            Axis::Vertical => (0..side).map(|col| Coord::new(0, col)).collect(),
            Axis::AntiDiagonal => (0..side)
                .map(|col| Coord::new(0, col))
                .chain((1..side).map(|row| Coord::new(row, last)))
                .collect(),
            Axis::MainDiagonal => (0..side)
                .map(|col| Coord::new(last, col))
                .chain((0..last).rev().map(|row| Coord::new(row, last)))
                .collect(),
        }
    }

    /// Every line along this axis, each as its ordered coordinates.
    pub fn lines(self, side: usize) -> impl Iterator<Item = Vec<Coord>> {
        let (d_row, d_col) = self.step();
        self.starts(side).into_iter().map(move |start| {
            std::iter::successors(Some(start), |c| c.offset(d_row, d_col, side)).collect()
        })
    }
}

/// Returns the first run of [`RUN_LENGTH`] cells held by `player`, if any.
///
/// Axes are scanned in the order rows, columns, anti-diagonals, main
/// diagonals. Within a line the count resets on any cell the player does
/// not hold.
#[instrument(skip(board), fields(side = board.side()))]
pub fn winning_run(board: &Board, player: Player) -> Option<[Coord; RUN_LENGTH]> {
    let side = board.side();
    <Axis as strum::IntoEnumIterator>::iter()
        .flat_map(|axis| axis.lines(side))
        .find_map(|line| run_in_line(board, &line, player))
}

/// Checks if `player` has four in a row anywhere on the board.
#[instrument(skip(board), fields(side = board.side()))]
pub fn is_winner(board: &Board, player: Player) -> bool {
    winning_run(board, player).is_some()
}

fn run_in_line(board: &Board, line: &[Coord], player: Player) -> Option<[Coord; RUN_LENGTH]> {
    let mut run = 0;
    for (idx, coord) in line.iter().enumerate() {
        if board.get(*coord) == Some(Cell::Occupied(player)) {
            run += 1;
        } else {
            run = 0;
        }
        if run == RUN_LENGTH {
            let first = idx + 1 - RUN_LENGTH;
            return line[first..=idx].try_into().ok();
        }
    }
    None
}
