//! Draw detection logic for connect four.

use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board), fields(side = board.side()))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| *c != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::is_winner;
    use super::*;
    use crate::{Coord, Player};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && !is_winner(board, Player::X) && !is_winner(board, Player::O)
    }

    /// Fills a board so that no axis ever holds more than two equal marks in a row.
    fn striped(side: usize) -> Board {
        let mut board = Board::new(side);
        for row in 0..side {
            for col in 0..side {
                let player = if (col / 2 + row) % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                board.set(Coord::new(row, col), Cell::Occupied(player));
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(4)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = striped(4);
        board.set(Coord::new(3, 3), Cell::Empty);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        for side in 4..=7 {
            let board = striped(side);
            assert!(is_full(&board));
            assert!(is_draw(&board), "side {side} should be a draw");
        }
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = striped(4);
        for col in 0..4 {
            board.set(Coord::new(0, col), Cell::Occupied(Player::O));
        }
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
