//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Cell, GameModel};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must never hit an
/// occupied cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameModel> for MonotonicBoardInvariant {
    fn holds(game: &GameModel) -> bool {
        let mut reconstructed = Board::new(game.side());

        for mov in game.history() {
            if !reconstructed.is_empty(mov.coord) {
                return false;
            }
            reconstructed.set(mov.coord, Cell::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardConfig, Coord, Move, Player};

    #[test]
    fn test_empty_game_holds() {
        let game = GameModel::new(BoardConfig::default());
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = GameModel::new(BoardConfig::default());
        for (row, col) in [(0, 0), (1, 1), (2, 2), (4, 0)] {
            game.attempt_move(row, col).unwrap();
            assert!(MonotonicBoardInvariant::holds(&game));
        }
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut game = GameModel::new(BoardConfig::default());
        game.attempt_move(2, 2).unwrap();
        game.board.set(Coord::new(2, 2), Cell::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_history_overwrite_violates() {
        let mut game = GameModel::new(BoardConfig::default());
        game.attempt_move(2, 2).unwrap();
        game.history.push(Move::new(Player::O, Coord::new(2, 2)));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
