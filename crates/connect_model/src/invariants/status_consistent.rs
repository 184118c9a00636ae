//! Status consistency invariant: the reported status matches the board.

use super::Invariant;
use crate::rules::{is_full, is_winner};
use crate::{GameModel, GameStatus, Player};
use strum::IntoEnumIterator;

/// Invariant: Status agrees with the board.
///
/// - `Won(p)` iff `p` has four in a row
/// - `Draw` iff the board is full and nobody has four in a row
/// - `Ongoing` otherwise
pub struct StatusConsistentInvariant;

impl Invariant<GameModel> for StatusConsistentInvariant {
    fn holds(game: &GameModel) -> bool {
        let board = game.board();
        let winners: Vec<Player> = Player::iter().filter(|p| is_winner(board, *p)).collect();

        match game.status() {
            GameStatus::Won(player) => winners == [player],
            GameStatus::Draw => winners.is_empty() && is_full(board),
            GameStatus::Ongoing => winners.is_empty() && !is_full(board),
        }
    }

    fn description() -> &'static str {
        "Status matches the board (won iff four in a row, draw iff full)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardConfig;

    #[test]
    fn test_fresh_game_holds() {
        let game = GameModel::new(BoardConfig::default());
        assert!(StatusConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_premature_status_violates() {
        let mut game = GameModel::new(BoardConfig::default());
        game.status = GameStatus::Won(Player::O);
        assert!(!StatusConsistentInvariant::holds(&game));

        game.status = GameStatus::Draw;
        assert!(!StatusConsistentInvariant::holds(&game));
    }
}
