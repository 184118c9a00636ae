//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameModel, GameStatus, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show an X, O, X, O, ... pattern starting with X.
/// The active player is the opponent of the last mover, except after a
/// winning move, when the winner stays active.
pub struct AlternatingTurnInvariant;

impl Invariant<GameModel> for AlternatingTurnInvariant {
    fn holds(game: &GameModel) -> bool {
        let history = game.history();

        let Some(last) = history.last() else {
            return game.active_player() == Player::X;
        };

        if history[0].player != Player::X {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected = match game.status() {
            GameStatus::Won(_) => last.player,
            _ => last.player.opponent(),
        };
        game.active_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardConfig, Coord, Move};

    #[test]
    fn test_empty_game_holds() {
        let game = GameModel::new(BoardConfig::default());
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = GameModel::new(BoardConfig::default());
        for (row, col) in [(0, 0), (4, 4), (0, 4), (4, 0), (2, 2)] {
            game.attempt_move(row, col).unwrap();
            assert!(AlternatingTurnInvariant::holds(&game));
        }
        assert_eq!(game.active_player(), Player::O);
    }

    #[test]
    fn test_winner_stays_active() {
        let coords = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3)].map(Coord::from);
        let game = GameModel::replay(BoardConfig::default(), &coords).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = GameModel::new(BoardConfig::default());
        game.attempt_move(0, 0).unwrap();
        game.history.push(Move::new(Player::X, Coord::new(1, 1)));
        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
