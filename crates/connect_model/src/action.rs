//! First-class move types for connect four.
//!
//! Moves are domain events, not side effects. They record who played
//! where and can be validated independently of execution.

use crate::{Coord, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their marker at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell the player marks.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Reason a move was rejected.
///
/// A rejected move leaves the game untouched, so every variant is
/// recoverable by asking for another move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate is not on the board.
    #[display("Cell {} is outside the {}x{} board", coord, side, side)]
    OutOfBounds {
        /// Requested coordinate.
        coord: Coord,
        /// Board side length.
        side: usize,
    },

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game is already over.
    #[display("Game is already over ({})", _0)]
    GameOver(GameStatus),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
