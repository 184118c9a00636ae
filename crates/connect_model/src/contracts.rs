//! Contract-based validation for connect four.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}

use crate::invariants::{ConnectInvariants, InvariantSet};
use crate::{Coord, GameModel, MoveError};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The coordinate must lie on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates outside `[0, side)` on either axis.
    #[instrument(skip(game))]
    pub fn check(coord: &Coord, game: &GameModel) -> Result<(), MoveError> {
        if game.board().contains(*coord) {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds {
                coord: *coord,
                side: game.side(),
            })
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects occupied cells.
    #[instrument(skip(game))]
    pub fn check(coord: &Coord, game: &GameModel) -> Result<(), MoveError> {
        if game.board().is_empty(*coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(*coord))
        }
    }
}

/// Precondition: The game must still be ongoing.
pub struct GameOngoing;

impl GameOngoing {
    /// Rejects every move once the game is won or drawn.
    #[instrument(skip(game))]
    pub fn check(game: &GameModel) -> Result<(), MoveError> {
        let status = game.status();
        if status.is_terminal() {
            Err(MoveError::GameOver(status))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: the game not over, in bounds, and empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in that order.
    ///
    /// A finished game rejects every move with [`MoveError::GameOver`],
    /// whatever the target cell.
    #[instrument(skip(game))]
    pub fn check(coord: &Coord, game: &GameModel) -> Result<(), MoveError> {
        GameOngoing::check(game)?;
        InBounds::check(coord, game)?;
        CellIsEmpty::check(coord, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is ongoing
/// - Coordinate is on the board
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one more cell is occupied
/// - All model invariants hold
pub struct MoveContract;

impl Contract<GameModel, Coord> for MoveContract {
    fn pre(game: &GameModel, coord: &Coord) -> Result<(), MoveError> {
        LegalMove::check(coord, game)
    }

    fn post(before: &GameModel, after: &GameModel) -> Result<(), MoveError> {
        let (was, now) = (before.board().occupied(), after.board().occupied());
        if now != was + 1 {
            warn!(was, now, "Move changed an unexpected number of cells");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected {} occupied cells, found {}",
                was + 1,
                now
            )));
        }

        ConnectInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
