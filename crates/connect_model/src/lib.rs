//! Connect-four rules engine on a configurable N×N board.
//!
//! The [`GameModel`] owns the board, the active player and the game
//! status. Moves go in as `(row, col)` pairs through
//! [`GameModel::attempt_move`]; each accepted move comes back as an owned
//! [`MoveResult`] snapshot, each rejected one as a [`MoveError`] with the
//! model untouched.
//!
//! # Example
//!
//! ```
//! use connect_model::{BoardConfig, GameModel, GameStatus, Player};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = GameModel::new(BoardConfig::new(5)?);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)] {
//!     game.attempt_move(row, col)?;
//! }
//! let result = game.attempt_move(0, 3)?;
//! assert_eq!(result.status, GameStatus::Won(Player::X));
//! assert!(game.attempt_move(4, 4).is_err());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod coord;
mod model;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use config::{BoardConfig, InvalidConfiguration, DEFAULT_SIDE, MAX_SIDE};
pub use coord::{Coord, ParseCoordError};
pub use model::{GameModel, MoveResult};
pub use types::{Board, Cell, GameStatus, InvalidBoard, Player};
