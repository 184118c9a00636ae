//! Game rules for connect four.
//!
//! This module contains pure functions for evaluating a board
//! according to connect-four rules. Rules are separated from board
//! storage so contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{is_winner, winning_run, Axis, RUN_LENGTH};
