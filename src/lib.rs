//! Connect Four - terminal front end
//!
//! Renders a [`connect_model::GameModel`] to a text stream and forwards
//! coordinates typed by the players into it.
//!
//! # Architecture
//!
//! - **Model**: rules, win and draw detection (`connect_model` crate)
//! - **View**: [`ConnectFour`], rendering and input forwarding
//! - **Config**: [`GameConfig`], TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use connect_four::{ConnectFour, GameConfig, OutputFormat};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let mut view = ConnectFour::new(config.board_config()?, OutputFormat::Text, Vec::new());
//! view.create_board()?;
//! view.handle_input("0,0")?;
//! assert_eq!(view.model().history().len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod view;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, OutputFormat};

// Crate-level exports - View
pub use view::{ConnectFour, Flow, ViewError};

// Crate-level exports - Game types
pub use connect_model::{
    BoardConfig, Coord, GameModel, GameStatus, MoveError, MoveResult, Player,
};
