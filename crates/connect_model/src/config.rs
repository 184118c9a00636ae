//! Board configuration.

use crate::rules::RUN_LENGTH;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length used when none is configured.
pub const DEFAULT_SIDE: usize = 5;

/// Largest accepted side length. Keeps `side * side` cells allocatable.
pub const MAX_SIDE: usize = 1024;

/// Validated board configuration, fixed for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    /// Side length N of the N×N board.
    side: usize,
}

#[derive(Deserialize)]
struct RawBoardConfig {
    side: usize,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = InvalidConfiguration;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        Self::new(raw.side)
    }
}

impl BoardConfig {
    /// Creates a configuration, rejecting boards too small to ever hold
    /// a winning run and boards larger than [`MAX_SIDE`].
    #[instrument]
    pub fn new(side: usize) -> Result<Self, InvalidConfiguration> {
        if side < RUN_LENGTH {
            return Err(InvalidConfiguration::TooSmall {
                side,
                minimum: RUN_LENGTH,
            });
        }
        if side > MAX_SIDE {
            return Err(InvalidConfiguration::TooLarge {
                side,
                maximum: MAX_SIDE,
            });
        }
        Ok(Self { side })
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { side: DEFAULT_SIDE }
    }
}

/// A board configuration that cannot host a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InvalidConfiguration {
    /// The board cannot hold a winning run.
    #[display("Board side {} is too small (minimum {})", side, minimum)]
    TooSmall {
        /// Requested side length.
        side: usize,
        /// Smallest playable side length.
        minimum: usize,
    },
    /// The board has more cells than a game is allowed to allocate.
    #[display("Board side {} is too large (maximum {})", side, maximum)]
    TooLarge {
        /// Requested side length.
        side: usize,
        /// Largest accepted side length.
        maximum: usize,
    },
}

impl std::error::Error for InvalidConfiguration {}
