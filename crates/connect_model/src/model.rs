//! The connect-four game model.
//!
//! [`GameModel`] owns the board, the active player and the game status.
//! Its only mutating operation during play is [`GameModel::attempt_move`];
//! every rejected move leaves the model exactly as it was.

use crate::contracts::{Contract, MoveContract};
use crate::rules::{is_full, winning_run, RUN_LENGTH};
use crate::{Board, BoardConfig, Cell, Coord, GameStatus, Move, MoveError, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Snapshot of the game after an accepted move.
///
/// The board is an owned copy; mutating it never affects the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Full board contents.
    pub board: Board,
    /// Status after the move.
    #[serde(rename = "state")]
    pub status: GameStatus,
    /// The player who made the move that produced this snapshot.
    pub player: Player,
    /// The player to move next. Equals `player` after a winning move.
    pub active: Player,
}

/// In-memory connect-four state machine for one game.
#[derive(Debug, Clone)]
pub struct GameModel {
    pub(crate) config: BoardConfig,
    pub(crate) board: Board,
    pub(crate) active: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameModel {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new(config: BoardConfig) -> Self {
        info!(side = *config.side(), "Starting new game");
        Self {
            config,
            board: Board::new(*config.side()),
            active: Player::X,
            status: GameStatus::Ongoing,
            history: Vec::new(),
        }
    }

    /// Attempts to mark `(row, col)` for the active player.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game has been won or drawn,
    ///   whatever the coordinate
    /// - [`MoveError::OutOfBounds`] if the coordinate is off the board
    /// - [`MoveError::CellOccupied`] if the cell is already marked
    ///
    /// A rejected move changes nothing.
    #[instrument(skip(self), fields(player = %self.active))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveResult, MoveError> {
        self.attempt(Coord::new(row, col))
    }

    /// Same as [`GameModel::attempt_move`], taking a [`Coord`].
    #[instrument(skip(self), fields(player = %self.active))]
    pub fn attempt(&mut self, coord: Coord) -> Result<MoveResult, MoveError> {
        if let Err(e) = MoveContract::pre(self, &coord) {
            debug!(%coord, error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.active;
        self.board.set(coord, Cell::Occupied(player));
        self.history.push(Move::new(player, coord));
        self.update_status(player);

        if !matches!(self.status, GameStatus::Won(_)) {
            self.active = player.opponent();
        }

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            debug_assert!(post.is_ok(), "Move broke a game invariant: {:?}", post);
        }

        debug!(%coord, status = %self.status, "Move applied");
        Ok(MoveResult {
            board: self.board.clone(),
            status: self.status,
            player,
            active: self.active,
        })
    }

    /// Recomputes the status after `player` moved. A win on the last
    /// empty cell counts as a win, not a draw.
    fn update_status(&mut self, player: Player) {
        if winning_run(&self.board, player).is_some() {
            info!(%player, moves = self.history.len(), "Game won");
            self.status = GameStatus::Won(player);
        } else if is_full(&self.board) {
            info!(moves = self.history.len(), "Game drawn");
            self.status = GameStatus::Draw;
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Owned snapshot of the current state, for rendering before any move.
    ///
    /// `player` is the last mover, or the active player when no move has
    /// been made yet.
    pub fn snapshot(&self) -> MoveResult {
        MoveResult {
            board: self.board.clone(),
            status: self.status,
            player: self.history.last().map_or(self.active, |m| m.player),
            active: self.active,
        }
    }

    /// Returns the player whose turn it is.
    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Board side length.
    pub fn side(&self) -> usize {
        *self.config.side()
    }

    /// Returns the configuration the game was created with.
    pub fn config(&self) -> BoardConfig {
        self.config
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Empty cells while the game is ongoing; nothing once it is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Coord> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        self.board.empty_coords()
    }

    /// The run that won the game, if it has been won.
    pub fn winning_run(&self) -> Option<[Coord; RUN_LENGTH]> {
        let winner = self.status.winner()?;
        winning_run(&self.board, winner)
    }

    /// Starts over on the same configuration.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(previous = %self.status, "Restarting game");
        *self = Self::new(self.config);
    }

    /// Builds a game by applying `coords` in order, alternating players
    /// from X.
    ///
    /// # Errors
    ///
    /// Returns the first rejection. Moves after a win or draw are
    /// rejected with [`MoveError::GameOver`].
    #[instrument(skip(coords), fields(moves = coords.len()))]
    pub fn replay(config: BoardConfig, coords: &[Coord]) -> Result<Self, MoveError> {
        let mut game = Self::new(config);
        for coord in coords {
            game.attempt(*coord)?;
        }
        Ok(game)
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}
