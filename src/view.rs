//! Terminal view for connect four.
//!
//! [`ConnectFour`] renders the model's board to any [`Write`] sink,
//! forwards user-selected coordinates into the model, and announces the
//! end of the game. It holds no game rules of its own.

use crate::config::OutputFormat;
use connect_model::{BoardConfig, Coord, GameModel, GameStatus, MoveResult};
use derive_more::{Display, Error, From};
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// Error raised while writing to the view's output.
#[derive(Debug, Display, Error, From)]
pub enum ViewError {
    /// Writing to the output failed.
    #[display("Output error: {}", _0)]
    Io(std::io::Error),
    /// A snapshot could not be serialized.
    #[display("Serialization error: {}", _0)]
    Json(serde_json::Error),
}

/// What the session should do after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading input.
    Continue,
    /// The user asked to leave.
    Quit,
}

/// View adapter over one [`GameModel`].
#[derive(Debug)]
pub struct ConnectFour<W> {
    model: GameModel,
    out: W,
    format: OutputFormat,
}

impl<W: Write> ConnectFour<W> {
    /// Creates a view over a fresh game.
    #[instrument(skip(out))]
    pub fn new(config: BoardConfig, format: OutputFormat, out: W) -> Self {
        Self {
            model: GameModel::new(config),
            out,
            format,
        }
    }

    /// Returns the underlying model.
    pub fn model(&self) -> &GameModel {
        &self.model
    }

    /// Returns the output sink.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consumes the view, returning the output sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Renders the current (initially empty) board.
    #[instrument(skip(self))]
    pub fn create_board(&mut self) -> Result<(), ViewError> {
        let snapshot = self.model.snapshot();
        self.update_board(&snapshot)
    }

    /// Forwards a move to the model and reflects the result.
    ///
    /// Rejected moves write nothing and return `Ok(None)`.
    #[instrument(skip(self))]
    pub fn handle_user_move(&mut self, row: usize, col: usize) -> Result<Option<MoveResult>, ViewError> {
        let result = match self.model.attempt_move(row, col) {
            Ok(result) => result,
            Err(e) => {
                debug!(error = %e, "Ignoring rejected move");
                return Ok(None);
            }
        };

        self.update_board(&result)?;
        self.handle_game_end(&result)?;
        Ok(Some(result))
    }

    /// Interprets one line of user input.
    ///
    /// Accepts a coordinate (`"row,col"` or `"row col"`), `restart`, or
    /// `quit`. Anything else is ignored like an invalid move.
    #[instrument(skip(self))]
    pub fn handle_input(&mut self, line: &str) -> Result<Flow, ViewError> {
        match line.trim() {
            "" => {}
            "quit" | "exit" => return Ok(Flow::Quit),
            "restart" => {
                self.model.reset();
                self.create_board()?;
            }
            input => match input.parse::<Coord>() {
                Ok(coord) => {
                    self.handle_user_move(coord.row, coord.col)?;
                }
                Err(e) => debug!(error = %e, "Ignoring unreadable input"),
            },
        }
        Ok(Flow::Continue)
    }

    /// Plays a scripted sequence of `"row,col"` moves.
    ///
    /// Unreadable or rejected moves are logged as warnings and skipped.
    /// Returns how many moves the model accepted.
    #[instrument(skip_all)]
    pub fn play_moves<'a>(
        &mut self,
        moves: impl IntoIterator<Item = &'a str>,
    ) -> Result<usize, ViewError> {
        let mut accepted = 0;
        for raw in moves {
            let coord: Coord = match raw.parse() {
                Ok(coord) => coord,
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable move");
                    continue;
                }
            };

            match self.handle_user_move(coord.row, coord.col)? {
                Some(_) => accepted += 1,
                None => warn!(%coord, "Skipping rejected move"),
            }
        }
        Ok(accepted)
    }

    /// Writes the snapshot's board.
    fn update_board(&mut self, data: &MoveResult) -> Result<(), ViewError> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.out, "{}", data.board)?;
                if !data.status.is_terminal() {
                    writeln!(self.out, "{} to move", data.active)?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, data)?;
                writeln!(self.out)?;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Announces a win or a draw. JSON output carries the status already.
    fn handle_game_end(&mut self, data: &MoveResult) -> Result<(), ViewError> {
        if self.format == OutputFormat::Json {
            return Ok(());
        }

        match data.status {
            GameStatus::Won(player) => {
                info!(%player, "Announcing winner");
                let run = self
                    .model
                    .winning_run()
                    .map(|run| run.map(|c| c.to_string()).join(" "))
                    .unwrap_or_default();
                writeln!(self.out, "{} won! ({})", player, run)?;
            }
            GameStatus::Draw => {
                info!("Announcing draw");
                writeln!(self.out, "Draw game!")?;
            }
            GameStatus::Ongoing => return Ok(()),
        }
        writeln!(self.out, "Type \"restart\" to play again.")?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(format: OutputFormat) -> ConnectFour<Vec<u8>> {
        ConnectFour::new(BoardConfig::new(4).unwrap(), format, Vec::new())
    }

    fn output(view: ConnectFour<Vec<u8>>) -> String {
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn test_create_board_renders_empty_grid() {
        let mut view = view(OutputFormat::Text);
        view.create_board().unwrap();
        assert_eq!(
            output(view),
            "  0 1 2 3\n0 . . . .\n1 . . . .\n2 . . . .\n3 . . . .\nX to move\n"
        );
    }

    #[test]
    fn test_rejected_move_writes_nothing() {
        let mut view = view(OutputFormat::Text);
        assert!(view.handle_user_move(4, 0).unwrap().is_none());
        assert!(view.handle_input("not a move").is_ok());
        assert!(output(view).is_empty());
    }

    #[test]
    fn test_quit_and_blank_lines() {
        let mut view = view(OutputFormat::Text);
        assert_eq!(view.handle_input("").unwrap(), Flow::Continue);
        assert_eq!(view.handle_input(" quit ").unwrap(), Flow::Quit);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut view = view(OutputFormat::Text);
        view.handle_input("1,1").unwrap();
        view.handle_input("restart").unwrap();
        assert_eq!(view.model().board().occupied(), 0);
        assert!(output(view).ends_with("3 . . . .\nX to move\n"));
    }
}
