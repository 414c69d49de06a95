//! Presenter trait and implementations
//!
//! The driver talks to the outside world only through [`Presenter`]:
//! - rendering the board
//! - asking the current player for a column
//! - reporting rejected input and game results
//!
//! [`CliPresenter`] is the text-mode implementation used by the binary.

use crate::core::{Board, GameStatus, Player};

/// Response to a column request. Column numbers are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnInput {
    Column(usize),
    /// Anything that is not a column number.
    Invalid,
    /// The user asked to leave, or input ended.
    Quit,
}

/// Message shown after a rejected column choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    InvalidColumn { min: usize, max: usize },
    ColumnFull(usize),
}

/// Interface implemented by text front ends.
pub trait Presenter {
    /// Display the board.
    fn render_board(&mut self, board: &Board) -> anyhow::Result<()>;

    /// Ask `player` for a column in `min..=max`. Range checking is left to the
    /// caller, so out-of-range numbers come back as `Column`.
    fn request_column(
        &mut self,
        player: Player,
        min: usize,
        max: usize,
    ) -> anyhow::Result<ColumnInput>;

    /// Explain why the last choice was rejected.
    fn notify(&mut self, notice: Notice) -> anyhow::Result<()>;

    /// Report a finished game.
    fn announce(&mut self, status: GameStatus) -> anyhow::Result<()>;

    /// Wait for the user before the next game starts. `Ok(false)` ends the
    /// session.
    fn acknowledge_game_over(&mut self) -> anyhow::Result<bool>;
}

pub mod cli;
pub use cli::CliPresenter;
