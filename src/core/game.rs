use super::{
    board::Board,
    common::{BoardError, Player},
    config::{GameConfig, CONNECT_LENGTH},
    win::WinDetector,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Returns `true` for a win or a draw.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// A single game: one board plus move bookkeeping.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    detector: WinDetector,
    moves_done: usize,
    status: GameStatus,
}

impl Game {
    /// Start a game on an empty board sized by `config`.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::from_config(config)?,
            detector: WinDetector::new(CONNECT_LENGTH),
            moves_done: 0,
            status: GameStatus::InProgress,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn moves_done(&self) -> usize {
        self.moves_done
    }

    pub fn connect_length(&self) -> usize {
        self.detector.connect_length()
    }

    /// Fewest moves, with strict alternation, before anyone can have won.
    pub fn min_moves_to_win(&self) -> usize {
        2 * self.connect_length() - 1
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Drop a piece for `player` into `col` and evaluate the result. A win
    /// takes precedence over a full board.
    pub fn drop(&mut self, col: usize, player: Player) -> Result<GameStatus, BoardError> {
        let (row, col) = self.board.drop(col, player)?;
        self.moves_done += 1;
        self.status = if self.detector.check_win(&self.board, row, col) {
            GameStatus::Won(player)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };
        Ok(self.status)
    }
}
