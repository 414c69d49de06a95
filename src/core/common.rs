//! Common types for Connect Four: players, cells and board errors.

/// One of the two sides in a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Black,
}

impl Player {
    /// The player who moves after `self`.
    pub const fn other(self) -> Player {
        match self {
            Player::Red => Player::Black,
            Player::Black => Player::Red,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Player::Red => "RED",
            Player::Black => "BLACK",
        }
    }

    /// Cell state owned by this player.
    pub const fn cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Black => Cell::Black,
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Red,
    Black,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Rows or columns outside the supported range; the board cannot be built.
    InvalidDimensions { rows: usize, columns: usize },
    /// Column index outside the board.
    InvalidColumn(usize),
    /// Column has no empty cell left.
    ColumnFull(usize),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, columns } => write!(
                f,
                "Invalid board size {}x{}: row and column counts must be between {} and {}",
                rows,
                columns,
                super::config::MIN_DIMENSION,
                super::config::MAX_DIMENSION
            ),
            BoardError::InvalidColumn(col) => write!(f, "Column index {} is out of range", col),
            BoardError::ColumnFull(col) => write!(f, "Column index {} is full", col),
        }
    }
}

impl core::error::Error for BoardError {}
