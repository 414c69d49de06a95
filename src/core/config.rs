use super::common::BoardError;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLUMNS: usize = 7;
/// Smallest row or column count a board accepts.
pub const MIN_DIMENSION: usize = 2;
/// Largest row or column count; column numbers are drawn two digits wide.
pub const MAX_DIMENSION: usize = 99;

/// Number of same-owner cells in a line needed to win.
pub const CONNECT_LENGTH: usize = 4;

/// Board dimensions for a session. Every game in the session uses the same
/// dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub columns: usize,
}

impl GameConfig {
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Reject dimensions a board cannot be built with.
    pub fn validate(&self) -> Result<(), BoardError> {
        self.cells().map(|_| ())
    }

    /// Total number of cells on a board of this size, or an error when the
    /// dimensions are out of range.
    pub fn cells(&self) -> Result<usize, BoardError> {
        let invalid = BoardError::InvalidDimensions {
            rows: self.rows,
            columns: self.columns,
        };
        let range = MIN_DIMENSION..=MAX_DIMENSION;
        if !range.contains(&self.rows) || !range.contains(&self.columns) {
            return Err(invalid);
        }
        self.rows.checked_mul(self.columns).ok_or(invalid)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}
