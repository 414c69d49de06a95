//! Drop-style game grid. Row 0 is the top row; pieces settle at the highest
//! free row index of a column.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use super::common::{BoardError, Cell, Player};
use super::config::GameConfig;

/// Grid of cells with an empty-cell counter and the last drop position.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    empty: usize,
    last_drop: Option<(usize, usize)>,
}

impl Board {
    /// Create an empty board. Both dimensions must lie in
    /// `MIN_DIMENSION..=MAX_DIMENSION`.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        let cells = GameConfig::new(rows, columns).cells()?;
        Ok(Board {
            rows,
            columns,
            cells: vec![Cell::Empty; cells],
            empty: cells,
            last_drop: None,
        })
    }

    /// Create an empty board sized by `config`.
    pub fn from_config(config: &GameConfig) -> Result<Self, BoardError> {
        Self::new(config.rows, config.columns)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cell at (row, col), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.columns {
            Some(self.cells[row * self.columns + col])
        } else {
            None
        }
    }

    /// Number of cells still empty.
    pub fn empty_cells(&self) -> usize {
        self.empty
    }

    /// Number of cells holding a piece.
    pub fn filled_cells(&self) -> usize {
        self.cells.len() - self.empty
    }

    /// Position of the most recent successful drop.
    pub fn last_drop(&self) -> Option<(usize, usize)> {
        self.last_drop
    }

    /// Returns `true` when the top cell of `col` holds a piece. Columns off the
    /// board count as occupied since nothing can be dropped there.
    pub fn top_cell_occupied(&self, col: usize) -> bool {
        self.cell(0, col).map_or(true, |c| !c.is_empty())
    }

    /// Drop a piece for `player` into `col`, returning where it landed.
    pub fn drop(&mut self, col: usize, player: Player) -> Result<(usize, usize), BoardError> {
        if col >= self.columns {
            return Err(BoardError::InvalidColumn(col));
        }
        // scan bottom-up for the first free slot
        let row = (0..self.rows)
            .rev()
            .find(|&r| self.cells[r * self.columns + col].is_empty())
            .ok_or(BoardError::ColumnFull(col))?;
        self.cells[row * self.columns + col] = player.cell();
        self.empty -= 1;
        self.last_drop = Some((row, col));
        Ok((row, col))
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.empty == 0
    }

    /// Iterate over one row from left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Cell> + '_ {
        let start = row.min(self.rows) * self.columns;
        let end = if row < self.rows { start + self.columns } else { start };
        self.cells[start..end].iter().copied()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ rows: {}, columns: {}, empty: {}, last_drop: {:?} }}",
            self.rows, self.columns, self.empty, self.last_drop
        )?;
        for r in 0..self.rows {
            for cell in self.row(r) {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Black => 'B',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
