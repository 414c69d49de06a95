//! Four-in-a-row detection around the most recent drop.

use super::board::Board;
use super::common::Cell;
use super::config::CONNECT_LENGTH;

/// Row/column steps for the four lines through a cell: horizontal, vertical,
/// diagonal top-left to bottom-right, diagonal top-right to bottom-left.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Decides whether a single drop completed a winning line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinDetector {
    connect_length: usize,
}

impl WinDetector {
    pub const fn new(connect_length: usize) -> Self {
        Self { connect_length }
    }

    pub const fn connect_length(&self) -> usize {
        self.connect_length
    }

    /// Returns `true` if the piece at (row, col) is part of a contiguous line of
    /// at least `connect_length` same-owner cells along any axis.
    ///
    /// An empty or off-board cell never wins.
    pub fn check_win(&self, board: &Board, row: usize, col: usize) -> bool {
        if board.filled_cells() < self.connect_length {
            return false;
        }
        let owner = match board.cell(row, col) {
            Some(cell) if !cell.is_empty() => cell,
            _ => return false,
        };
        AXES.iter().any(|&(dr, dc)| {
            let run = 1
                + self.extend(board, row, col, dr, dc, owner)
                + self.extend(board, row, col, -dr, -dc, owner);
            run >= self.connect_length
        })
    }

    /// Check the board's recorded last drop; `false` before the first drop.
    pub fn check_last_drop(&self, board: &Board) -> bool {
        board
            .last_drop()
            .is_some_and(|(row, col)| self.check_win(board, row, col))
    }

    /// Count same-owner cells stepping away from (row, col), stopping at the
    /// first gap, opponent piece or board edge, and never past
    /// `connect_length - 1` steps.
    fn extend(
        &self,
        board: &Board,
        row: usize,
        col: usize,
        dr: isize,
        dc: isize,
        owner: Cell,
    ) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row, col);
        while count + 1 < self.connect_length {
            let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc))
            else {
                break;
            };
            if board.cell(nr, nc) != Some(owner) {
                break;
            }
            count += 1;
            r = nr;
            c = nc;
        }
        count
    }
}

impl Default for WinDetector {
    fn default() -> Self {
        Self::new(CONNECT_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::common::Player;

    #[test]
    fn five_in_a_row_still_wins() {
        let mut board = Board::new(6, 7).unwrap();
        for col in [0, 1, 3, 4] {
            board.drop(col, Player::Red).unwrap();
        }
        let (row, col) = board.drop(2, Player::Red).unwrap();
        assert!(WinDetector::default().check_win(&board, row, col));
    }

    #[test]
    fn empty_cell_never_wins() {
        let board = Board::new(6, 7).unwrap();
        assert!(!WinDetector::default().check_win(&board, 5, 0));
        assert!(!WinDetector::default().check_last_drop(&board));
    }

    #[test]
    fn custom_length_detector() {
        let mut board = Board::new(3, 3).unwrap();
        board.drop(0, Player::Black).unwrap();
        let (row, col) = board.drop(1, Player::Black).unwrap();
        assert!(WinDetector::new(2).check_win(&board, row, col));
        assert!(!WinDetector::new(3).check_win(&board, row, col));
    }
}
