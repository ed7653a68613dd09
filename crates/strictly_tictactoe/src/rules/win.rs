//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the 8 fixed lines that win when uniformly marked.
///
/// Declaration order is the scan order: rows, then columns, then diagonals.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum WinningLine {
    /// Cells 0, 1, 2.
    #[display("top row")]
    TopRow,
    /// Cells 3, 4, 5.
    #[display("middle row")]
    MiddleRow,
    /// Cells 6, 7, 8.
    #[display("bottom row")]
    BottomRow,
    /// Cells 0, 3, 6.
    #[display("left column")]
    LeftColumn,
    /// Cells 1, 4, 7.
    #[display("center column")]
    CenterColumn,
    /// Cells 2, 5, 8.
    #[display("right column")]
    RightColumn,
    /// Cells 0, 4, 8.
    #[display("main diagonal")]
    MainDiagonal,
    /// Cells 2, 4, 6.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl WinningLine {
    /// Cell indices on this line, ascending.
    pub fn indices(self) -> [usize; 3] {
        match self {
            WinningLine::TopRow => [0, 1, 2],
            WinningLine::MiddleRow => [3, 4, 5],
            WinningLine::BottomRow => [6, 7, 8],
            WinningLine::LeftColumn => [0, 3, 6],
            WinningLine::CenterColumn => [1, 4, 7],
            WinningLine::RightColumn => [2, 5, 8],
            WinningLine::MainDiagonal => [0, 4, 8],
            WinningLine::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Checks whether `index` lies on this line.
    pub fn contains(self, index: usize) -> bool {
        self.indices().contains(&index)
    }

    /// Returns the player holding all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.indices();
        let first = board.get(a)?;
        match first {
            Cell::Occupied(player) if board.get(b) == Some(first) && board.get(c) == Some(first) => {
                Some(player)
            }
            _ => None,
        }
    }
}

/// Finds the first completed line in enumeration order.
///
/// Returns the owning player together with the line so the presentation can
/// highlight it.
#[instrument]
pub fn find_winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    <WinningLine as strum::IntoEnumIterator>::iter()
        .find_map(|line| line.owner(board).map(|player| (player, line)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winning_line(&Board::new()), None);
    }

    #[test]
    fn test_enumeration_order_is_rows_columns_diagonals() {
        let order: Vec<[usize; 3]> = WinningLine::iter().map(WinningLine::indices).collect();
        assert_eq!(
            order,
            vec![
                [0, 1, 2],
                [3, 4, 5],
                [6, 7, 8],
                [0, 3, 6],
                [1, 4, 7],
                [2, 5, 8],
                [0, 4, 8],
                [2, 4, 6],
            ]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        for index in [2, 4, 6] {
            board.place(index, Player::O).unwrap();
        }
        assert_eq!(
            find_winning_line(&board),
            Some((Player::O, WinningLine::AntiDiagonal))
        );
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.place(0, Player::X).unwrap();
        board.place(1, Player::O).unwrap();
        board.place(2, Player::X).unwrap();
        assert_eq!(WinningLine::TopRow.owner(&board), None);
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_line_membership() {
        assert_eq!(WinningLine::LeftColumn.indices(), [0, 3, 6]);
        assert!(WinningLine::MainDiagonal.contains(4));
        assert!(!WinningLine::MainDiagonal.contains(2));
    }
}
