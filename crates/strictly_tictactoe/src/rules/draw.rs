//! Draw detection logic for tic-tac-toe.
//!
//! A full board is only a draw when no line is complete; [`super::evaluate`]
//! checks lines first.

use crate::types::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::find_winning_line;
    use crate::types::Player;

    fn fill(order: &[usize]) -> Board {
        let mut board = Board::new();
        let mut player = Player::X;
        for &index in order {
            board.place(index, player).unwrap();
            player = player.opponent();
        }
        board
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill(&[4]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        let board = fill(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(is_full(&board));
        assert_eq!(find_winning_line(&board), None);
    }

    #[test]
    fn test_full_board_with_line() {
        // O X X / X O O / X X O: O holds the main diagonal.
        let board = fill(&[1, 0, 2, 4, 3, 5, 7, 8, 6]);
        assert!(is_full(&board));
        assert!(find_winning_line(&board).is_some());
    }
}
