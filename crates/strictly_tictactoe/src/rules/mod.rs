//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here knows about turns, rounds or
//! scores; the engine composes these into match transitions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WinningLine, find_winning_line};

use crate::outcome::Outcome;
use crate::types::Board;
use tracing::instrument;

/// Evaluates a board.
///
/// Returns the first completed line in [`WinningLine`] enumeration order as a
/// win, a draw when the board is full with no line, and `None` while play can
/// continue.
#[instrument]
pub fn evaluate(board: &Board) -> Option<Outcome> {
    if let Some((player, line)) = find_winning_line(board) {
        return Some(Outcome::Win { player, line });
    }
    if is_full(board) {
        return Some(Outcome::Draw);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    fn board_from(marks: &str) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (cell, mark) in cells.iter_mut().zip(marks.chars()) {
            *cell = match mark {
                'X' => Cell::Occupied(Player::X),
                'O' => Cell::Occupied(Player::O),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_has_no_outcome() {
        assert_eq!(evaluate(&Board::new()), None);
    }

    #[test]
    fn test_top_row_win() {
        let board = board_from("XXXOO....");
        assert_eq!(
            evaluate(&board),
            Some(Outcome::Win {
                player: Player::X,
                line: WinningLine::TopRow
            })
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from("XOXXOOOXX");
        assert_eq!(evaluate(&board), Some(Outcome::Draw));
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = board_from("XOXOXOOXX");
        assert_eq!(
            evaluate(&board),
            Some(Outcome::Win {
                player: Player::X,
                line: WinningLine::MainDiagonal
            })
        );
    }

    #[test]
    fn test_double_line_reports_first_in_order() {
        // X completes both the top row and the main diagonal.
        let board = board_from("XXXOXO.OX");
        assert_eq!(
            evaluate(&board),
            Some(Outcome::Win {
                player: Player::X,
                line: WinningLine::TopRow
            })
        );
    }
}
