//! Keyboard mapping for the match screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strictly_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor one cell in a direction.
    MoveCursor(KeyCode),
    /// Place a mark at the cursor.
    PlaceAtCursor,
    /// Place a mark directly (keys 1-9).
    PlaceAt(Position),
    /// Advance to the next round.
    NextRound,
    /// Reset the whole match.
    ResetMatch,
    /// Leave the app.
    Quit,
}

/// Maps a key press to a command, if it means anything on this screen.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Command::MoveCursor(key.code))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlaceAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Command::PlaceAt),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NextRound),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::ResetMatch),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor with the arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Tab), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_map_to_cells() {
        assert_eq!(
            command_for(key(KeyCode::Char('1'))),
            Some(Command::PlaceAt(Position::TopLeft))
        );
        assert_eq!(
            command_for(key(KeyCode::Char('9'))),
            Some(Command::PlaceAt(Position::BottomRight))
        );
        assert_eq!(command_for(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_c_quits() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(ctrl_c), Some(Command::Quit));
        assert_eq!(command_for(key(KeyCode::Esc)), Some(Command::Quit));
    }
}
