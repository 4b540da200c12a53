//! Mapping of terminal events to UI actions.

use crossterm::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use noughts_core::Position;
use ratatui::layout::{Position as ScreenPosition, Rect};

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Play the cell at this position.
    Play(Position),
    /// Play the cell under the keyboard cursor.
    PlayCursor,
    /// Move the keyboard cursor.
    Cursor(Position),
    /// Flip light/dark.
    ToggleTheme,
    /// Clear the board.
    Restart,
    /// Leave the application.
    Quit,
}

/// Screen areas of the click targets, as last drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hitmap {
    /// Board cells in board order.
    pub cells: [Rect; 9],
    /// Theme toggle button.
    pub toggle: Rect,
    /// Restart button.
    pub restart: Rect,
}

impl Hitmap {
    /// Returns the action of the target under (`column`, `row`), if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Action> {
        let point = ScreenPosition::new(column, row);
        if self.toggle.contains(point) {
            return Some(Action::ToggleTheme);
        }
        if self.restart.contains(point) {
            return Some(Action::Restart);
        }
        self.cells
            .iter()
            .position(|area| area.contains(point))
            .and_then(Position::from_index)
            .map(Action::Play)
    }
}

/// Translates a terminal event into an action.
pub fn map_event(event: &Event, cursor: Position, hitmap: &Hitmap) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(key.code, cursor),
        Event::Mouse(mouse) => map_mouse(mouse, hitmap),
        _ => None,
    }
}

/// Translates a key press.
pub fn map_key(code: KeyCode, cursor: Position) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map(Action::Play),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, code)))
        }
        _ => None,
    }
}

/// Translates a mouse event; only left-button presses count as clicks.
pub fn map_mouse(mouse: &MouseEvent, hitmap: &Hitmap) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => hitmap.hit(mouse.column, mouse.row),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
