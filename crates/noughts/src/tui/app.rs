//! Application state and logic.

use super::input::Action;
use super::palette::Palette;
use noughts_core::{Game, Placement, Position, Theme, ThemeController};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns both state machines; the renderer reads them through accessors.
#[derive(Debug)]
pub struct App {
    game: Game,
    theme: ThemeController<Palette>,
    cursor: Position,
    running: bool,
}

impl App {
    /// Creates a new application starting in `theme`.
    #[instrument]
    pub fn new(theme: Theme) -> Self {
        Self {
            game: Game::new(),
            theme: ThemeController::with_theme(theme, Palette::default()),
            cursor: Position::Center,
            running: true,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the theme controller.
    pub fn theme(&self) -> &ThemeController<Palette> {
        &self.theme
    }

    /// Gets the active palette.
    pub fn palette(&self) -> &Palette {
        self.theme.target()
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Play(position) => self.play(position),
            Action::PlayCursor => self.play(self.cursor),
            Action::Cursor(position) => self.cursor = position,
            Action::ToggleTheme => {
                self.theme.toggle();
            }
            Action::Restart => self.restart(),
            Action::Quit => {
                info!("User quit");
                self.running = false;
            }
        }
    }

    fn play(&mut self, position: Position) {
        self.cursor = position;
        match self.game.play_at(position) {
            Placement::Placed { mark, .. } => {
                info!(%position, %mark, status = %self.game.status(), "Move played");
            }
            Placement::Ignored(reason) => {
                debug!(%position, %reason, "Click ignored");
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.cursor = Position::Center;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_core::{Cell, Mark, Status};

    #[test]
    fn test_clicks_drive_the_game() {
        let mut app = App::new(Theme::Light);
        for index in [0, 3, 1, 4, 2] {
            let position = Position::from_index(index).expect("valid index");
            app.apply(Action::Play(position));
        }
        assert_eq!(app.game().status(), Status::Winner(Mark::X));

        // Ignored after the win
        app.apply(Action::Play(Position::BottomRight));
        assert_eq!(app.game().board().get(Position::BottomRight), Cell::Empty);

        app.apply(Action::Restart);
        assert_eq!(app.game(), &Game::new());
    }

    #[test]
    fn test_cursor_play() {
        let mut app = App::new(Theme::Light);
        app.apply(Action::Cursor(Position::TopRight));
        app.apply(Action::PlayCursor);
        assert_eq!(app.game().board().get(Position::TopRight), Cell::X);
        assert_eq!(app.game().next(), Mark::O);
    }

    #[test]
    fn test_toggle_updates_palette() {
        let mut app = App::new(Theme::Light);
        app.apply(Action::ToggleTheme);
        assert_eq!(app.theme().theme(), Theme::Dark);
        assert_eq!(app.palette().theme(), Theme::Dark);
        app.apply(Action::ToggleTheme);
        assert_eq!(app.palette().theme(), Theme::Light);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Theme::Dark);
        assert!(app.is_running());
        app.apply(Action::Quit);
        assert!(!app.is_running());
    }
}
