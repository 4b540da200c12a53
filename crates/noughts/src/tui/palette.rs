//! Colour palettes for the light and dark themes.

use noughts_core::{Mark, Theme, ThemeTarget};
use ratatui::style::{Color, Modifier, Style};
use tracing::debug;

/// Styles used by the renderer, swapped wholesale on theme change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    theme: Theme,
    background: Color,
    text: Color,
    muted: Color,
    border: Color,
    accent: Color,
    cell: Color,
    x: Color,
    o: Color,
    win: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                theme,
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                border: Color::DarkGray,
                accent: Color::Blue,
                cell: Color::Rgb(238, 238, 238),
                x: Color::Blue,
                o: Color::Red,
                win: Color::LightGreen,
            },
            Theme::Dark => Self {
                theme,
                background: Color::Black,
                text: Color::White,
                muted: Color::DarkGray,
                border: Color::Gray,
                accent: Color::Cyan,
                cell: Color::Rgb(40, 40, 48),
                x: Color::LightBlue,
                o: Color::LightRed,
                win: Color::Green,
            },
        }
    }

    /// Theme this palette was built for.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Page background and default text.
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.text)
    }

    /// Hints and empty cells.
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Borders around the board and buttons.
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Buttons and the status line.
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Background of a board cell.
    pub fn cell(&self) -> Style {
        Style::default().bg(self.cell).fg(self.text)
    }

    /// Style of a placed mark.
    pub fn mark(&self, mark: Mark) -> Style {
        let fg = match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        };
        self.cell().fg(fg).add_modifier(Modifier::BOLD)
    }

    /// Background of a cell on the winning line.
    pub fn win(&self) -> Style {
        Style::default().bg(self.win)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(Theme::default())
    }
}

impl ThemeTarget for Palette {
    fn apply_theme(&mut self, theme: Theme) {
        debug!(%theme, "Switching palette");
        *self = Self::for_theme(theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_theme_swaps_palette() {
        let mut palette = Palette::default();
        assert_eq!(palette.theme(), Theme::Light);
        palette.apply_theme(Theme::Dark);
        assert_eq!(palette, Palette::for_theme(Theme::Dark));
        assert_eq!(palette.base().bg, Some(Color::Black));
    }
}
