//! Light/dark theme controller.
//!
//! The controller owns the theme value and pushes every change into a
//! [`ThemeTarget`], the presentation layer that restyles itself from it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Presentation theme.
///
/// Displays and parses as the attribute value (`light` / `dark`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Theme {
    /// Light theme (the initial theme).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// Returns the other theme.
    #[instrument]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Receives the current theme.
///
/// Implemented by whatever styling layer consumes the theme attribute.
pub trait ThemeTarget {
    /// Applies `theme` to the presentation.
    fn apply_theme(&mut self, theme: Theme);
}

/// Holds the theme and keeps a [`ThemeTarget`] in sync with it.
#[derive(Debug, Clone)]
pub struct ThemeController<T> {
    theme: Theme,
    target: T,
}

impl<T: ThemeTarget> ThemeController<T> {
    /// Creates a controller in the light theme.
    ///
    /// The target receives the initial theme immediately.
    pub fn new(target: T) -> Self {
        Self::with_theme(Theme::default(), target)
    }

    /// Creates a controller starting from `theme`.
    #[instrument(skip(target))]
    pub fn with_theme(theme: Theme, mut target: T) -> Self {
        debug!(%theme, "Applying initial theme");
        target.apply_theme(theme);
        Self { theme, target }
    }

    /// Flips light and dark and propagates the new value.
    #[instrument(skip(self), fields(from = %self.theme))]
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.target.apply_theme(self.theme);
        info!(theme = %self.theme, "Theme toggled");
        self.theme
    }

    /// Returns the current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Returns the presentation target.
    pub fn target(&self) -> &T {
        &self.target
    }

    /// Caption for the toggle control: the theme it switches to.
    ///
    /// No variation selectors, so the measured width is the drawn width.
    pub fn toggle_label(&self) -> &'static str {
        match self.theme {
            Theme::Light => "🌙 Dark",
            Theme::Dark => "☀ Light",
        }
    }

    /// Accessible description of the toggle control.
    pub fn toggle_hint(&self) -> String {
        format!("Switch to {} mode", self.theme.toggled())
    }
}
