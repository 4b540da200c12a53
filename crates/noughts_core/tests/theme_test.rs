//! Tests for the theme controller.

use noughts_core::{Theme, ThemeController, ThemeTarget};

/// Mirrors a `data-theme` style attribute.
#[derive(Debug, Default)]
struct Attribute {
    value: Option<String>,
    writes: usize,
}

impl ThemeTarget for Attribute {
    fn apply_theme(&mut self, theme: Theme) {
        self.value = Some(theme.to_string());
        self.writes += 1;
    }
}

#[test]
fn test_starts_light() {
    let controller = ThemeController::new(Attribute::default());
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.target().value.as_deref(), Some("light"));
}

#[test]
fn test_one_toggle_is_dark_two_is_light() {
    let mut controller = ThemeController::new(Attribute::default());

    controller.toggle();
    assert_eq!(controller.theme(), Theme::Dark);
    assert_eq!(controller.target().value.as_deref(), Some("dark"));

    controller.toggle();
    assert_eq!(controller.theme(), Theme::Light);
    assert_eq!(controller.target().value.as_deref(), Some("light"));
    assert_eq!(controller.target().writes, 3);
}

#[test]
fn test_custom_initial_theme() {
    let mut controller = ThemeController::with_theme(Theme::Dark, Attribute::default());
    assert_eq!(controller.target().value.as_deref(), Some("dark"));
    assert_eq!(controller.toggle(), Theme::Light);
}

#[test]
fn test_theme_serde_uses_attribute_value() {
    assert_eq!(serde_json::to_string(&Theme::Dark).expect("serialize"), "\"dark\"");
    let theme: Theme = serde_json::from_str("\"light\"").expect("deserialize");
    assert_eq!(theme, Theme::Light);
}
