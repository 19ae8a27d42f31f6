// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theming for the overlay card.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};

/// Colors used to paint the overlay card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub card_background: Color,
    pub card_border: Color,
    pub card_text: Color,
}

impl ColorScheme {
    /// Light card.
    #[must_use]
    pub fn light() -> Self {
        Self {
            card_background: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
            card_border: palette::GRAY_200,
            card_text: palette::GRAY_900,
        }
    }

    /// Dark card (the HUD default).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            card_background: Color {
                a: opacity::SURFACE,
                ..palette::DARK_500
            },
            card_border: palette::DARK_400,
            card_text: palette::TEXT_ON_DARK,
        }
    }

    /// Detects the system theme and returns the appropriate `ColorScheme`.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark() // Default to dark for Dark mode or on error
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }

    /// Replaces `System` with the mode the desktop reports right now.
    #[must_use]
    pub fn resolve(self) -> Self {
        match self {
            ThemeMode::System if self.is_dark() => ThemeMode::Dark,
            ThemeMode::System => ThemeMode::Light,
            explicit => explicit,
        }
    }

    /// Resolves the card colors for this mode.
    #[must_use]
    pub fn color_scheme(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        }
    }

    /// The Iced theme matching this mode.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        if self.is_dark() {
            iced::Theme::Dark
        } else {
            iced::Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.card_background.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.card_background.r < 0.2);
        assert!(scheme.card_text.r > 0.8);
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on actual system theme, so we just verify it doesn't panic
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn resolve_keeps_explicit_modes_and_replaces_system() {
        assert_eq!(ThemeMode::Light.resolve(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.resolve(), ThemeMode::Dark);
        assert_ne!(ThemeMode::System.resolve(), ThemeMode::System);
    }

    #[test]
    fn explicit_modes_pick_matching_schemes() {
        assert_eq!(ThemeMode::Dark.color_scheme(), ColorScheme::dark());
        assert_eq!(ThemeMode::Light.color_scheme(), ColorScheme::light());
        assert_eq!(ThemeMode::Light.iced_theme(), iced::Theme::Light);
    }
}
