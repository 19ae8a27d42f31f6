// SPDX-License-Identifier: MPL-2.0
//! Integration tests for settings files feeding the overlay window and view.

use hud_text::app::window_settings;
use hud_text::config::{self, MAX_TEXT_SIZE, MIN_WINDOW_SIDE};
use hud_text::ui::text_overlay::ViewSettings;
use hud_text::ui::theming::{ColorScheme, ThemeMode};
use std::fs;
use tempfile::tempdir;

#[test]
fn hand_written_settings_reach_the_view() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    fs::write(
        temp_dir.path().join("settings.toml"),
        r#"
[general]
theme_mode = "Light"

[overlay]
fade_duration_ms = 0
text_size = 500.0
card_margin = 24.0

[window]
width = 50
always_on_top = false

[host]
exit_on_eof = false
"#,
    )
    .expect("failed to write config");

    let (config, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));
    assert!(warning.is_none(), "unexpected warning: {warning:?}");
    assert_eq!(config.general.theme_mode, ThemeMode::Light);
    assert_eq!(config.host.exit_on_eof, Some(false));

    let settings = ViewSettings::from_config(&config);
    assert_eq!(settings.scheme, ColorScheme::light());
    assert_eq!(settings.fade_duration.value(), 0);
    assert_eq!(settings.text_size.value(), MAX_TEXT_SIZE);
    assert_eq!(settings.card_margin, 24.0);

    let window = window_settings(&config);
    assert_eq!(window.size.width, MIN_WINDOW_SIDE as f32);
    assert_eq!(window.level, iced::window::Level::Normal);
}

#[test]
fn broken_settings_fall_back_with_a_warning() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    fs::write(
        temp_dir.path().join("settings.toml"),
        "[overlay]\ntext_size = \"huge\"\n",
    )
    .expect("failed to write config");

    let (config, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));
    assert_eq!(config, config::Config::default());
    assert!(warning.is_some_and(|w| w.contains("settings.toml")));
}

#[test]
fn saved_settings_are_reloaded() {
    let temp_dir = tempdir().expect("failed to create temp dir");
    let mut config = config::Config::default();
    config.overlay.card_margin = Some(40.0);
    config.general.theme_mode = ThemeMode::Dark;

    config::save_with_override(&config, Some(temp_dir.path().to_path_buf()))
        .expect("failed to save config");
    let (loaded, warning) = config::load_with_override(Some(temp_dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(loaded, config);
}
