// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[overlay]` - Card appearance and transition timing
//! - `[window]` - Overlay window geometry
//! - `[host]` - Host transport behavior
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `HUD_TEXT_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use hud_text::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.overlay.fade_duration_ms = Some(150);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::state::{FadeDuration, TextSize};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Card color scheme (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Overlay card settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Scale-fade duration in milliseconds.
    #[serde(
        default = "default_fade_duration_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub fade_duration_ms: Option<u64>,

    /// Body text size in pixels.
    #[serde(default = "default_text_size", skip_serializing_if = "Option::is_none")]
    pub text_size: Option<f32>,

    /// Gap between the card and the screen edge.
    #[serde(
        default = "default_card_margin",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_margin: Option<f32>,

    /// Maximum card width before the body wraps.
    #[serde(
        default = "default_card_max_width",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_width: Option<f32>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            fade_duration_ms: default_fade_duration_ms(),
            text_size: default_text_size(),
            card_margin: default_card_margin(),
            max_width: default_card_max_width(),
        }
    }
}

impl OverlayConfig {
    /// Fade duration clamped to the supported range.
    #[must_use]
    pub fn fade_duration(&self) -> FadeDuration {
        self.fade_duration_ms
            .map(FadeDuration::new)
            .unwrap_or_default()
    }

    /// Text size clamped to the supported range.
    #[must_use]
    pub fn text_size(&self) -> TextSize {
        self.text_size.map(TextSize::new).unwrap_or_default()
    }
}

/// Overlay window geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default = "default_window_width", skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(
        default = "default_window_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub height: Option<u32>,

    /// Keep the overlay above other windows.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub always_on_top: Option<bool>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            always_on_top: Some(true),
        }
    }
}

impl WindowConfig {
    /// Window size with each side raised to the minimum.
    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (
            self.width
                .unwrap_or(DEFAULT_WINDOW_WIDTH)
                .max(MIN_WINDOW_SIDE),
            self.height
                .unwrap_or(DEFAULT_WINDOW_HEIGHT)
                .max(MIN_WINDOW_SIDE),
        )
    }
}

/// Host transport settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HostConfig {
    /// Close the overlay when the host closes standard input.
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub exit_on_eof: Option<bool>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            exit_on_eof: Some(true),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,

    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub host: HostConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_fade_duration_ms() -> Option<u64> {
    Some(DEFAULT_FADE_DURATION_MS)
}

fn default_text_size() -> Option<f32> {
    Some(DEFAULT_TEXT_SIZE)
}

fn default_card_margin() -> Option<f32> {
    Some(DEFAULT_CARD_MARGIN)
}

fn default_card_max_width() -> Option<f32> {
    Some(DEFAULT_CARD_MAX_WIDTH)
}

fn default_window_width() -> Option<u32> {
    Some(DEFAULT_WINDOW_WIDTH)
}

fn default_window_height() -> Option<u32> {
    Some(DEFAULT_WINDOW_HEIGHT)
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
