// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::hud::{HudEvent, Position};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Event decoded from the host transport.
    Host(HudEvent),
    /// The host transport reached end of input.
    HostClosed,
    Tick(Instant), // Frame tick while the card or its icon animates
    /// A link in the markdown body was clicked. The overlay does not navigate.
    LinkClicked,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `HUD_TEXT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Anchor of the startup demo request.
    pub position: Option<Position>,
    /// Text to show at startup, as if the host had sent it.
    pub demo: Option<String>,
    /// Disables the stdin transport.
    pub no_stdin: bool,
}
