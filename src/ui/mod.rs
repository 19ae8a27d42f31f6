// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! The overlay follows the Elm-style "state down, messages up" pattern: the
//! toolkit-independent state lives in [`crate::hud`], this module turns it
//! into Iced widgets.
//!
//! # Modules
//!
//! - [`text_overlay`] - Overlay view state and the card widget tree
//! - [`state`] - Validated setting values (fade duration, text size)
//! - [`styles`] - Card, keycap and icon styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - Embedded SVG icon set

pub mod design_tokens;
pub mod icons;
pub mod state;
pub mod styles;
pub mod text_overlay;
pub mod theming;
