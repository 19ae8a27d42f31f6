// SPDX-License-Identifier: MPL-2.0
//! `hud_text` is a heads-up text overlay built with the Iced GUI framework.
//!
//! A host process sends `textUi` / `textUiHide` events as JSON lines; the
//! overlay shows the text as a small card anchored to one of nine screen
//! positions, with an optional keybind badge or icon and a markdown body.

#![doc(html_root_url = "https://docs.rs/hud_text/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod hud;
pub mod logging;
pub mod ui;
