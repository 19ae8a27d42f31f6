// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Validated setting values shared by the configuration and the overlay view.

pub mod fade_duration;
pub mod text_size;

pub use fade_duration::FadeDuration;
pub use text_size::TextSize;
