// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Transition**: Scale-fade duration bounds
//! - **Text**: Body text size bounds
//! - **Card**: Overlay card margin and width
//! - **Window**: Overlay window size

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default duration of the scale-fade transition (in milliseconds).
pub const DEFAULT_FADE_DURATION_MS: u64 = 200;

/// Minimum fade duration (0 disables the animation).
pub const MIN_FADE_DURATION_MS: u64 = 0;

/// Maximum fade duration (in milliseconds).
pub const MAX_FADE_DURATION_MS: u64 = 2_000;

// ==========================================================================
// Text Defaults
// ==========================================================================

/// Default body text size in pixels.
pub const DEFAULT_TEXT_SIZE: f32 = 16.0;

/// Minimum body text size in pixels.
pub const MIN_TEXT_SIZE: f32 = 8.0;

/// Maximum body text size in pixels.
pub const MAX_TEXT_SIZE: f32 = 64.0;

// ==========================================================================
// Card Defaults
// ==========================================================================

/// Distance between the card and the screen edge, in pixels.
pub const DEFAULT_CARD_MARGIN: f32 = 8.0;

/// Maximum card width in pixels before text wraps.
pub const DEFAULT_CARD_MAX_WIDTH: f32 = 480.0;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default overlay window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1280;

/// Default overlay window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

/// Smallest window the overlay accepts from configuration.
pub const MIN_WINDOW_SIDE: u32 = 200;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_FADE_DURATION_MS >= MIN_FADE_DURATION_MS);
    assert!(DEFAULT_FADE_DURATION_MS <= MAX_FADE_DURATION_MS);
    assert!(DEFAULT_TEXT_SIZE >= MIN_TEXT_SIZE);
    assert!(DEFAULT_TEXT_SIZE <= MAX_TEXT_SIZE);
    assert!(DEFAULT_WINDOW_WIDTH >= MIN_WINDOW_SIDE);
    assert!(DEFAULT_WINDOW_HEIGHT >= MIN_WINDOW_SIDE);
};
