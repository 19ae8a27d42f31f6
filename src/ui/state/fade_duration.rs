// SPDX-License-Identifier: MPL-2.0
//! Fade duration domain type for the overlay transition.
//!
//! This module provides a type-safe wrapper for the scale-fade transition
//! duration in milliseconds.

use crate::config::{DEFAULT_FADE_DURATION_MS, MAX_FADE_DURATION_MS, MIN_FADE_DURATION_MS};

/// Scale-fade duration in milliseconds.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–2000 ms). Zero disables the animation.
///
/// # Example
///
/// ```
/// use hud_text::ui::state::FadeDuration;
///
/// let fade = FadeDuration::new(150);
/// assert_eq!(fade.value(), 150);
///
/// // Values outside range are clamped
/// let too_long = FadeDuration::new(10_000);
/// assert_eq!(too_long.value(), 2_000); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDuration(u64);

impl FadeDuration {
    /// Creates a new fade duration, clamping to valid range.
    #[must_use]
    pub fn new(value: u64) -> Self {
        Self(value.clamp(MIN_FADE_DURATION_MS, MAX_FADE_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }

    /// Returns the fade as a Duration.
    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0)
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self(DEFAULT_FADE_DURATION_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(FadeDuration::new(100_000).value(), MAX_FADE_DURATION_MS);
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(FadeDuration::new(0).value(), 0);
        assert_eq!(FadeDuration::new(200).value(), 200);
        assert_eq!(FadeDuration::new(2_000).value(), 2_000);
    }

    #[test]
    fn default_returns_expected_value() {
        assert_eq!(FadeDuration::default().value(), DEFAULT_FADE_DURATION_MS);
    }

    #[test]
    fn as_duration_converts_correctly() {
        assert_eq!(
            FadeDuration::new(250).as_duration(),
            std::time::Duration::from_millis(250)
        );
    }
}
