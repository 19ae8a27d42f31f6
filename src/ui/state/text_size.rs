// SPDX-License-Identifier: MPL-2.0
//! Body text size domain type.

use crate::config::{DEFAULT_TEXT_SIZE, MAX_TEXT_SIZE, MIN_TEXT_SIZE};

/// Overlay body text size in pixels, clamped to 8–64.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextSize(f32);

impl TextSize {
    /// Creates a new text size, clamping to valid range. NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_TEXT_SIZE, MAX_TEXT_SIZE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for TextSize {
    fn default() -> Self {
        Self(DEFAULT_TEXT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(TextSize::new(2.0).value(), MIN_TEXT_SIZE);
        assert_eq!(TextSize::new(500.0).value(), MAX_TEXT_SIZE);
        assert_eq!(TextSize::new(20.0).value(), 20.0);
    }

    #[test]
    fn nan_uses_default() {
        assert_eq!(TextSize::new(f32::NAN), TextSize::default());
    }
}
