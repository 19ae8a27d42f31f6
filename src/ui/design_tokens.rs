// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the overlay's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use hud_text::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

// Create a translucent card color
let card_bg = Color {
    a: opacity::SURFACE,
    ..palette::DARK_500
};

// Use the spacing scale
let padding = spacing::SM;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Card surfaces (dark scale)
    /// Card border on dark surfaces (#373A40).
    pub const DARK_400: Color = Color::from_rgb(0.216, 0.227, 0.251);
    /// Card background on dark surfaces (#2C2E33).
    pub const DARK_500: Color = Color::from_rgb(0.173, 0.180, 0.200);
    /// Body text on dark cards (#DDDDDD).
    pub const TEXT_ON_DARK: Color = Color::from_rgb(0.867, 0.867, 0.867);

    // Keybind badge
    /// Keycap face (#E0E0E0).
    pub const KEYCAP_FACE: Color = Color::from_rgb(0.878, 0.878, 0.878);
    /// Keycap lower edge (#B0B0B0).
    pub const KEYCAP_EDGE: Color = Color::from_rgb(0.690, 0.690, 0.690);
    /// Keycap label (#333333).
    pub const KEYCAP_LABEL: Color = Color::from_rgb(0.2, 0.2, 0.2);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Card background
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    /// Gap between badge/icon and body text
    pub const ICON_GAP: f32 = 10.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    /// Default overlay icon (one and a third of the body size)
    pub const ICON_LG: f32 = 21.0;
    pub const ICON_XL: f32 = 32.0;

    /// Card padding
    pub const CARD_PADDING: f32 = 10.0;
    /// Horizontal keycap padding
    pub const KEYCAP_PADDING_X: f32 = 8.0;
    /// Vertical keycap padding
    pub const KEYCAP_PADDING_Y: f32 = 2.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Overlay body text
    pub const BODY_LG: f32 = 16.0;

    /// Keycap label
    pub const KEYCAP: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Card outline
    pub const WIDTH_SM: f32 = 1.0;

    /// Keycap lower edge
    pub const KEYCAP_EDGE: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.35,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::ICON_GAP);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_SM);

    // Border validation
    assert!(border::KEYCAP_EDGE > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keycap_is_lighter_than_its_edge() {
        assert!(palette::KEYCAP_FACE.r > palette::KEYCAP_EDGE.r);
    }

    #[test]
    fn dark_card_border_is_lighter_than_background() {
        assert!(palette::DARK_400.r > palette::DARK_500.r);
    }
}
