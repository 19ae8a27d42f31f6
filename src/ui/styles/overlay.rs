// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the HUD card, keybind badge and icon.
//!
//! Every style takes a `fade` factor in `0.0..=1.0` that multiplies the
//! alpha of each color, so the whole card follows the transition.

use crate::hud::StyleOverrides;
use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Shadow, Theme};

/// Multiplies the alpha channel of `color` by `factor`.
#[must_use]
pub fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: color.a * factor.clamp(0.0, 1.0),
        ..color
    }
}

/// Style for the card surrounding the overlay content.
///
/// `overrides` win over the color scheme; their `opacity` is folded into `fade`.
pub fn card(
    scheme: ColorScheme,
    overrides: &StyleOverrides,
    fade: f32,
) -> impl Fn(&Theme) -> container::Style {
    let fade = fade * overrides.opacity.unwrap_or(1.0);
    let background = overrides.background_color.unwrap_or(scheme.card_background);
    let text = overrides.color.unwrap_or(scheme.card_text);
    let outline = overrides.border_color.unwrap_or(scheme.card_border);
    let width = overrides.border_width.unwrap_or(border::WIDTH_SM);
    let rad = overrides.border_radius.unwrap_or(radius::SM);

    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(background, fade))),
        text_color: Some(faded(text, fade)),
        border: Border {
            color: faded(outline, fade),
            width,
            radius: rad.into(),
        },
        shadow: Shadow {
            color: faded(shadow::MD.color, fade),
            ..shadow::MD
        },
        ..Default::default()
    }
}

/// Lower edge of the keycap; the face sits on top of it.
pub fn keycap_edge(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(palette::KEYCAP_EDGE, fade))),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Face of the keycap holding the key label.
pub fn keycap_face(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(palette::KEYCAP_FACE, fade))),
        text_color: Some(faded(palette::KEYCAP_LABEL, fade)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for the request icon. Without an explicit color the icon follows the text.
pub fn icon(color: Option<Color>, fallback: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    let color = color.unwrap_or(fallback);
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
