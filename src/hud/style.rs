// SPDX-License-Identifier: MPL-2.0
//! Free-form style overrides and CSS value parsing.
//!
//! Hosts send style overrides using CSS property names in camelCase
//! (`backgroundColor`, `borderRadius`, ...). Only the subset that maps onto
//! the overlay card is honored; everything else is ignored.

use iced::Color;
use serde_json::{Map, Value};

/// Pixels per `rem`/`em` unit.
const ROOT_FONT_SIZE: f32 = 16.0;

/// Style overrides applied on top of the themed overlay card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverrides {
    pub background_color: Option<Color>,
    pub color: Option<Color>,
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub border_radius: Option<f32>,
    pub padding: Option<f32>,
    pub font_size: Option<f32>,
    pub opacity: Option<f32>,
    pub width: Option<f32>,
    pub max_width: Option<f32>,
}

impl StyleOverrides {
    /// Builds overrides from a JSON style object, skipping unusable values.
    #[must_use]
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let mut overrides = Self::default();

        for (key, value) in map {
            match key.as_str() {
                "backgroundColor" | "background" => {
                    overrides.background_color = value.as_str().and_then(parse_color);
                }
                "color" => overrides.color = value.as_str().and_then(parse_color),
                "borderColor" => overrides.border_color = value.as_str().and_then(parse_color),
                "borderWidth" => overrides.border_width = parse_length(value),
                "borderRadius" => overrides.border_radius = parse_length(value),
                "padding" => overrides.padding = parse_length(value),
                "fontSize" => overrides.font_size = parse_length(value),
                "opacity" => overrides.opacity = parse_number(value).map(|o| o.clamp(0.0, 1.0)),
                "width" => overrides.width = parse_length(value),
                "maxWidth" => overrides.max_width = parse_length(value),
                other => tracing::debug!(property = other, "ignoring unsupported style override"),
            }
        }

        overrides
    }

    /// Returns true when no override is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_number(value: &Value) -> Option<f32> {
    let number = match value {
        Value::Number(n) => n.as_f64().map(|n| n as f32),
        Value::String(s) => s.trim().parse::<f32>().ok(),
        _ => None,
    };
    number.filter(|n| n.is_finite())
}

/// Parses a CSS length into pixels.
///
/// Accepts bare numbers and strings with `px`, `rem` or `em` units. For
/// shorthand values such as `"8px 12px"` the first component is used.
#[must_use]
pub fn parse_length(value: &Value) -> Option<f32> {
    let pixels = match value {
        Value::Number(n) => n.as_f64().map(|n| n as f32),
        Value::String(s) => {
            let first = s.split_whitespace().next()?;
            if let Some(px) = first.strip_suffix("px") {
                px.parse::<f32>().ok()
            } else if let Some(rem) = first.strip_suffix("rem") {
                rem.parse::<f32>().ok().map(|r| r * ROOT_FONT_SIZE)
            } else if let Some(em) = first.strip_suffix("em") {
                em.parse::<f32>().ok().map(|e| e * ROOT_FONT_SIZE)
            } else {
                first.parse::<f32>().ok()
            }
        }
        _ => None,
    }?;

    (pixels.is_finite() && pixels >= 0.0).then_some(pixels)
}

/// Parses a CSS color: hex notations, `rgb()`/`rgba()` and common names.
#[must_use]
pub fn parse_color(raw: &str) -> Option<Color> {
    let raw = raw.trim();

    if let Some(hex) = raw.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = raw.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_rgb_function(args);
    }

    named_color(&lower)
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Color::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::from_rgba8(
            nibble(0)?,
            nibble(1)?,
            nibble(2)?,
            f32::from(nibble(3)?) / 255.0,
        )),
        6 => Some(Color::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::from_rgba8(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            f32::from(byte(6)?) / 255.0,
        )),
        _ => None,
    }
}

fn parse_rgb_function(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    let channel = |p: &str| -> Option<u8> {
        let value = p.parse::<f32>().ok()?;
        Some(value.clamp(0.0, 255.0).round() as u8)
    };

    match parts.as_slice() {
        [r, g, b] => Some(Color::from_rgb8(channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let alpha = match a.strip_suffix('%') {
                Some(pct) => pct.parse::<f32>().ok()? / 100.0,
                None => a.parse::<f32>().ok()?,
            };
            Some(Color::from_rgba8(
                channel(r)?,
                channel(g)?,
                channel(b)?,
                alpha.clamp(0.0, 1.0),
            ))
        }
        _ => None,
    }
}

fn named_color(name: &str) -> Option<Color> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "pink" => (255, 192, 203),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "gold" => (255, 215, 0),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "brown" => (165, 42, 42),
        "transparent" => return Some(Color::TRANSPARENT),
        _ => return None,
    };
    Some(Color::from_rgb8(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hex_colors_in_all_lengths() {
        assert_eq!(parse_color("#fff"), Some(Color::WHITE));
        assert_eq!(parse_color("#000000"), Some(Color::BLACK));
        assert_eq!(parse_color("#ff000080").map(|c| c.r), Some(1.0));
        let translucent = parse_color("#0008").expect("4-digit hex");
        assert!((translucent.a - 136.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn invalid_hex_is_rejected() {
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("#zzzzzz"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn rgb_functions_parse() {
        assert_eq!(parse_color("rgb(255, 0, 0)"), Some(Color::from_rgb8(255, 0, 0)));
        let c = parse_color("RGBA(0 128 255 / 50%)").expect("rgba with percent alpha");
        assert!((c.a - 0.5).abs() < 1e-6);
        assert_eq!(parse_color("rgb(1, 2)"), None);
    }

    #[test]
    fn named_colors_parse() {
        assert_eq!(parse_color(" White "), Some(Color::WHITE));
        assert_eq!(parse_color("transparent"), Some(Color::TRANSPARENT));
        assert_eq!(parse_color("blurple"), None);
    }

    #[test]
    fn lengths_accept_units() {
        assert_eq!(parse_length(&json!(12)), Some(12.0));
        assert_eq!(parse_length(&json!("10px")), Some(10.0));
        assert_eq!(parse_length(&json!("0.5rem")), Some(8.0));
        assert_eq!(parse_length(&json!("1em")), Some(16.0));
        assert_eq!(parse_length(&json!("8px 12px")), Some(8.0));
        assert_eq!(parse_length(&json!("-4px")), None);
        assert_eq!(parse_length(&json!(true)), None);
    }

    #[test]
    fn overrides_from_map_keep_supported_keys() {
        let map = json!({
            "backgroundColor": "#101010",
            "borderRadius": "12px",
            "fontSize": 20,
            "opacity": 3,
            "textTransform": "uppercase"
        });
        let overrides = StyleOverrides::from_map(map.as_object().expect("object"));

        assert_eq!(overrides.background_color, Some(Color::from_rgb8(16, 16, 16)));
        assert_eq!(overrides.border_radius, Some(12.0));
        assert_eq!(overrides.font_size, Some(20.0));
        assert_eq!(overrides.opacity, Some(1.0));
        assert!(!overrides.is_empty());
    }

    #[test]
    fn bad_values_degrade_to_absent() {
        let map = json!({ "color": 42, "padding": "wide" });
        let overrides = StyleOverrides::from_map(map.as_object().expect("object"));
        assert!(overrides.is_empty());
    }
}
