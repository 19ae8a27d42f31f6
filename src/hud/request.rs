// SPDX-License-Identifier: MPL-2.0
//! The display request carried by a `textUi` event.
//!
//! Decoding is deliberately lenient: a field with the wrong JSON type or an
//! unknown enum value is treated as absent and falls back to its default.
//! A request can therefore always be built from any JSON payload.

use super::position::Position;
use super::style::{parse_color, StyleOverrides};
use iced::Color;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Vertical alignment of the icon next to the body text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconAlign {
    #[default]
    Center,
    Start,
}

impl IconAlign {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "center" => Some(IconAlign::Center),
            "start" => Some(IconAlign::Start),
            _ => None,
        }
    }
}

/// Icon animations understood by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconAnimation {
    Spin,
    SpinPulse,
    SpinReverse,
    /// Same stepped rotation as `SpinPulse`.
    Pulse,
    Beat,
    Fade,
    BeatFade,
    Bounce,
    Shake,
}

impl IconAnimation {
    /// Parses `spin`, `spinPulse`, `spin-pulse`, ... (case and separators ignored).
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match key.as_str() {
            "spin" => Some(IconAnimation::Spin),
            "spinpulse" => Some(IconAnimation::SpinPulse),
            "spinreverse" => Some(IconAnimation::SpinReverse),
            "pulse" => Some(IconAnimation::Pulse),
            "beat" => Some(IconAnimation::Beat),
            "fade" => Some(IconAnimation::Fade),
            "beatfade" => Some(IconAnimation::BeatFade),
            "bounce" => Some(IconAnimation::Bounce),
            "shake" => Some(IconAnimation::Shake),
            _ => None,
        }
    }
}

/// What the overlay should show.
///
/// Built fresh for every `textUi` event; nothing is inherited from the
/// previous request.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(from = "Payload")]
pub struct DisplayRequest {
    /// Body text, possibly containing a `[KEY]` token.
    pub text: String,
    pub position: Position,
    /// Icon identifier, never empty when set.
    pub icon: Option<String>,
    pub icon_color: Option<Color>,
    pub icon_animation: Option<IconAnimation>,
    pub align_icon: IconAlign,
    pub style: StyleOverrides,
}

impl DisplayRequest {
    /// Creates a request showing `text` with every other field defaulted.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Builds a request from an arbitrary JSON value.
    ///
    /// Non-object values yield an empty request.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value.clone()).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        let icon = icon.into();
        self.icon = (!icon.trim().is_empty()).then_some(icon);
        self
    }

    #[must_use]
    pub fn with_icon_color(mut self, color: Color) -> Self {
        self.icon_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_icon_animation(mut self, animation: IconAnimation) -> Self {
        self.icon_animation = Some(animation);
        self
    }

    #[must_use]
    pub fn with_align_icon(mut self, align: IconAlign) -> Self {
        self.align_icon = align;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleOverrides) -> Self {
        self.style = style;
        self
    }
}

/// Wire shape of a `textUi` payload. Every field is optional and lenient.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Payload {
    #[serde(default, deserialize_with = "lenient")]
    text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    position: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    icon: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    icon_color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    icon_animation: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    align_icon: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    style: Option<Map<String, Value>>,
}

/// Accepts any JSON value and keeps it only if it has the expected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl From<Payload> for DisplayRequest {
    fn from(payload: Payload) -> Self {
        let position = match payload.position.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                tracing::debug!(%err, "falling back to default position");
                Position::default()
            }),
            None => Position::default(),
        };

        Self {
            text: payload.text.unwrap_or_default(),
            position,
            icon: payload.icon.filter(|icon| !icon.trim().is_empty()),
            icon_color: payload.icon_color.as_deref().and_then(parse_color),
            icon_animation: payload.icon_animation.as_deref().and_then(IconAnimation::parse),
            align_icon: payload
                .align_icon
                .as_deref()
                .and_then(IconAlign::parse)
                .unwrap_or_default(),
            style: payload
                .style
                .as_ref()
                .map(StyleOverrides::from_map)
                .unwrap_or_default(),
        }
    }
}
