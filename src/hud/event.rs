// SPDX-License-Identifier: MPL-2.0
//! Host events and the JSON envelope that carries them.
//!
//! Hosts send one envelope per line:
//!
//! ```text
//! {"action": "textUi", "data": {"text": "[E] Open door", "position": "bottom-center"}}
//! {"action": "textUiHide"}
//! ```

use super::request::DisplayRequest;
use crate::error::Result;
use serde::Deserialize;
use serde_json::Value;

/// Event names as sent by the host.
pub const SHOW_ACTION: &str = "textUi";
pub const HIDE_ACTION: &str = "textUiHide";

/// The two signals the overlay listens for.
#[derive(Debug, Clone, PartialEq)]
pub enum HudEvent {
    /// Replace the displayed content and make the overlay visible.
    Show(DisplayRequest),
    /// Hide the overlay, keeping its content.
    Hide,
}

impl HudEvent {
    #[must_use]
    pub fn kind(&self) -> HudEventKind {
        match self {
            HudEvent::Show(_) => HudEventKind::Show,
            HudEvent::Hide => HudEventKind::Hide,
        }
    }
}

/// Discriminant used when subscribing to an event source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HudEventKind {
    Show,
    Hide,
}

impl HudEventKind {
    /// Returns the host-facing event name.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            HudEventKind::Show => SHOW_ACTION,
            HudEventKind::Hide => HIDE_ACTION,
        }
    }

    /// Looks up a kind by its host-facing name.
    #[must_use]
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            SHOW_ACTION => Some(HudEventKind::Show),
            HIDE_ACTION => Some(HudEventKind::Hide),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    action: String,
    #[serde(default)]
    data: Value,
}

/// Decodes one envelope line.
///
/// Returns `Ok(None)` for blank lines and actions the overlay does not
/// handle. Malformed JSON is an [`Error::Envelope`](crate::error::Error::Envelope).
pub fn decode_envelope(line: &str) -> Result<Option<HudEvent>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let envelope: Envelope = serde_json::from_str(line)?;

    let event = match HudEventKind::from_action(&envelope.action) {
        Some(HudEventKind::Show) => Some(HudEvent::Show(DisplayRequest::from_value(
            &envelope.data,
        ))),
        Some(HudEventKind::Hide) => Some(HudEvent::Hide),
        None => {
            tracing::debug!(action = %envelope.action, "ignoring unhandled host action");
            None
        }
    };

    Ok(event)
}

/// Encodes an event as an envelope line (without trailing newline).
///
/// Only the text and position of a show request are written; this is meant
/// for demo feeds and logs rather than full round-tripping.
#[must_use]
pub fn encode_envelope(event: &HudEvent) -> String {
    let value = match event {
        HudEvent::Show(request) => serde_json::json!({
            "action": SHOW_ACTION,
            "data": {
                "text": request.text,
                "position": request.position.as_str(),
            }
        }),
        HudEvent::Hide => serde_json::json!({ "action": HIDE_ACTION }),
    };
    value.to_string()
}
