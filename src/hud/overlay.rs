// SPDX-License-Identifier: MPL-2.0
//! The text overlay state machine.
//!
//! The overlay holds a single content slot and a visibility bit:
//!
//! ```text
//! Hidden --textUi--> Visible --textUiHide--> Hidden
//!                    Visible --textUi-->     Visible (content replaced)
//! ```
//!
//! Hiding keeps the content; the next `textUi` replaces it entirely.

use super::bus::{EventSource, HandlerId};
use super::event::HudEvent;
use super::keybind::extract_keybind;
use super::position::{position_to_alignment, Horizontal, Position, Vertical};
use super::request::{DisplayRequest, IconAlign, IconAnimation};
use super::style::StyleOverrides;
use iced::Color;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Content derived from a [`DisplayRequest`], ready to render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayContent {
    request: DisplayRequest,
    keybind: Option<String>,
    body: String,
}

impl OverlayContent {
    /// Derives renderable content from a request.
    #[must_use]
    pub fn from_request(request: DisplayRequest) -> Self {
        let parsed = extract_keybind(&request.text);
        Self {
            keybind: parsed.keybind,
            body: parsed.body,
            request,
        }
    }

    /// The request this content was built from.
    #[must_use]
    pub fn request(&self) -> &DisplayRequest {
        &self.request
    }

    /// Keybind badge label, if the text carried a token.
    #[must_use]
    pub fn keybind(&self) -> Option<&str> {
        self.keybind.as_deref()
    }

    /// Icon to render. Always `None` when a keybind is shown.
    #[must_use]
    pub fn icon(&self) -> Option<&str> {
        if self.keybind.is_some() {
            None
        } else {
            self.request.icon.as_deref()
        }
    }

    /// Markdown body with the keybind token removed.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.request.position
    }

    #[must_use]
    pub fn alignment(&self) -> (Horizontal, Vertical) {
        position_to_alignment(self.request.position)
    }

    #[must_use]
    pub fn icon_color(&self) -> Option<Color> {
        self.request.icon_color
    }

    #[must_use]
    pub fn icon_animation(&self) -> Option<IconAnimation> {
        self.request.icon_animation
    }

    #[must_use]
    pub fn align_icon(&self) -> IconAlign {
        self.request.align_icon
    }

    #[must_use]
    pub fn style(&self) -> &StyleOverrides {
        &self.request.style
    }
}

/// Outcome of applying an event to the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Hidden overlay became visible.
    Shown,
    /// Visible overlay had its content replaced.
    Replaced,
    /// Visible overlay was hidden.
    Hidden,
    /// Nothing changed (hide while already hidden).
    Unchanged,
}

/// Heads-up text overlay: current content plus visibility.
#[derive(Debug, Clone, Default)]
pub struct TextOverlay {
    content: OverlayContent,
    visible: bool,
    /// Bumped on every show so views can tell fresh content apart.
    revision: u64,
}

impl TextOverlay {
    /// Creates a hidden overlay with empty content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles `textUi`: replaces the content and makes the overlay visible.
    pub fn show(&mut self, request: DisplayRequest) -> Change {
        self.content = OverlayContent::from_request(request);
        self.revision = self.revision.wrapping_add(1);

        let change = if self.visible {
            Change::Replaced
        } else {
            Change::Shown
        };
        self.visible = true;

        tracing::debug!(
            ?change,
            position = %self.content.position(),
            keybind = self.content.keybind(),
            icon = self.content.icon(),
            "text overlay shown"
        );
        change
    }

    /// Handles `textUiHide`: hides the overlay, keeping its content.
    pub fn hide(&mut self) -> Change {
        if !self.visible {
            return Change::Unchanged;
        }
        self.visible = false;
        tracing::debug!("text overlay hidden");
        Change::Hidden
    }

    /// Applies a host event.
    pub fn handle(&mut self, event: &HudEvent) -> Change {
        match event {
            HudEvent::Show(request) => self.show(request.clone()),
            HudEvent::Hide => self.hide(),
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn content(&self) -> &OverlayContent {
        &self.content
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Registers show/hide callbacks for `overlay` on `source`.
    ///
    /// The returned [`Attachment`] removes both callbacks when dropped. The
    /// callbacks only hold a weak reference, so the overlay may be dropped
    /// first without leaking.
    pub fn attach<S>(source: &Rc<S>, overlay: &Rc<RefCell<TextOverlay>>) -> Attachment<S>
    where
        S: EventSource + 'static,
    {
        let target = Rc::downgrade(overlay);
        let show_id = source.on_show(move |request| {
            with_overlay(&target, |overlay| {
                overlay.show(request.clone());
            });
        });

        let target = Rc::downgrade(overlay);
        let hide_id = source.on_hide(move || {
            with_overlay(&target, |overlay| {
                overlay.hide();
            });
        });

        Attachment {
            source: Rc::downgrade(source),
            handlers: vec![show_id, hide_id],
        }
    }
}

fn with_overlay(target: &Weak<RefCell<TextOverlay>>, apply: impl FnOnce(&mut TextOverlay)) {
    let Some(overlay) = target.upgrade() else {
        return;
    };
    match overlay.try_borrow_mut() {
        Ok(mut overlay) => apply(&mut overlay),
        Err(_) => tracing::warn!("text overlay busy, dropping event"),
    };
}

/// Registration of an overlay on an event source.
///
/// Dropping it deregisters the overlay's callbacks.
pub struct Attachment<S: EventSource> {
    source: Weak<S>,
    handlers: Vec<HandlerId>,
}

impl<S: EventSource> Attachment<S> {
    /// Deregisters the callbacks now.
    pub fn detach(mut self) {
        self.release();
    }

    /// Returns true while the callbacks are registered.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.handlers.is_empty() && self.source.strong_count() > 0
    }

    fn release(&mut self) {
        let handlers = std::mem::take(&mut self.handlers);
        if let Some(source) = self.source.upgrade() {
            for id in handlers {
                source.unsubscribe(id);
            }
        }
    }
}

impl<S: EventSource> Drop for Attachment<S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<S: EventSource> std::fmt::Debug for Attachment<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("handlers", &self.handlers.len())
            .field("attached", &self.is_attached())
            .finish()
    }
}
