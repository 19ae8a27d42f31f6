// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent core of the heads-up text overlay.
//!
//! # Components
//!
//! - [`request`] - `DisplayRequest` payload and its lenient decoding
//! - [`keybind`] - first `[KEY]` token extraction
//! - [`position`] - nine screen anchors and their alignment mapping
//! - [`overlay`] - `TextOverlay` visible/hidden state machine
//! - [`bus`] - event source trait and single-threaded bus
//! - [`event`] - host events and JSON envelope decoding
//! - [`transition`] - scale-fade progress driven by the visibility bit
//! - [`animation`] - icon animation sampling
//! - [`style`] - style overrides and CSS value parsing
//!
//! # Usage
//!
//! ```
//! use hud_text::hud::{EventBus, HudEvent, DisplayRequest, TextOverlay};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let bus = Rc::new(EventBus::new());
//! let overlay = Rc::new(RefCell::new(TextOverlay::new()));
//! let _attachment = TextOverlay::attach(&bus, &overlay);
//!
//! bus.dispatch(&HudEvent::Show(DisplayRequest::new("[E] interact")));
//! assert_eq!(overlay.borrow().content().keybind(), Some("E"));
//! ```

pub mod animation;
pub mod bus;
pub mod event;
pub mod keybind;
pub mod overlay;
pub mod position;
pub mod request;
pub mod style;
pub mod transition;

pub use bus::{EventBus, EventSource, HandlerId};
pub use event::{decode_envelope, HudEvent, HudEventKind};
pub use overlay::{Attachment, Change, OverlayContent, TextOverlay};
pub use position::{position_to_alignment, Position};
pub use request::{DisplayRequest, IconAlign, IconAnimation};
pub use style::StyleOverrides;
pub use transition::Transition;
