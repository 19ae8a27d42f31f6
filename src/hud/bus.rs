// SPDX-License-Identifier: MPL-2.0
//! Single-threaded event bus for host signals.
//!
//! Listeners register a handler for one [`HudEventKind`] and receive every
//! dispatched event of that kind. The bus is meant to live on the UI thread,
//! so handlers are plain `FnMut` closures without `Send` bounds.
//!
//! Handlers may subscribe or unsubscribe while a dispatch is in progress.
//! Such changes apply from the next dispatch on.

use super::event::{HudEvent, HudEventKind};
use super::request::DisplayRequest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked for each matching event.
pub type Handler = Box<dyn FnMut(&HudEvent)>;

/// Identifies a registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// Something that delivers host events to registered handlers.
pub trait EventSource {
    /// Registers `handler` for events of `kind`.
    fn subscribe(&self, kind: HudEventKind, handler: Handler) -> HandlerId;

    /// Removes a handler. Returns `true` if it was registered.
    fn unsubscribe(&self, id: HandlerId) -> bool;

    /// Registers a typed callback for `textUi`.
    fn on_show(&self, mut callback: impl FnMut(&DisplayRequest) + 'static) -> HandlerId
    where
        Self: Sized,
    {
        self.subscribe(
            HudEventKind::Show,
            Box::new(move |event| {
                if let HudEvent::Show(request) = event {
                    callback(request);
                }
            }),
        )
    }

    /// Registers a typed callback for `textUiHide`.
    fn on_hide(&self, mut callback: impl FnMut() + 'static) -> HandlerId
    where
        Self: Sized,
    {
        self.subscribe(HudEventKind::Hide, Box::new(move |_| callback()))
    }
}

struct Registration {
    id: HandlerId,
    kind: HudEventKind,
    handler: Rc<RefCell<Handler>>,
}

/// In-process [`EventSource`] with explicit dispatch.
#[derive(Default)]
pub struct EventBus {
    next_id: Cell<u64>,
    registrations: RefCell<Vec<Registration>>,
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every handler registered for its kind.
    ///
    /// Returns the number of handlers invoked.
    pub fn dispatch(&self, event: &HudEvent) -> usize {
        let kind = event.kind();
        let handlers: Vec<Rc<RefCell<Handler>>> = self
            .registrations
            .borrow()
            .iter()
            .filter(|registration| registration.kind == kind)
            .map(|registration| Rc::clone(&registration.handler))
            .collect();

        let mut invoked = 0;
        for handler in handlers {
            match handler.try_borrow_mut() {
                Ok(mut handler) => {
                    (*handler)(event);
                    invoked += 1;
                }
                Err(_) => {
                    tracing::warn!(action = kind.action(), "skipping re-entrant handler");
                }
            }
        }
        invoked
    }

    /// Number of handlers registered for `kind`.
    #[must_use]
    pub fn handler_count(&self, kind: HudEventKind) -> usize {
        self.registrations
            .borrow()
            .iter()
            .filter(|registration| registration.kind == kind)
            .count()
    }
}

impl EventSource for EventBus {
    fn subscribe(&self, kind: HudEventKind, handler: Handler) -> HandlerId {
        let id = HandlerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.registrations.borrow_mut().push(Registration {
            id,
            kind,
            handler: Rc::new(RefCell::new(handler)),
        });
        id
    }

    fn unsubscribe(&self, id: HandlerId) -> bool {
        let mut registrations = self.registrations.borrow_mut();
        let before = registrations.len();
        registrations.retain(|registration| registration.id != id);
        registrations.len() != before
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("show_handlers", &self.handler_count(HudEventKind::Show))
            .field("hide_handlers", &self.handler_count(HudEventKind::Hide))
            .finish()
    }
}
