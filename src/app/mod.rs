// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the host transport,
//! the event bus, and the overlay view.
//!
//! Events travel one way: a decoded [`HudEvent`] arrives as a [`Message`],
//! `App::update` dispatches it on the [`EventBus`], the attached
//! [`TextOverlay`] applies it, and the [`OverlayView`] catches up before the
//! next frame.
//!
//! # Examples
//!
//! ```no_run
//! use hud_text::app::{self, Flags};
//!
//! fn main() -> iced::Result {
//!     app::run(Flags::default())
//! }
//! ```

mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::hud::{Attachment, DisplayRequest, EventBus, HudEvent, TextOverlay};
use crate::ui::text_overlay::{OverlayView, ViewSettings};
use iced::{window, Color, Element, Subscription, Task, Theme};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    bus: Rc<EventBus>,
    overlay: Rc<RefCell<TextOverlay>>,
    /// Keeps the overlay subscribed to `bus`.
    _attachment: Attachment<EventBus>,
    view: OverlayView,
    config: Config,
    /// Resolved once at startup; `theme()` runs every frame.
    theme: Theme,
    host_input: bool,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("overlay", &self.overlay.borrow())
            .field("view", &self.view)
            .field("host_input", &self.host_input)
            .finish_non_exhaustive()
    }
}

/// Builds the overlay window: borderless, transparent and sized from the config.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.size();
    let level = if config.window.always_on_top.unwrap_or(true) {
        window::Level::AlwaysOnTop
    } else {
        window::Level::Normal
    };

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        transparent: true,
        decorations: false,
        level,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir.clone());

    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        tracing::warn!(%warning, "using default configuration");
    }
    let settings = window_settings(&config);

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .style(App::style)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Wires the overlay to a fresh bus and shows the demo request, if any.
    fn new(flags: Flags, mut config: Config) -> (Self, Task<Message>) {
        let now = Instant::now();
        config.general.theme_mode = config.general.theme_mode.resolve();
        let theme = config.general.theme_mode.iced_theme();
        let bus = Rc::new(EventBus::new());
        let overlay = Rc::new(RefCell::new(TextOverlay::new()));
        let attachment = TextOverlay::attach(&bus, &overlay);

        let mut app = App {
            view: OverlayView::new(ViewSettings::from_config(&config), now),
            bus,
            overlay,
            _attachment: attachment,
            config,
            theme,
            host_input: !flags.no_stdin,
        };

        if let Some(text) = flags.demo {
            let request =
                DisplayRequest::new(text).with_position(flags.position.unwrap_or_default());
            app.dispatch(&HudEvent::Show(request), now);
        }

        tracing::info!(host_input = app.host_input, "overlay ready");
        (app, Task::none())
    }

    fn title(&self) -> String {
        String::from("HudText")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    /// Transparent window background; only the card is painted.
    fn style(&self, theme: &Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: theme.palette().text,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let host_sub = subscription::create_host_subscription(self.host_input);
        let tick_sub = subscription::create_tick_subscription(self.view.is_animating());

        Subscription::batch([host_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Host(event) => {
                self.dispatch(&event, Instant::now());
                Task::none()
            }
            Message::HostClosed => {
                if self.config.host.exit_on_eof.unwrap_or(true) {
                    tracing::info!("closing overlay after end of host input");
                    iced::exit()
                } else {
                    Task::none()
                }
            }
            Message::Tick(now) => {
                self.view.tick(now);
                Task::none()
            }
            Message::LinkClicked => {
                tracing::debug!("ignoring link click in overlay body");
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.view.view(&self.theme, Message::LinkClicked)
    }

    /// Publishes `event` on the bus and brings the view up to date.
    fn dispatch(&mut self, event: &HudEvent, now: Instant) {
        let handled = self.bus.dispatch(event);
        if handled == 0 {
            tracing::warn!(kind = ?event.kind(), "no handler attached for host event");
        }
        self.view.sync(&self.overlay.borrow(), now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::Position;
    use crate::ui::theming::{ColorScheme, ThemeMode};

    fn app_with(flags: Flags) -> App {
        App::new(flags, Config::default()).0
    }

    #[test]
    fn starts_hidden_without_demo() {
        let app = app_with(Flags::default());
        assert!(!app.overlay.borrow().is_visible());
        assert!(!app.view.is_rendered());
    }

    #[test]
    fn demo_flag_shows_request_at_position() {
        let app = app_with(Flags {
            demo: Some("[E] interact".into()),
            position: Some(Position::TopCenter),
            ..Flags::default()
        });

        let overlay = app.overlay.borrow();
        assert!(overlay.is_visible());
        assert_eq!(overlay.content().keybind(), Some("E"));
        assert_eq!(overlay.content().position(), Position::TopCenter);
    }

    #[test]
    fn host_events_flow_through_the_bus() {
        let mut app = app_with(Flags::default());

        let _ = app.update(Message::Host(HudEvent::Show(DisplayRequest::new("hello"))));
        assert!(app.overlay.borrow().is_visible());
        assert!(app.view.is_animating());

        let _ = app.update(Message::Host(HudEvent::Hide));
        let overlay = app.overlay.borrow();
        assert!(!overlay.is_visible());
        assert_eq!(overlay.content().body(), "hello");
    }

    #[test]
    fn ticks_finish_the_transition() {
        let mut app = app_with(Flags::default());
        let _ = app.update(Message::Host(HudEvent::Show(DisplayRequest::new("hi"))));

        let later = Instant::now() + std::time::Duration::from_secs(1);
        let _ = app.update(Message::Tick(later));
        assert!(!app.view.is_animating());
        assert!(app.view.is_rendered());
    }

    #[test]
    fn system_theme_is_resolved_once_at_startup() {
        let app = app_with(Flags::default());
        assert_eq!(Config::default().general.theme_mode, ThemeMode::System);

        let mode = app.config.general.theme_mode;
        assert_ne!(mode, ThemeMode::System);
        assert_eq!(app.theme(), mode.iced_theme());
        assert_eq!(app.view.settings().scheme, mode.color_scheme());
    }

    #[test]
    fn explicit_theme_is_kept() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let (app, _) = App::new(Flags::default(), config);

        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.view.settings().scheme, ColorScheme::light());
    }

    #[test]
    fn window_is_transparent_and_borderless() {
        let settings = window_settings(&Config::default());
        assert!(settings.transparent);
        assert!(!settings.decorations);
        assert_eq!(settings.level, window::Level::AlwaysOnTop);
    }

    #[test]
    fn window_level_follows_config() {
        let mut config = Config::default();
        config.window.always_on_top = Some(false);
        assert_eq!(window_settings(&config).level, window::Level::Normal);
    }
}
