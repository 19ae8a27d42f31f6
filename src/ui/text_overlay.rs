// SPDX-License-Identifier: MPL-2.0
//! View state and rendering for the text overlay card.
//!
//! [`OverlayView`] keeps what the widget tree needs between frames: the
//! parsed markdown of the current body, the resolved icon handle, the
//! scale-fade [`Transition`] and the icon animation clock. It follows a
//! [`TextOverlay`] through [`OverlayView::sync`] after every event.

use crate::config::{Config, DEFAULT_CARD_MARGIN, DEFAULT_CARD_MAX_WIDTH};
use crate::hud::animation::{self, IconMotion, MAX_LIFT};
use crate::hud::{IconAlign, IconAnimation, OverlayContent, TextOverlay, Transition};
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::state::{FadeDuration, TextSize};
use crate::ui::styles::overlay as styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{markdown, svg, Container, Row, Space, Svg, Text};
use iced::{alignment, font, Color, Element, Font, Length, Padding, Radians, Theme};
use std::time::Instant;

/// Icon size relative to the body text size.
const ICON_SCALE: f32 = sizing::ICON_LG / typography::BODY_LG;

/// Peak scale reached by `beat`, used to reserve room for the icon.
const ICON_SLOT_SCALE: f32 = 1.25;

/// Settings the overlay view reads from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub scheme: ColorScheme,
    pub text_size: TextSize,
    pub fade_duration: FadeDuration,
    /// Distance between the card and the window edge.
    pub card_margin: f32,
    pub max_width: f32,
}

impl ViewSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            scheme: config.general.theme_mode.color_scheme(),
            text_size: config.overlay.text_size(),
            fade_duration: config.overlay.fade_duration(),
            card_margin: config
                .overlay
                .card_margin
                .unwrap_or(DEFAULT_CARD_MARGIN)
                .max(0.0),
            max_width: config
                .overlay
                .max_width
                .unwrap_or(DEFAULT_CARD_MAX_WIDTH)
                .max(0.0),
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Frame-to-frame state of the rendered overlay.
#[derive(Debug, Clone)]
pub struct OverlayView {
    settings: ViewSettings,
    transition: Transition,
    /// Revision of the overlay content currently parsed.
    revision: Option<u64>,
    content: OverlayContent,
    markdown: Vec<markdown::Item>,
    icon: Option<svg::Handle>,
    animation: Option<IconAnimation>,
    animation_started: Instant,
    now: Instant,
}

impl OverlayView {
    #[must_use]
    pub fn new(settings: ViewSettings, now: Instant) -> Self {
        Self {
            settings,
            transition: Transition::new(settings.fade_duration.as_duration()),
            revision: None,
            content: OverlayContent::default(),
            markdown: Vec::new(),
            icon: None,
            animation: None,
            animation_started: now,
            now,
        }
    }

    /// Catches up with `overlay` after an event.
    ///
    /// Returns true when the content was rebuilt (new revision).
    pub fn sync(&mut self, overlay: &TextOverlay, now: Instant) -> bool {
        self.now = now;
        self.transition.set_visible(overlay.is_visible(), now);

        if self.revision == Some(overlay.revision()) {
            return false;
        }
        self.revision = Some(overlay.revision());
        self.rebuild(overlay.content().clone(), now);
        true
    }

    fn rebuild(&mut self, content: OverlayContent, now: Instant) {
        self.markdown = markdown::parse(content.body()).collect();
        self.icon = content.icon().and_then(icons::lookup_or_fallback);
        self.animation = self.icon.as_ref().and(content.icon_animation());
        self.animation_started = now;
        self.content = content;
    }

    /// Advances the transition and the icon clock.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        self.transition.tick(now);
    }

    /// Returns true while frames are needed (transition or animated icon).
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
            || (self.transition.target_visible() && self.animation.is_some())
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.transition.is_rendered()
    }

    #[must_use]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    #[must_use]
    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    #[must_use]
    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }

    /// Current icon transform.
    #[must_use]
    pub fn icon_motion(&self) -> IconMotion {
        self.animation.map_or(IconMotion::IDENTITY, |animation| {
            let elapsed = self.now.saturating_duration_since(self.animation_started);
            animation::sample(animation, elapsed)
        })
    }

    /// Content shown by the card, as of the last [`sync`](Self::sync).
    #[must_use]
    pub fn content(&self) -> &OverlayContent {
        &self.content
    }

    /// Renders the card anchored at the content's position.
    ///
    /// Links in the markdown body produce `on_link`.
    pub fn view<'a, M>(&'a self, theme: &Theme, on_link: M) -> Element<'a, M>
    where
        M: Clone + 'a,
    {
        if !self.transition.is_rendered() {
            return Space::new().into();
        }

        let content = &self.content;
        let overrides = content.style();
        let fade = self.transition.opacity();
        let scale = self.transition.scale();
        let text_size = overrides
            .font_size
            .unwrap_or_else(|| self.settings.text_size.value())
            * scale;

        let body = markdown::view(
            &self.markdown,
            markdown::Settings::with_text_size(
                text_size,
                markdown::Style::from_palette(theme.palette()),
            ),
        )
        .map(move |_uri| on_link.clone());

        let leading: Option<Element<'a, M>> = if let Some(label) = content.keybind() {
            Some(keycap(label, text_size, fade))
        } else {
            self.icon.clone().map(|handle| {
                let fallback = overrides.color.unwrap_or(self.settings.scheme.card_text);
                self.icon_view(handle, content.icon_color(), fallback, text_size, fade)
            })
        };

        let mut row = Row::new()
            .spacing(spacing::ICON_GAP * scale)
            .align_y(self.leading_alignment());
        if let Some(leading) = leading {
            row = row.push(leading);
        }
        row = row.push(body);

        let card = Container::new(row)
            .padding(overrides.padding.unwrap_or(sizing::CARD_PADDING) * scale)
            .width(overrides.width.map_or(Length::Shrink, Length::Fixed))
            .max_width(overrides.max_width.unwrap_or(self.settings.max_width))
            .style(styles::card(self.settings.scheme, overrides, fade));

        let (horizontal, vertical) = content.alignment();
        Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical)
            .padding(self.settings.card_margin)
            .into()
    }

    /// Vertical alignment of the leading element against the body.
    ///
    /// `align_icon` only moves an icon; a keycap always sits centered.
    #[must_use]
    pub fn leading_alignment(&self) -> alignment::Vertical {
        let icon_leads = self.content.keybind().is_none() && self.icon.is_some();
        match self.content.align_icon() {
            IconAlign::Start if icon_leads => alignment::Vertical::Top,
            _ => alignment::Vertical::Center,
        }
    }

    fn icon_view<'a, M: 'a>(
        &self,
        handle: svg::Handle,
        color: Option<Color>,
        fallback: Color,
        text_size: f32,
        fade: f32,
    ) -> Element<'a, M> {
        let base = text_size * ICON_SCALE;
        let motion = self.icon_motion();
        let size = base * motion.scale;

        let glyph = Svg::new(handle)
            .width(size)
            .height(size)
            .rotation(Radians(motion.rotation))
            .opacity(motion.opacity * fade)
            .style(styles::icon(color, fallback));

        // Fixed slot so scaling icons do not shift the text.
        let slot = base * ICON_SLOT_SCALE;
        let slot = Container::new(glyph)
            .width(slot)
            .height(slot)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        if self.animation == Some(IconAnimation::Bounce) {
            Container::new(slot)
                .padding(Padding {
                    top: MAX_LIFT - motion.lift,
                    bottom: motion.lift,
                    ..Padding::ZERO
                })
                .into()
        } else {
            slot.into()
        }
    }
}

/// Keyboard key badge: a light face resting on a darker lower edge.
fn keycap<'a, M: 'a>(label: &'a str, text_size: f32, fade: f32) -> Element<'a, M> {
    let face = Container::new(Text::new(label).size(text_size).font(Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }))
    .padding([sizing::KEYCAP_PADDING_Y, sizing::KEYCAP_PADDING_X])
    .style(styles::keycap_face(fade));

    Container::new(face)
        .padding(Padding {
            bottom: border::KEYCAP_EDGE,
            ..Padding::ZERO
        })
        .style(styles::keycap_edge(fade))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::DisplayRequest;
    use std::time::Duration;

    fn view_at(now: Instant) -> OverlayView {
        OverlayView::new(ViewSettings::default(), now)
    }

    #[test]
    fn new_view_renders_nothing() {
        let view = view_at(Instant::now());
        assert!(!view.is_rendered());
        assert!(!view.is_animating());
    }

    #[test]
    fn sync_rebuilds_only_on_new_revision() {
        let now = Instant::now();
        let mut view = view_at(now);
        let mut overlay = TextOverlay::new();

        overlay.show(DisplayRequest::new("**bold** text"));
        assert!(view.sync(&overlay, now));
        assert!(!view.sync(&overlay, now));

        overlay.hide();
        assert!(!view.sync(&overlay, now));

        overlay.show(DisplayRequest::new("again"));
        assert!(view.sync(&overlay, now));
    }

    #[test]
    fn show_then_hide_runs_the_transition_both_ways() {
        let start = Instant::now();
        let mut view = view_at(start);
        let mut overlay = TextOverlay::new();

        overlay.show(DisplayRequest::new("hello"));
        view.sync(&overlay, start);
        assert!(view.is_rendered());
        assert!(view.is_animating());

        view.tick(start + Duration::from_millis(500));
        assert!(!view.is_animating());
        assert!((view.transition().opacity() - 1.0).abs() < 1e-6);

        overlay.hide();
        let hidden_at = start + Duration::from_millis(600);
        view.sync(&overlay, hidden_at);
        assert!(view.is_animating());
        view.tick(hidden_at + Duration::from_millis(500));
        assert!(!view.is_rendered());
    }

    #[test]
    fn keybind_suppresses_icon() {
        let now = Instant::now();
        let mut view = view_at(now);
        let mut overlay = TextOverlay::new();

        overlay.show(DisplayRequest::new("[E] open").with_icon("star"));
        view.sync(&overlay, now);
        assert!(!view.has_icon());

        overlay.show(DisplayRequest::new("open").with_icon("star"));
        view.sync(&overlay, now);
        assert!(view.has_icon());
    }

    #[test]
    fn unknown_icon_renders_the_fallback_glyph() {
        let now = Instant::now();
        let mut view = view_at(now);
        let mut overlay = TextOverlay::new();

        overlay.show(
            DisplayRequest::new("open")
                .with_icon("no-such-glyph")
                .with_icon_animation(IconAnimation::Spin),
        );
        view.sync(&overlay, now);
        assert!(view.has_icon());
        assert!(view.is_animating());

        view.tick(now + Duration::from_millis(500));
        assert_ne!(view.icon_motion(), IconMotion::IDENTITY);
        let _: Element<'_, ()> = view.view(&Theme::Dark, ());
    }

    #[test]
    fn align_start_moves_only_icons() {
        let now = Instant::now();
        let mut view = view_at(now);
        let mut overlay = TextOverlay::new();

        overlay.show(
            DisplayRequest::new("first line\nsecond line")
                .with_icon("star")
                .with_align_icon(IconAlign::Start),
        );
        view.sync(&overlay, now);
        assert_eq!(view.leading_alignment(), alignment::Vertical::Top);

        overlay.show(DisplayRequest::new("[E] open\nthe door").with_align_icon(IconAlign::Start));
        view.sync(&overlay, now);
        assert!(view.content().keybind().is_some());
        assert_eq!(view.leading_alignment(), alignment::Vertical::Center);

        overlay.show(DisplayRequest::new("plain").with_icon("star"));
        view.sync(&overlay, now);
        assert_eq!(view.leading_alignment(), alignment::Vertical::Center);
    }

    #[test]
    fn animated_icon_keeps_frames_coming_while_visible() {
        let start = Instant::now();
        let mut view = view_at(start);
        let mut overlay = TextOverlay::new();

        overlay.show(
            DisplayRequest::new("loading")
                .with_icon("spinner")
                .with_icon_animation(IconAnimation::Spin),
        );
        view.sync(&overlay, start);
        view.tick(start + Duration::from_millis(500));
        assert!(view.is_animating());
        assert!(view.icon_motion().rotation > 0.0);

        overlay.hide();
        view.sync(&overlay, start + Duration::from_millis(600));
        view.tick(start + Duration::from_millis(1200));
        assert!(!view.is_animating());
    }

    #[test]
    fn zero_fade_is_instant() {
        let now = Instant::now();
        let settings = ViewSettings {
            fade_duration: FadeDuration::new(0),
            ..ViewSettings::default()
        };
        let mut view = OverlayView::new(settings, now);
        let mut overlay = TextOverlay::new();

        overlay.show(DisplayRequest::new("hi"));
        view.sync(&overlay, now);
        assert!(!view.is_animating());
        assert!((view.transition().opacity() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn view_builds_for_every_leading_kind() {
        let now = Instant::now();
        let mut view = view_at(now);
        let mut overlay = TextOverlay::new();

        let _: Element<'_, ()> = view.view(&Theme::Dark, ());

        for request in [
            DisplayRequest::new("[E] interact"),
            DisplayRequest::new("Hello").with_icon("star"),
            DisplayRequest::new("plain *markdown*"),
        ] {
            overlay.show(request);
            view.sync(&overlay, now);
            assert_eq!(view.content(), overlay.content());
            let _: Element<'_, ()> = view.view(&Theme::Dark, ());
        }
    }

    #[test]
    fn settings_clamp_negative_margins() {
        let mut config = Config::default();
        config.overlay.card_margin = Some(-5.0);
        assert_eq!(ViewSettings::from_config(&config).card_margin, 0.0);
    }
}
