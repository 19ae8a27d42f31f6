// SPDX-License-Identifier: MPL-2.0
//! Scale-fade transition gated on the overlay's visibility bit.
//!
//! The transition only affects how the card looks (opacity and scale). It
//! never delays content replacement: a new request is shown immediately and
//! the transition just eases the card in.

use std::time::{Duration, Instant};

/// Scale of the card at the start of the fade-in.
const START_SCALE: f32 = 0.95;

/// Progress of the overlay's appear/disappear animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    /// Linear progress, 0.0 = fully hidden, 1.0 = fully shown.
    progress: f32,
    target_visible: bool,
    duration: Duration,
    last_tick: Option<Instant>,
}

impl Transition {
    /// Creates a hidden transition with the given duration.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            progress: 0.0,
            target_visible: false,
            duration,
            last_tick: None,
        }
    }

    /// Changes the animation target. Reversing continues from the current
    /// progress.
    pub fn set_visible(&mut self, visible: bool, now: Instant) {
        if self.target_visible == visible {
            return;
        }
        self.target_visible = visible;
        self.last_tick = Some(now);

        if self.duration.is_zero() {
            self.progress = if visible { 1.0 } else { 0.0 };
        }
    }

    /// Advances the animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        if !self.is_animating() {
            self.last_tick = None;
            return;
        }

        let last = self.last_tick.unwrap_or(now);
        let elapsed = now.saturating_duration_since(last);
        self.last_tick = Some(now);

        let step = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };

        self.progress = if self.target_visible {
            (self.progress + step).min(1.0)
        } else {
            (self.progress - step).max(0.0)
        };
    }

    /// Returns true until the target state is reached.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        if self.target_visible {
            self.progress < 1.0
        } else {
            self.progress > 0.0
        }
    }

    /// Returns true if anything should be drawn.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.target_visible || self.progress > 0.0
    }

    #[must_use]
    pub fn target_visible(&self) -> bool {
        self.target_visible
    }

    /// Card opacity in `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        ease_out_cubic(self.progress)
    }

    /// Card scale factor in `0.95..=1.0`.
    #[must_use]
    pub fn scale(&self) -> f32 {
        START_SCALE + (1.0 - START_SCALE) * ease_out_cubic(self.progress)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::config::DEFAULT_FADE_DURATION_MS,
        ))
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_hidden_and_idle() {
        let transition = Transition::new(ms(200));
        assert!(!transition.is_rendered());
        assert!(!transition.is_animating());
        assert_eq!(transition.opacity(), 0.0);
        assert!((transition.scale() - START_SCALE).abs() < f32::EPSILON);
    }

    #[test]
    fn fades_in_over_duration() {
        let start = Instant::now();
        let mut transition = Transition::new(ms(200));
        transition.set_visible(true, start);
        assert!(transition.is_rendered());
        assert!(transition.is_animating());

        transition.tick(start + ms(100));
        assert!(transition.opacity() > 0.0 && transition.opacity() < 1.0);

        transition.tick(start + ms(250));
        assert_eq!(transition.opacity(), 1.0);
        assert!((transition.scale() - 1.0).abs() < 1e-6);
        assert!(!transition.is_animating());
    }

    #[test]
    fn fades_out_and_stops_rendering() {
        let start = Instant::now();
        let mut transition = Transition::new(ms(100));
        transition.set_visible(true, start);
        transition.tick(start + ms(100));

        transition.set_visible(false, start + ms(100));
        assert!(transition.is_rendered());
        transition.tick(start + ms(200));
        assert!(!transition.is_rendered());
        assert!(!transition.is_animating());
    }

    #[test]
    fn reversing_continues_from_current_progress() {
        let start = Instant::now();
        let mut transition = Transition::new(ms(100));
        transition.set_visible(true, start);
        transition.tick(start + ms(50));

        transition.set_visible(false, start + ms(50));
        transition.tick(start + ms(75));
        // 0.5 - 0.25 of the way back
        assert!(transition.is_rendered());
        transition.tick(start + ms(100));
        assert!(!transition.is_rendered());
    }

    #[test]
    fn zero_duration_jumps() {
        let now = Instant::now();
        let mut transition = Transition::new(Duration::ZERO);
        transition.set_visible(true, now);
        assert_eq!(transition.opacity(), 1.0);
        assert!(!transition.is_animating());
    }

    #[test]
    fn repeated_target_does_not_restart() {
        let start = Instant::now();
        let mut transition = Transition::new(ms(100));
        transition.set_visible(true, start);
        transition.tick(start + ms(100));
        transition.set_visible(true, start + ms(100));
        assert!(!transition.is_animating());
    }
}
