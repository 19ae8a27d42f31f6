// SPDX-License-Identifier: MPL-2.0
//! Icon animation sampling.
//!
//! Each [`IconAnimation`] is a periodic motion. [`sample`] evaluates it at a
//! point in time and returns the transform the view applies to the icon.
//! Periods follow the usual icon-font defaults (1s, 2s for a full spin).

use super::request::IconAnimation;
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Number of discrete steps in a stepped spin.
const PULSE_STEPS: f32 = 8.0;

/// Highest lift reached by a bouncing icon, in pixels.
pub const MAX_LIFT: f32 = 8.0;

/// Transform applied to an icon at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconMotion {
    /// Rotation in radians, clockwise.
    pub rotation: f32,
    pub opacity: f32,
    pub scale: f32,
    /// Vertical lift in pixels (positive = up).
    pub lift: f32,
}

impl IconMotion {
    /// No transform.
    pub const IDENTITY: IconMotion = IconMotion {
        rotation: 0.0,
        opacity: 1.0,
        scale: 1.0,
        lift: 0.0,
    };
}

impl Default for IconMotion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl IconAnimation {
    /// Length of one animation cycle.
    #[must_use]
    pub fn period(self) -> Duration {
        match self {
            IconAnimation::Spin | IconAnimation::SpinReverse => Duration::from_secs(2),
            _ => Duration::from_secs(1),
        }
    }
}

/// Evaluates `animation` after `elapsed` time.
#[must_use]
pub fn sample(animation: IconAnimation, elapsed: Duration) -> IconMotion {
    let period = animation.period().as_secs_f32();
    let phase = (elapsed.as_secs_f32() / period).fract();
    // 0 → 1 → 0 over one cycle
    let wave = 0.5 - 0.5 * (phase * TAU).cos();

    let mut motion = IconMotion::IDENTITY;
    match animation {
        IconAnimation::Spin => motion.rotation = phase * TAU,
        IconAnimation::SpinReverse => motion.rotation = -phase * TAU,
        IconAnimation::SpinPulse | IconAnimation::Pulse => {
            motion.rotation = (phase * PULSE_STEPS).floor() / PULSE_STEPS * TAU;
        }
        IconAnimation::Beat => motion.scale = 1.0 + 0.25 * wave,
        IconAnimation::Fade => motion.opacity = 1.0 - 0.6 * wave,
        IconAnimation::BeatFade => {
            motion.scale = 1.0 + 0.125 * wave;
            motion.opacity = 1.0 - 0.6 * wave;
        }
        IconAnimation::Bounce => {
            // Jump during the first half of the cycle, rest afterwards.
            if phase < 0.5 {
                motion.lift = MAX_LIFT * (phase * 2.0 * PI).sin();
            }
        }
        IconAnimation::Shake => {
            // Damped wobble of up to 18 degrees.
            let amplitude = 18f32.to_radians() * (1.0 - phase);
            motion.rotation = amplitude * (phase * 4.0 * TAU).sin();
        }
    }
    motion
}
