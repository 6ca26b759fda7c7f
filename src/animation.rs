// SPDX-License-Identifier: MPL-2.0
//! Deterministic tweens for snap and settle transitions.
//!
//! A [`Tween`] is a pure function of time: it is created with a start
//! instant and sampled with whatever instant the host's frame clock
//! reports. Nothing here polls or sleeps, so tests can drive transitions
//! with synthetic timestamps.

use std::time::Duration;
use web_time::Instant;

use crate::config::defaults::{SNAP_EASING, ZOOM_EASING};

/// Types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

/// Easing curves used by the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Carousel snap curve: strong ease-out.
    pub const SNAP: Self = Self::CubicBezier(
        SNAP_EASING[0],
        SNAP_EASING[1],
        SNAP_EASING[2],
        SNAP_EASING[3],
    );

    /// Zoom settle curve.
    pub const ZOOM: Self = Self::CubicBezier(
        ZOOM_EASING[0],
        ZOOM_EASING[1],
        ZOOM_EASING[2],
        ZOOM_EASING[3],
    );

    /// Apply the easing function to a linear fraction in `[0, 1]`.
    #[must_use]
    pub fn transform(&self, fraction: f32) -> f32 {
        match *self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, fraction),
        }
    }
}

/// Evaluates a unit cubic bezier at `fraction` along the x axis.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample = |a: f32, b: f32, c: f32, t: f32| ((a * t + b) * t + c) * t;
    let derivative = |a: f32, b: f32, c: f32, t: f32| (3.0 * a * t + 2.0 * b) * t + c;

    // Newton-Raphson on x(t) = fraction, falling back to bisection when the
    // slope flattens out.
    let mut t = fraction;
    for _ in 0..8 {
        let x = sample(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-5 {
            return sample(ay, by, cy, t);
        }
        let d = derivative(ax, bx, cx, t);
        if d.abs() < 1e-6 {
            break;
        }
        t = (t - x / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    t = fraction;
    for _ in 0..20 {
        let x = sample(ax, bx, cx, t);
        if (x - fraction).abs() < 1e-5 {
            break;
        }
        if x < fraction {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    sample(ay, by, cy, t)
}

/// A timed interpolation between two values.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl<T: Lerp + Clone> Tween<T> {
    #[must_use]
    pub fn new(from: T, to: T, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            easing,
        }
    }

    /// Linear progress in `[0, 1]` at `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Interpolated value at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> T {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to.clone();
        }
        self.from.lerp(&self.to, self.easing.transform(progress))
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Final value of the transition.
    #[must_use]
    pub fn target(&self) -> &T {
        &self.to
    }
}
