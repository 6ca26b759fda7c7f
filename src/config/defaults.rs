// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all tuning constants.
//!
//! This module is the single source of truth for the numbers that shape
//! how the viewport feels. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Drag resistance, fling thresholds, wheel stepping
//! - **Zoom**: Scale bounds, wheel sensitivity, double-click target
//! - **Gestures**: Touch slop and double-tap timing
//! - **Animation**: Transition durations and easing control points

use std::time::Duration;

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Fraction of the overshoot applied when dragging past the first or last slide.
pub const DEFAULT_RESISTANCE_FACTOR: f32 = 0.3;

/// Release velocity (px/ms) above which a drag counts as a fling.
pub const FLING_VELOCITY_THRESHOLD: f32 = 0.5;

/// Minimum travel (px) for a release to count as a fling.
pub const FLING_MIN_DISTANCE: f32 = 30.0;

/// Accumulated horizontal wheel delta (px) needed to step one slide.
pub const WHEEL_STEP_THRESHOLD: f32 = 50.0;

/// Quiet period after an ordinary wheel event before the accumulator clears.
pub const WHEEL_QUIET_PERIOD: Duration = Duration::from_millis(100);

/// Quiet period after a wheel event absorbed during the step cooldown.
pub const WHEEL_COOLDOWN_PERIOD: Duration = Duration::from_millis(200);

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Minimum zoom scale (the image fills the viewport, no zoom).
pub const MIN_SCALE: f32 = 1.0;

/// Default maximum zoom scale.
pub const DEFAULT_MAX_SCALE: f32 = 5.0;

/// Upper limit accepted for a configured maximum scale.
pub const MAX_SCALE_LIMIT: f32 = 10.0;

/// Scale applied by a double-click or double-tap on an unzoomed image.
pub const DOUBLE_CLICK_SCALE: f32 = 2.5;

/// Scales above this threshold count as "zoomed in" for the double-click toggle,
/// and scales below it settle back to identity when a gesture ends.
pub const ZOOM_SETTLE_THRESHOLD: f32 = 1.1;

/// Wheel-zoom sensitivity per pixel of vertical delta.
pub const WHEEL_ZOOM_SENSITIVITY: f32 = 0.002;

/// Acceleration multiplier applied to wheel zoom steps.
pub const WHEEL_ZOOM_ACCELERATION: f32 = 5.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Travel (px) below which a released pointer counts as a tap.
///
/// Matches the common platform touch slop of roughly 8 logical pixels.
pub const TAP_SLOP: f32 = 8.0;

/// Maximum delay between two taps for them to form a double-tap.
pub const DOUBLE_TAP_THRESHOLD: Duration = Duration::from_millis(350);

/// Pixels per wheel "line" when the platform reports line-based deltas.
pub const PIXELS_PER_WHEEL_LINE: f32 = 20.0;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Default duration of a carousel snap transition, in milliseconds.
pub const DEFAULT_SNAP_DURATION_MS: u32 = 400;

/// Default duration of a zoom/pan settle transition, in milliseconds.
pub const DEFAULT_ZOOM_DURATION_MS: u32 = 300;

/// Upper limit accepted for a configured animation duration, in milliseconds.
pub const MAX_ANIMATION_DURATION_MS: u32 = 2000;

/// Control points of the carousel snap curve (`cubic-bezier(0.22, 1, 0.36, 1)`).
pub const SNAP_EASING: [f32; 4] = [0.22, 1.0, 0.36, 1.0];

/// Control points of the zoom settle curve (`cubic-bezier(0.2, 0.8, 0.2, 1)`).
pub const ZOOM_EASING: [f32; 4] = [0.2, 0.8, 0.2, 1.0];

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_RESISTANCE_FACTOR > 0.0);
    assert!(DEFAULT_RESISTANCE_FACTOR < 1.0);
    assert!(FLING_VELOCITY_THRESHOLD > 0.0);
    assert!(WHEEL_STEP_THRESHOLD > 0.0);

    assert!(MIN_SCALE == 1.0);
    assert!(DEFAULT_MAX_SCALE > MIN_SCALE);
    assert!(MAX_SCALE_LIMIT >= DEFAULT_MAX_SCALE);
    assert!(DOUBLE_CLICK_SCALE > ZOOM_SETTLE_THRESHOLD);
    assert!(DOUBLE_CLICK_SCALE <= DEFAULT_MAX_SCALE);

    assert!(DEFAULT_SNAP_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
    assert!(DEFAULT_ZOOM_DURATION_MS <= MAX_ANIMATION_DURATION_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fling_defaults_are_valid() {
        assert_eq!(FLING_VELOCITY_THRESHOLD, 0.5);
        assert_eq!(FLING_MIN_DISTANCE, 30.0);
    }

    #[test]
    fn wheel_cooldown_outlasts_quiet_period() {
        assert!(WHEEL_COOLDOWN_PERIOD > WHEEL_QUIET_PERIOD);
    }

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_SCALE, 5.0);
        assert!(DOUBLE_CLICK_SCALE < DEFAULT_MAX_SCALE);
    }
}
