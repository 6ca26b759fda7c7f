// SPDX-License-Identifier: MPL-2.0
//! Viewport newtypes.
//!
//! This module provides type-safe wrappers for tuning values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

use crate::config::defaults::{
    DEFAULT_MAX_SCALE, DEFAULT_RESISTANCE_FACTOR, MAX_ANIMATION_DURATION_MS, MAX_SCALE_LIMIT,
    MIN_SCALE,
};

// =============================================================================
// MaxScale
// =============================================================================

/// Upper zoom bound, guaranteed to be within valid range (1×–10×).
///
/// A non-finite input falls back to the default rather than poisoning
/// every later clamp with `NaN`.
///
/// # Example
///
/// ```
/// use swipe_lens::domain::MaxScale;
///
/// assert_eq!(MaxScale::new(3.0).value(), 3.0);
/// assert_eq!(MaxScale::new(50.0).value(), 10.0);
/// assert_eq!(MaxScale::new(f32::NAN).value(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxScale(f32);

impl MaxScale {
    /// Creates a new maximum scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(MIN_SCALE, MAX_SCALE_LIMIT))
        } else {
            Self::default()
        }
    }

    /// Returns the raw scale value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Clamps a scale into `[1, self]`.
    #[must_use]
    pub fn clamp(self, scale: f32) -> f32 {
        if scale.is_nan() {
            return MIN_SCALE;
        }
        scale.clamp(MIN_SCALE, self.0)
    }
}

impl Default for MaxScale {
    fn default() -> Self {
        Self(DEFAULT_MAX_SCALE)
    }
}

// =============================================================================
// ResistanceFactor
// =============================================================================

/// Edge resistance applied to carousel overshoot, within `[0, 1]`.
///
/// `0` hard-stops at the edges, `1` disables resistance entirely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceFactor(f32);

impl ResistanceFactor {
    /// Creates a new resistance factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self::default()
        }
    }

    /// Returns the raw factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Damps `value` where it leaves `[min, max]`.
    #[must_use]
    pub fn apply(self, value: f32, min: f32, max: f32) -> f32 {
        if value > max {
            max + (value - max) * self.0
        } else if value < min {
            min + (value - min) * self.0
        } else {
            value
        }
    }
}

impl Default for ResistanceFactor {
    fn default() -> Self {
        Self(DEFAULT_RESISTANCE_FACTOR)
    }
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// Transition length in milliseconds, guaranteed to be within `0..=2000`.
///
/// A zero duration means "apply immediately".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDuration(u32);

impl AnimationDuration {
    /// Creates a new duration, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.min(MAX_ANIMATION_DURATION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Returns true when transitions should be skipped.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn max_scale_clamps_to_valid_range() {
        assert_abs_diff_eq!(MaxScale::new(0.5).value(), MIN_SCALE);
        assert_abs_diff_eq!(MaxScale::new(100.0).value(), MAX_SCALE_LIMIT);
        assert_abs_diff_eq!(MaxScale::new(3.0).value(), 3.0);
    }

    #[test]
    fn max_scale_rejects_non_finite() {
        assert_eq!(MaxScale::new(f32::INFINITY), MaxScale::default());
        assert_eq!(MaxScale::new(f32::NAN), MaxScale::default());
    }

    #[test]
    fn max_scale_clamp_maps_nan_to_identity() {
        let max = MaxScale::default();
        assert_abs_diff_eq!(max.clamp(f32::NAN), 1.0);
        assert_abs_diff_eq!(max.clamp(-3.0), 1.0);
        assert_abs_diff_eq!(max.clamp(42.0), 5.0);
    }

    #[test]
    fn resistance_damps_only_overshoot() {
        let factor = ResistanceFactor::default();
        assert_abs_diff_eq!(factor.apply(-50.0, -100.0, 0.0), -50.0);
        assert_abs_diff_eq!(factor.apply(100.0, -100.0, 0.0), 30.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(factor.apply(-200.0, -100.0, 0.0), -130.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn resistance_factor_clamps() {
        assert_abs_diff_eq!(ResistanceFactor::new(2.0).value(), 1.0);
        assert_abs_diff_eq!(ResistanceFactor::new(-1.0).value(), 0.0);
    }

    #[test]
    fn animation_duration_clamps_and_converts() {
        assert_eq!(AnimationDuration::new(10_000).millis(), MAX_ANIMATION_DURATION_MS);
        assert_eq!(
            AnimationDuration::new(400).as_duration(),
            Duration::from_millis(400)
        );
        assert!(AnimationDuration::new(0).is_instant());
    }
}
