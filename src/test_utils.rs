// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and deterministic clocks.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use std::time::Duration;
use web_time::Instant;

/// Default epsilon for f32 comparisons in gesture math.
pub const F32_EPSILON: f32 = 1e-4;

/// Returns `base` advanced by `millis` milliseconds.
#[must_use]
pub fn at(base: Instant, millis: u64) -> Instant {
    base + Duration::from_millis(millis)
}
