// SPDX-License-Identifier: MPL-2.0
//! Horizontal wheel stepping with a cooldown.
//!
//! Trackpads emit long trains of small horizontal deltas. The stepper
//! accumulates them until a threshold is crossed, fires a single step and
//! then absorbs the rest of the train until the wheel goes quiet.

use web_time::Instant;

use crate::config::defaults::{WHEEL_COOLDOWN_PERIOD, WHEEL_QUIET_PERIOD, WHEEL_STEP_THRESHOLD};

/// Direction of a wheel-triggered slide step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Next,
    Previous,
}

/// Outcome of feeding one wheel event to the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelInput {
    /// Mostly vertical; belongs to the page, not the carousel.
    Ignored,
    /// Consumed without crossing the threshold, or during cooldown.
    Absorbed,
    Stepped(Step),
}

#[derive(Debug, Clone, Default)]
pub struct WheelStepper {
    accumulated: f32,
    cooling_down: bool,
    quiet_until: Option<Instant>,
}

impl WheelStepper {
    pub fn feed(&mut self, delta_x: f32, delta_y: f32, now: Instant) -> WheelInput {
        if delta_y.abs() > delta_x.abs() {
            return WheelInput::Ignored;
        }

        if self.quiet_until.is_some_and(|deadline| now >= deadline) {
            self.reset();
        }

        self.accumulated += delta_x;

        if self.cooling_down {
            self.quiet_until = Some(now + WHEEL_COOLDOWN_PERIOD);
            return WheelInput::Absorbed;
        }

        let outcome = if self.accumulated > WHEEL_STEP_THRESHOLD {
            WheelInput::Stepped(Step::Next)
        } else if self.accumulated < -WHEEL_STEP_THRESHOLD {
            WheelInput::Stepped(Step::Previous)
        } else {
            WheelInput::Absorbed
        };

        if matches!(outcome, WheelInput::Stepped(_)) {
            self.cooling_down = true;
            self.accumulated = 0.0;
        }
        self.quiet_until = Some(now + WHEEL_QUIET_PERIOD);
        outcome
    }

    #[must_use]
    pub fn is_cooling_down(&self) -> bool {
        self.cooling_down
    }

    #[must_use]
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.accumulated = 0.0;
        self.cooling_down = false;
        self.quiet_until = None;
    }
}
