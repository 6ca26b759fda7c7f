// SPDX-License-Identifier: MPL-2.0
//! Swipeable slide strip.
//!
//! The controller keeps the logical position of the strip
//! ([`CarouselState`]) separate from what is on screen while a snap
//! transition plays. `current_translate` always holds where the strip is
//! going; [`CarouselController::offset_at`] reports where it is.

pub mod wheel;

use std::time::Duration;

use tracing::{debug, trace};
use web_time::Instant;

use crate::animation::{Easing, Tween};
use crate::config::defaults::{
    DEFAULT_SNAP_DURATION_MS, FLING_MIN_DISTANCE, FLING_VELOCITY_THRESHOLD,
};
use crate::domain::{AnimationDuration, ResistanceFactor};
use wheel::{Step, WheelInput, WheelStepper};

/// Persistent carousel state.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub current_index: usize,
    pub slide_count: usize,
    /// Logical strip offset in pixels (0 for the first slide, negative after).
    pub current_translate: f32,
    pub is_animating: bool,
}

/// Tuning knobs for a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    pub resistance: ResistanceFactor,
    pub snap_duration: AnimationDuration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            resistance: ResistanceFactor::default(),
            snap_duration: AnimationDuration::new(DEFAULT_SNAP_DURATION_MS),
        }
    }
}

/// Effects produced by carousel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Effect {
    None,
    /// The strip settled (or is animating toward) this slide.
    IndexChanged(usize),
}

/// Result of a wheel event routed to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelStep {
    /// Vertical scroll; leave it to the page.
    Ignored,
    Consumed(Effect),
}

#[derive(Debug, Clone, PartialEq)]
struct DragSession {
    start_x: f32,
    start_translate: f32,
    start_index: usize,
    start_time: Instant,
    /// Width measured when the drag began.
    slide_width: f32,
}

#[derive(Debug, Clone)]
pub struct CarouselController {
    state: CarouselState,
    slide_width: f32,
    drag: Option<DragSession>,
    animation: Option<Tween<f32>>,
    wheel: WheelStepper,
    options: CarouselOptions,
}

impl CarouselController {
    /// Creates a carousel positioned on `initial_index` (clamped).
    ///
    /// The slide width is unknown until the host measures the container,
    /// see [`CarouselController::set_slide_width`].
    #[must_use]
    pub fn new(slide_count: usize, initial_index: usize, options: CarouselOptions) -> Self {
        let current_index = initial_index.min(slide_count.saturating_sub(1));
        Self {
            state: CarouselState {
                current_index,
                slide_count,
                current_translate: 0.0,
                is_animating: false,
            },
            slide_width: 0.0,
            drag: None,
            animation: None,
            wheel: WheelStepper::default(),
            options,
        }
    }

    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.state.slide_count
    }

    #[must_use]
    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// True while a snap transition is still visibly running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|tween| !tween.is_finished(now))
    }

    /// Rendered strip offset at `now`.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        match (&self.drag, &self.animation) {
            (None, Some(tween)) => tween.sample(now),
            _ => self.state.current_translate,
        }
    }

    /// Drops a finished transition.
    pub fn tick(&mut self, now: Instant) {
        if self
            .animation
            .as_ref()
            .is_some_and(|tween| tween.is_finished(now))
        {
            self.animation = None;
            self.state.is_animating = false;
        }
    }

    /// Offset at which `index` is fully in view.
    #[must_use]
    pub fn offset_for(&self, index: usize) -> f32 {
        -(index as f32) * self.slide_width
    }

    fn max_index(&self) -> usize {
        self.state.slide_count.saturating_sub(1)
    }

    fn clamp_index(&self, index: f32) -> usize {
        if index.is_nan() || index <= 0.0 {
            return 0;
        }
        // Saturating cast; the min keeps it inside the strip.
        (index as usize).min(self.max_index())
    }

    /// Moves to `index` (clamped), animated or immediately.
    ///
    /// Cancels an in-progress drag. Always reports the resulting index.
    pub fn snap_to_index(&mut self, index: usize, animate: bool, now: Instant) -> Effect {
        let index = index.min(self.max_index());
        let from = self.offset_at(now);
        self.drag = None;

        self.state.current_index = index;
        let target = self.offset_for(index);
        self.state.current_translate = target;

        let moves = (from - target).abs() > f32::EPSILON;
        if animate && moves && !self.options.snap_duration.is_instant() {
            self.animation = Some(Tween::new(
                from,
                target,
                now,
                self.options.snap_duration.as_duration(),
                Easing::SNAP,
            ));
            self.state.is_animating = true;
        } else {
            self.animation = None;
            self.state.is_animating = false;
        }

        debug!(index, animate, target, "carousel snapped");
        Effect::IndexChanged(index)
    }

    /// Programmatic navigation; wins over any drag in progress.
    pub fn scroll_to(&mut self, index: usize, now: Instant) -> Effect {
        if self.drag.is_some() {
            debug!(index, "programmatic scroll cancels drag");
        }
        self.snap_to_index(index, true, now)
    }

    /// Follows an externally controlled index, moving only when it differs.
    pub fn sync_active_index(&mut self, index: usize, now: Instant) -> Effect {
        if index == self.state.current_index {
            Effect::None
        } else {
            self.scroll_to(index, now)
        }
    }

    /// Applies a re-measured slide width.
    ///
    /// An idle strip is re-aligned without animation. A live drag keeps the
    /// width it captured when it started.
    pub fn set_slide_width(&mut self, width: f32, now: Instant) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if (width - self.slide_width).abs() <= f32::EPSILON {
            return;
        }
        self.slide_width = width;
        if self.drag.is_none() {
            let _ = self.snap_to_index(self.state.current_index, false, now);
        }
    }

    /// Updates the number of slides, re-clamping the current index.
    pub fn set_slide_count(&mut self, slide_count: usize, now: Instant) -> Effect {
        let previous = self.state.current_index;
        self.state.slide_count = slide_count;
        let index = previous.min(self.max_index());
        if self.drag.is_some() && index == previous {
            return Effect::None;
        }
        let effect = self.snap_to_index(index, false, now);
        if index == previous {
            Effect::None
        } else {
            effect
        }
    }

    /// Starts a drag at horizontal pointer position `x`.
    ///
    /// A running snap is frozen where it currently is on screen.
    pub fn begin_drag(&mut self, x: f32, now: Instant) {
        let start_translate = self.offset_at(now);
        self.animation = None;
        self.state.is_animating = false;
        self.state.current_translate = start_translate;
        self.drag = Some(DragSession {
            start_x: x,
            start_translate,
            start_index: self.state.current_index,
            start_time: now,
            slide_width: self.slide_width,
        });
        trace!(x, start_translate, "carousel drag started");
    }

    /// Follows the pointer; overshoot past either end is damped.
    pub fn drag_move(&mut self, x: f32) {
        let Some(drag) = &self.drag else {
            return;
        };
        let raw = drag.start_translate + (x - drag.start_x);
        let min = -(self.max_index() as f32) * drag.slide_width;
        self.state.current_translate = self.options.resistance.apply(raw, min, 0.0);
    }

    /// Releases the drag and snaps to the slide chosen by [`Self::release`].
    pub fn end_drag(&mut self, now: Instant) -> Effect {
        let Some(drag) = &self.drag else {
            return Effect::None;
        };
        let moved_by = self.state.current_translate - drag.start_translate;
        let duration = now.saturating_duration_since(drag.start_time);
        self.release(moved_by, duration, now)
    }

    /// Abandons the drag without a release decision; the strip returns to
    /// the slide it was on when the drag started.
    pub fn cancel_drag(&mut self, now: Instant) -> Effect {
        let Some(drag) = self.drag.take() else {
            return Effect::None;
        };
        debug!(index = drag.start_index, "carousel drag aborted");
        self.snap_to_index(drag.start_index, true, now)
    }

    /// Picks the slide to settle on after the pointer moved `moved_by`
    /// pixels over `duration`, then snaps to it.
    ///
    /// A fast release (fling) advances toward the motion even if the strip
    /// has not crossed the halfway point; a slow one rounds to the nearest
    /// slide. Either way the result is at most one slide away from where
    /// the gesture started.
    pub fn release(&mut self, moved_by: f32, duration: Duration, now: Instant) -> Effect {
        let (start_index, width) = match &self.drag {
            Some(drag) => (drag.start_index, drag.slide_width),
            None => (self.state.current_index, self.slide_width),
        };

        let duration_ms = duration.as_secs_f32() * 1000.0;
        let velocity = if duration_ms > 0.0 {
            moved_by.abs() / duration_ms
        } else {
            f32::INFINITY
        };

        let exact = if width > 0.0 {
            -self.state.current_translate / width
        } else {
            start_index as f32
        };

        let is_fling =
            velocity > FLING_VELOCITY_THRESHOLD && moved_by.abs() > FLING_MIN_DISTANCE;
        let target = if is_fling {
            if moved_by < 0.0 {
                exact.floor() + 1.0
            } else {
                exact.ceil() - 1.0
            }
        } else {
            exact.round()
        };

        let origin = start_index as f32;
        let next = self.clamp_index(target.clamp(origin - 1.0, origin + 1.0));
        debug!(moved_by, velocity, exact, is_fling, next, "carousel released");
        self.snap_to_index(next, true, now)
    }

    /// Feeds a wheel event; horizontal trains step one slide at a time.
    pub fn wheel_step(&mut self, delta_x: f32, delta_y: f32, now: Instant) -> WheelStep {
        match self.wheel.feed(delta_x, delta_y, now) {
            WheelInput::Ignored => WheelStep::Ignored,
            WheelInput::Absorbed => WheelStep::Consumed(Effect::None),
            WheelInput::Stepped(step) => {
                let current = self.state.current_index;
                let index = match step {
                    Step::Next => current.saturating_add(1),
                    Step::Previous => current.saturating_sub(1),
                };
                WheelStep::Consumed(self.snap_to_index(index, true, now))
            }
        }
    }
}
