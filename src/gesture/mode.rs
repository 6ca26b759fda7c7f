// SPDX-License-Identifier: MPL-2.0
//! Gesture modes and the per-gesture session.

use iced_core::Point;
use web_time::Instant;

use crate::render::Transform;

/// What the viewport is doing right now. Exactly one mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureMode {
    #[default]
    Idle,
    /// One pointer moving the slide strip (scale == 1).
    Dragging,
    /// One pointer moving a zoomed image (scale > 1).
    Panning,
    /// Two pointers scaling the image.
    Pinching,
    /// No pointer is down but a snap or settle transition is running.
    Animating,
}

/// The controller that owns the live transform in a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Owner {
    Carousel,
    ZoomPan,
}

impl GestureMode {
    /// Transition table.
    ///
    /// ```text
    /// Idle | Animating ──► Idle | Animating | Dragging | Panning | Pinching
    /// Dragging | Panning ──► Pinching | Idle | Animating
    /// Pinching ──► Pinching | Panning | Dragging | Idle | Animating
    /// ```
    #[must_use]
    pub fn can_transition_to(self, next: GestureMode) -> bool {
        use GestureMode::*;

        match (self, next) {
            (Idle | Animating, Idle | Animating | Dragging | Panning | Pinching) => true,
            (Dragging | Panning, Pinching | Idle | Animating) => true,
            (Pinching, Pinching | Panning | Dragging | Idle | Animating) => true,
            _ => false,
        }
    }

    /// Modes whose input must not leak to ancestor scroll or swipe containers.
    #[must_use]
    pub fn is_exclusive(self) -> bool {
        matches!(self, GestureMode::Panning | GestureMode::Pinching)
    }

    #[must_use]
    pub fn owner(self) -> Option<Owner> {
        match self {
            GestureMode::Dragging => Some(Owner::Carousel),
            GestureMode::Panning | GestureMode::Pinching => Some(Owner::ZoomPan),
            GestureMode::Idle | GestureMode::Animating => None,
        }
    }

    /// Mode for a fresh session with `pointer_count` pointers down.
    #[must_use]
    pub fn classify(pointer_count: usize, zoomed: bool) -> GestureMode {
        match pointer_count {
            0 => GestureMode::Idle,
            1 if zoomed => GestureMode::Panning,
            1 => GestureMode::Dragging,
            _ => GestureMode::Pinching,
        }
    }
}

/// State of one gesture, from the first press until release or abort.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub mode: GestureMode,
    pub start_position: Point,
    pub start_time: Instant,
    /// Snapshot of the owning controller's transform when the session began.
    pub start_transform: Transform,
    pub pointer_count: usize,
    /// Largest distance any tracked pointer travelled from `start_position`.
    pub travel: f32,
}

impl GestureSession {
    #[must_use]
    pub fn new(
        mode: GestureMode,
        start_position: Point,
        start_time: Instant,
        start_transform: Transform,
        pointer_count: usize,
    ) -> Self {
        Self {
            mode,
            start_position,
            start_time,
            start_transform,
            pointer_count,
            travel: 0.0,
        }
    }

    /// Records a pointer position, keeping the maximum travel.
    pub fn record(&mut self, position: Point) {
        self.travel = self.travel.max(self.start_position.distance(position));
    }

    /// True when the session never moved beyond `slop`.
    #[must_use]
    pub fn is_tap(&self, slop: f32) -> bool {
        self.pointer_count == 1 && self.travel < slop
    }
}
