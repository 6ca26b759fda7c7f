// SPDX-License-Identifier: MPL-2.0
//! Normalized input events.
//!
//! Positions are in viewport-local coordinates (origin at the top-left
//! corner of the container). Wheel deltas follow the "positive = content
//! moves toward the bottom/right" convention of DOM wheel events.

use iced_core::keyboard::Modifiers;
use iced_core::mouse::Button;
use iced_core::{Point, Vector};
use web_time::Instant;

/// Identity of a pointer for the lifetime of one press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

impl PointerId {
    #[must_use]
    pub fn is_touch(self) -> bool {
        matches!(self, PointerId::Touch(_))
    }
}

/// A single input event delivered to the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        id: PointerId,
        position: Point,
        /// Always `Button::Left` for touch pointers.
        button: Button,
        time: Instant,
    },
    PointerMove {
        id: PointerId,
        position: Point,
        time: Instant,
    },
    PointerUp {
        id: PointerId,
        position: Point,
        time: Instant,
    },
    /// The platform took the pointer away (e.g. a system gesture).
    PointerCancel { id: PointerId, time: Instant },
    Wheel {
        delta: Vector,
        cursor: Point,
        modifiers: Modifiers,
        time: Instant,
    },
    DoubleClick { position: Point, time: Instant },
}

impl InputEvent {
    /// Timestamp of the event.
    #[must_use]
    pub fn time(&self) -> Instant {
        match *self {
            InputEvent::PointerDown { time, .. }
            | InputEvent::PointerMove { time, .. }
            | InputEvent::PointerUp { time, .. }
            | InputEvent::PointerCancel { time, .. }
            | InputEvent::Wheel { time, .. }
            | InputEvent::DoubleClick { time, .. } => time,
        }
    }

    /// Convenience constructor for a touch press.
    #[must_use]
    pub fn touch_down(finger: u64, position: Point, time: Instant) -> Self {
        InputEvent::PointerDown {
            id: PointerId::Touch(finger),
            position,
            button: Button::Left,
            time,
        }
    }

    /// Convenience constructor for a primary mouse press.
    #[must_use]
    pub fn mouse_down(position: Point, time: Instant) -> Self {
        InputEvent::PointerDown {
            id: PointerId::Mouse,
            position,
            button: Button::Left,
            time,
        }
    }
}

/// Returns true when the modifier that turns wheel input into zoom is held.
///
/// Trackpad pinches arrive as wheel events with Control set, so this is the
/// same key for both.
#[must_use]
pub fn is_zoom_modifier(modifiers: Modifiers) -> bool {
    modifiers.control()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_is_extracted_from_every_variant() {
        let now = Instant::now();
        let events = [
            InputEvent::mouse_down(Point::ORIGIN, now),
            InputEvent::PointerCancel {
                id: PointerId::Touch(3),
                time: now,
            },
            InputEvent::DoubleClick {
                position: Point::ORIGIN,
                time: now,
            },
        ];
        for event in events {
            assert_eq!(event.time(), now);
        }
    }

    #[test]
    fn only_control_is_the_zoom_modifier() {
        assert!(is_zoom_modifier(Modifiers::CTRL));
        assert!(!is_zoom_modifier(Modifiers::SHIFT));
        assert!(!is_zoom_modifier(Modifiers::empty()));
    }

    #[test]
    fn touch_pointers_are_flagged() {
        assert!(PointerId::Touch(0).is_touch());
        assert!(!PointerId::Mouse.is_touch());
    }
}
