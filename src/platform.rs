// SPDX-License-Identifier: MPL-2.0
//! Translation from `iced_core` events to [`InputEvent`]s.
//!
//! Iced reports the cursor position separately from button presses, uses
//! window coordinates, and has no double-click event. [`IcedInput`] keeps
//! the bits of state needed to fill those gaps for one viewport.

use iced_core::keyboard::{self, Modifiers};
use iced_core::mouse::{self, Button, ScrollDelta};
use iced_core::{touch, Event, Point, Rectangle, Vector};
use web_time::Instant;

use crate::config::defaults::{DOUBLE_TAP_THRESHOLD, PIXELS_PER_WHEEL_LINE, TAP_SLOP};
use crate::gesture::{InputEvent, PointerId};

/// Converts a scroll delta to engine pixels ("positive = down/right").
#[must_use]
pub fn wheel_pixels(delta: ScrollDelta) -> Vector {
    let (x, y) = match delta {
        ScrollDelta::Lines { x, y } => (x * PIXELS_PER_WHEEL_LINE, y * PIXELS_PER_WHEEL_LINE),
        ScrollDelta::Pixels { x, y } => (x, y),
    };
    // Iced reports scrolling up as positive.
    Vector::new(-x, -y)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Click {
    time: Instant,
    position: Point,
}

/// Per-viewport event translator.
#[derive(Debug, Clone)]
pub struct IcedInput {
    bounds: Rectangle,
    /// Last known cursor position, viewport-local.
    cursor: Option<Point>,
    modifiers: Modifiers,
    /// Where the left button went down, while it is held.
    pressed_at: Option<Point>,
    last_click: Option<Click>,
}

impl IcedInput {
    #[must_use]
    pub fn new(bounds: Rectangle) -> Self {
        Self {
            bounds,
            cursor: None,
            modifiers: Modifiers::empty(),
            pressed_at: None,
            last_click: None,
        }
    }

    /// Updates the viewport's layout bounds (window coordinates).
    pub fn set_bounds(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
    }

    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn local(&self, position: Point) -> Point {
        Point::new(position.x - self.bounds.x, position.y - self.bounds.y)
    }

    fn cursor_inside(&self) -> Option<Point> {
        self.cursor.filter(|local| {
            local.x >= 0.0
                && local.y >= 0.0
                && local.x <= self.bounds.width
                && local.y <= self.bounds.height
        })
    }

    /// Translates one iced event observed at `now`.
    ///
    /// Returns nothing for events outside the viewport or irrelevant to it,
    /// and two events when a release completes a double-click.
    pub fn translate(&mut self, event: &Event, now: Instant) -> Vec<InputEvent> {
        match event {
            Event::Mouse(mouse_event) => self.mouse(mouse_event, now),
            Event::Touch(touch_event) => self.touch(touch_event, now),
            Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.modifiers = *modifiers;
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn mouse(&mut self, event: &mouse::Event, now: Instant) -> Vec<InputEvent> {
        match *event {
            mouse::Event::CursorMoved { position } => {
                let local = self.local(position);
                self.cursor = Some(local);
                if self.pressed_at.is_some() || self.bounds.contains(position) {
                    vec![InputEvent::PointerMove {
                        id: PointerId::Mouse,
                        position: local,
                        time: now,
                    }]
                } else {
                    Vec::new()
                }
            }
            mouse::Event::CursorLeft => {
                if self.pressed_at.is_none() {
                    self.cursor = None;
                }
                Vec::new()
            }
            mouse::Event::ButtonPressed(button) => {
                let Some(position) = self.cursor_inside() else {
                    return Vec::new();
                };
                if button == Button::Left {
                    self.pressed_at = Some(position);
                }
                vec![InputEvent::PointerDown {
                    id: PointerId::Mouse,
                    position,
                    button,
                    time: now,
                }]
            }
            mouse::Event::ButtonReleased(Button::Left) if self.pressed_at.is_some() => {
                let pressed_at = self.pressed_at.take();
                let Some(position) = self.cursor else {
                    return vec![InputEvent::PointerCancel {
                        id: PointerId::Mouse,
                        time: now,
                    }];
                };
                let mut events = vec![InputEvent::PointerUp {
                    id: PointerId::Mouse,
                    position,
                    time: now,
                }];
                let travelled = pressed_at.map_or(0.0, |start| start.distance(position));
                if travelled >= TAP_SLOP {
                    self.last_click = None;
                } else if let Some(double) = self.register_click(position, now) {
                    events.push(double);
                }
                events
            }
            mouse::Event::WheelScrolled { delta } => match self.cursor_inside() {
                Some(cursor) => vec![InputEvent::Wheel {
                    delta: wheel_pixels(delta),
                    cursor,
                    modifiers: self.modifiers,
                    time: now,
                }],
                None => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    /// Returns a double-click when this release follows a recent one nearby.
    /// Only releases that stayed within the tap slop of their press count.
    fn register_click(&mut self, position: Point, now: Instant) -> Option<InputEvent> {
        let is_double = self.last_click.is_some_and(|click| {
            now.saturating_duration_since(click.time) <= DOUBLE_TAP_THRESHOLD
                && click.position.distance(position) < TAP_SLOP
        });
        if is_double {
            // Reset to avoid triple-click
            self.last_click = None;
            Some(InputEvent::DoubleClick {
                position,
                time: now,
            })
        } else {
            self.last_click = Some(Click {
                time: now,
                position,
            });
            None
        }
    }

    fn touch(&self, event: &touch::Event, now: Instant) -> Vec<InputEvent> {
        let event = match *event {
            touch::Event::FingerPressed { id, position } => {
                if !self.bounds.contains(position) {
                    return Vec::new();
                }
                InputEvent::touch_down(id.0, self.local(position), now)
            }
            touch::Event::FingerMoved { id, position } => InputEvent::PointerMove {
                id: PointerId::Touch(id.0),
                position: self.local(position),
                time: now,
            },
            touch::Event::FingerLifted { id, position } => InputEvent::PointerUp {
                id: PointerId::Touch(id.0),
                position: self.local(position),
                time: now,
            },
            touch::Event::FingerLost { id, .. } => InputEvent::PointerCancel {
                id: PointerId::Touch(id.0),
                time: now,
            },
        };
        vec![event]
    }
}
