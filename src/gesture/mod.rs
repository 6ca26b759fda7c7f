// SPDX-License-Identifier: MPL-2.0
//! Input normalization and gesture routing.
//!
//! The [`GestureInputRouter`] turns [`InputEvent`]s into calls on the
//! carousel or the zoom/pan controller and reports what happened as a
//! [`Response`].

pub mod input;
pub mod mode;
pub mod router;

pub use input::{is_zoom_modifier, InputEvent, PointerId};
pub use mode::{GestureMode, GestureSession, Owner};
pub use router::{GestureInputRouter, Targets};

use iced_core::event::Status;
use iced_core::Point;

use crate::carousel;

/// Notifications produced while handling input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// The carousel settled (or is animating) toward a slide.
    IndexChanged(usize),
    /// A single pointer was pressed and released without moving.
    Tap(Point),
}

/// Result of handling one input event.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// `Captured` when ancestors must not see the event.
    pub status: Status,
    pub effects: Vec<Effect>,
}

impl Response {
    #[must_use]
    pub fn ignored() -> Self {
        Self {
            status: Status::Ignored,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn captured() -> Self {
        Self {
            status: Status::Captured,
            effects: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_captured(&self) -> bool {
        self.status == Status::Captured
    }

    pub fn capture(&mut self) {
        self.status = Status::Captured;
    }

    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    /// Forwards a carousel notification, if any.
    pub fn record(&mut self, effect: carousel::Effect) {
        if let carousel::Effect::IndexChanged(index) = effect {
            self.effects.push(Effect::IndexChanged(index));
        }
    }

    /// Index reported by the most recent `IndexChanged`, if any.
    #[must_use]
    pub fn last_index(&self) -> Option<usize> {
        self.effects.iter().rev().find_map(|effect| match effect {
            Effect::IndexChanged(index) => Some(*index),
            Effect::Tap(_) => None,
        })
    }
}
