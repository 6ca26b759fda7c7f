// SPDX-License-Identifier: MPL-2.0
//! Render-side value types.
//!
//! The engine never paints anything. Each render tick it produces a
//! [`Frame`] and hands it to a [`TransformSink`] supplied by the host.

use iced_core::mouse::Interaction;
use iced_core::Vector;

use crate::animation::Lerp;

/// A 2D translate-then-scale transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate: Vector,
    pub scale: f32,
}

impl Transform {
    /// Identity transform (scale 1, no translation).
    pub const IDENTITY: Self = Self {
        translate: Vector { x: 0.0, y: 0.0 },
        scale: 1.0,
    };

    #[must_use]
    pub fn new(translate: Vector, scale: f32) -> Self {
        Self { translate, scale }
    }

    /// Horizontal-only translation, as used by the slide strip.
    #[must_use]
    pub fn translate_x(x: f32) -> Self {
        Self {
            translate: Vector::new(x, 0.0),
            scale: 1.0,
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translate.x == 0.0 && self.translate.y == 0.0
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Lerp for Transform {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Self {
            translate: Vector::new(
                self.translate.x.lerp(&target.translate.x, fraction),
                self.translate.y.lerp(&target.translate.y, fraction),
            ),
            scale: self.scale.lerp(&target.scale, fraction),
        }
    }
}

/// Which native touch gestures the host should leave to the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchAction {
    /// Vertical page scrolling stays native; horizontal swipes are ours.
    #[default]
    PanY,
    /// Every touch gesture is handled by the viewport.
    None,
}

/// Everything the host needs to paint one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Transform of the horizontal slide strip.
    pub strip: Transform,
    /// Transform of the visible slide's image.
    pub image: Transform,
    /// Cursor to show over the viewport.
    pub interaction: Interaction,
    pub touch_action: TouchAction,
    /// True while any transition is still running; hosts keep requesting frames.
    pub animating: bool,
}

/// The external rendering surface.
pub trait TransformSink {
    fn apply(&mut self, frame: &Frame);
}

impl<F> TransformSink for F
where
    F: FnMut(&Frame),
{
    fn apply(&mut self, frame: &Frame) {
        self(frame);
    }
}
