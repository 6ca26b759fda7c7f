// SPDX-License-Identifier: MPL-2.0
//! Zoom and pan for the visible image.
//!
//! Coordinates: `translate` is the offset of the scaled image's center from
//! the container's center. Bounds keep the scaled image covering the
//! container wherever it is larger than the container on that axis.
//!
//! Pinch zoom tracks the movement of the pinch midpoint and scales about
//! the image center, while wheel zoom and double-click keep the point under
//! the cursor fixed. The two are deliberately not the same transform.

use iced_core::mouse::Interaction;
use iced_core::{Point, Size, Vector};
use tracing::{debug, trace};
use web_time::Instant;

use crate::animation::{Easing, Tween};
use crate::config::defaults::{
    DEFAULT_ZOOM_DURATION_MS, DOUBLE_CLICK_SCALE, MIN_SCALE, WHEEL_ZOOM_ACCELERATION,
    WHEEL_ZOOM_SENSITIVITY, ZOOM_SETTLE_THRESHOLD,
};
use crate::domain::{AnimationDuration, MaxScale};
use crate::render::{TouchAction, Transform};

/// Persistent zoom state for one image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomPanState {
    pub scale: f32,
    pub translate: Vector,
}

impl Default for ZoomPanState {
    fn default() -> Self {
        Self {
            scale: MIN_SCALE,
            translate: Vector::new(0.0, 0.0),
        }
    }
}

impl ZoomPanState {
    #[must_use]
    pub fn transform(&self) -> Transform {
        Transform::new(self.translate, self.scale)
    }

    fn from_transform(transform: Transform) -> Self {
        Self {
            scale: transform.scale,
            translate: transform.translate,
        }
    }
}

/// Container and content sizes in layout pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub container: Size,
    /// Unscaled size of the image box inside the container.
    pub content: Size,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            container: Size::new(0.0, 0.0),
            content: Size::new(0.0, 0.0),
        }
    }
}

impl Dimensions {
    /// Largest allowed `|translate|` per axis at `scale`.
    #[must_use]
    pub fn max_translate(&self, scale: f32) -> Vector {
        Vector::new(
            ((scale * self.content.width - self.container.width) / 2.0).max(0.0),
            ((scale * self.content.height - self.container.height) / 2.0).max(0.0),
        )
    }

    /// Clamps `translate` into bounds at `scale`.
    #[must_use]
    pub fn clamp(&self, translate: Vector, scale: f32) -> Vector {
        let max = self.max_translate(scale);
        Vector::new(
            clamp_axis(translate.x, max.x),
            clamp_axis(translate.y, max.y),
        )
    }

    /// Offset of `point` from the container center.
    #[must_use]
    pub fn offset_from_center(&self, point: Point) -> Vector {
        Vector::new(
            point.x - self.container.width / 2.0,
            point.y - self.container.height / 2.0,
        )
    }
}

fn clamp_axis(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-max, max)
    }
}

/// Keeps the screen point `anchor` (relative to center) fixed while the
/// scale goes from `old_scale` to `new_scale`.
#[must_use]
pub fn anchored_translate(
    translate: Vector,
    anchor: Vector,
    old_scale: f32,
    new_scale: f32,
) -> Vector {
    if old_scale <= 0.0 {
        return translate;
    }
    let ratio = new_scale / old_scale - 1.0;
    Vector::new(
        translate.x - (anchor.x - translate.x) * ratio,
        translate.y - (anchor.y - translate.y) * ratio,
    )
}

/// Tuning for a zoom/pan controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOptions {
    pub max_scale: MaxScale,
    /// Return to identity whenever a gesture ends.
    pub enable_snap_back: bool,
    pub duration: AnimationDuration,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            max_scale: MaxScale::default(),
            enable_snap_back: false,
            duration: AnimationDuration::new(DEFAULT_ZOOM_DURATION_MS),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Session {
    Pan {
        start_point: Point,
        start_translate: Vector,
        dimensions: Dimensions,
    },
    Pinch {
        start_distance: f32,
        start_scale: f32,
        start_center: Point,
        start_translate: Vector,
        dimensions: Dimensions,
    },
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

#[derive(Debug, Clone)]
pub struct ZoomPanController {
    state: ZoomPanState,
    dimensions: Dimensions,
    session: Option<Session>,
    animation: Option<Tween<Transform>>,
    options: ZoomOptions,
}

impl ZoomPanController {
    #[must_use]
    pub fn new(options: ZoomOptions) -> Self {
        Self {
            state: ZoomPanState::default(),
            dimensions: Dimensions::default(),
            session: None,
            animation: None,
            options,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ZoomPanState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &ZoomOptions {
        &self.options
    }

    #[must_use]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// True when the image is magnified (logical state).
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.state.scale > MIN_SCALE
    }

    #[must_use]
    pub fn is_interacting(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.animation
            .as_ref()
            .is_some_and(|tween| !tween.is_finished(now))
    }

    /// Rendered transform at `now`.
    #[must_use]
    pub fn transform_at(&self, now: Instant) -> Transform {
        match &self.animation {
            Some(tween) => tween.sample(now),
            None => self.state.transform(),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self
            .animation
            .as_ref()
            .is_some_and(|tween| tween.is_finished(now))
        {
            self.animation = None;
        }
    }

    /// Cursor to show over the image.
    #[must_use]
    pub fn interaction(&self) -> Interaction {
        match (self.is_zoomed(), self.session.is_some()) {
            (true, true) => Interaction::Grabbing,
            (true, false) => Interaction::Grab,
            (false, _) => Interaction::Idle,
        }
    }

    #[must_use]
    pub fn touch_action(&self) -> TouchAction {
        if self.is_zoomed() {
            TouchAction::None
        } else {
            TouchAction::PanY
        }
    }

    /// Applies new measurements.
    ///
    /// A live gesture keeps the sizes captured when it started and is
    /// clamped against the new ones when it ends. Otherwise the target is
    /// re-clamped at once, and a running transition is redirected from its
    /// visible value toward the clamped target.
    pub fn set_dimensions(&mut self, container: Size, content: Size, now: Instant) {
        self.dimensions = Dimensions { container, content };
        if self.session.is_some() {
            return;
        }
        let target = ZoomPanState {
            scale: self.state.scale,
            translate: self
                .dimensions
                .clamp(self.state.translate, self.state.scale),
        };
        if self.is_animating(now) {
            if target != self.state {
                self.animate_to(target, now);
            }
        } else {
            self.animation = None;
            self.state = target;
        }
    }

    /// Freezes a running transition at its on-screen value.
    fn interrupt_animation(&mut self, now: Instant) {
        if let Some(tween) = self.animation.take() {
            self.state = ZoomPanState::from_transform(tween.sample(now));
        }
    }

    fn animate_to(&mut self, target: ZoomPanState, now: Instant) {
        let from = self.transform_at(now);
        self.state = target;
        let to = target.transform();
        if from != to && !self.options.duration.is_instant() {
            self.animation = Some(Tween::new(
                from,
                to,
                now,
                self.options.duration.as_duration(),
                Easing::ZOOM,
            ));
        } else {
            self.animation = None;
        }
    }

    pub fn begin_pan(&mut self, point: Point, now: Instant) {
        self.interrupt_animation(now);
        self.session = Some(Session::Pan {
            start_point: point,
            start_translate: self.state.translate,
            dimensions: self.dimensions,
        });
        trace!(x = point.x, y = point.y, "pan started");
    }

    /// Moves a zoomed image with the pointer, clamped to bounds.
    pub fn pan_move(&mut self, point: Point) {
        let Some(Session::Pan {
            start_point,
            start_translate,
            dimensions,
        }) = &self.session
        else {
            return;
        };
        if !self.is_zoomed() {
            return;
        }
        let moved = Vector::new(
            start_translate.x + (point.x - start_point.x),
            start_translate.y + (point.y - start_point.y),
        );
        self.state.translate = dimensions.clamp(moved, self.state.scale);
    }

    pub fn begin_pinch(&mut self, a: Point, b: Point, now: Instant) {
        self.interrupt_animation(now);
        let start_distance = a.distance(b);
        self.session = Some(Session::Pinch {
            start_distance,
            start_scale: self.state.scale,
            start_center: midpoint(a, b),
            start_translate: self.state.translate,
            dimensions: self.dimensions,
        });
        trace!(start_distance, "pinch started");
    }

    /// Scales by the ratio of finger distances and follows the midpoint.
    pub fn pinch_move(&mut self, a: Point, b: Point) {
        let Some(Session::Pinch {
            start_distance,
            start_scale,
            start_center,
            start_translate,
            dimensions,
        }) = &self.session
        else {
            return;
        };

        if *start_distance > f32::EPSILON {
            let ratio = a.distance(b) / start_distance;
            self.state.scale = self.options.max_scale.clamp(start_scale * ratio);
        }

        let center = midpoint(a, b);
        let moved = Vector::new(
            start_translate.x + (center.x - start_center.x),
            start_translate.y + (center.y - start_center.y),
        );
        self.state.translate = dimensions.clamp(moved, self.state.scale);
    }

    /// Zooms toward `cursor` (viewport-local) for a wheel delta.
    pub fn wheel_zoom(&mut self, delta_y: f32, cursor: Point, now: Instant) {
        self.interrupt_animation(now);
        let old_scale = self.state.scale;
        let step = WHEEL_ZOOM_SENSITIVITY * -delta_y * old_scale * WHEEL_ZOOM_ACCELERATION;
        let new_scale = self.options.max_scale.clamp(old_scale + step);

        let anchor = self.dimensions.offset_from_center(cursor);
        let translate = anchored_translate(self.state.translate, anchor, old_scale, new_scale);

        self.state = ZoomPanState {
            scale: new_scale,
            translate: self.dimensions.clamp(translate, new_scale),
        };
        trace!(old_scale, new_scale, "wheel zoom");
    }

    /// Scrolls a zoomed image by a wheel delta.
    pub fn wheel_pan(&mut self, delta: Vector, now: Instant) {
        if !self.is_zoomed() {
            return;
        }
        self.interrupt_animation(now);
        let moved = Vector::new(
            self.state.translate.x - delta.x,
            self.state.translate.y - delta.y,
        );
        self.state.translate = self.dimensions.clamp(moved, self.state.scale);
    }

    /// Toggles between identity and a 2.5× zoom anchored at `point`.
    ///
    /// Returns false when ignored (snap-back images never stay zoomed).
    pub fn double_click(&mut self, point: Point, now: Instant) -> bool {
        if self.options.enable_snap_back {
            return false;
        }
        self.session = None;

        let current = self.state;
        let target = if current.scale > ZOOM_SETTLE_THRESHOLD {
            ZoomPanState::default()
        } else {
            let new_scale = self.options.max_scale.clamp(DOUBLE_CLICK_SCALE);
            let anchor = self.dimensions.offset_from_center(point);
            let translate =
                anchored_translate(current.translate, anchor, current.scale, new_scale);
            ZoomPanState {
                scale: new_scale,
                translate: self.dimensions.clamp(translate, new_scale),
            }
        };
        debug!(from = current.scale, to = target.scale, "double-click zoom toggle");
        self.animate_to(target, now);
        true
    }

    /// Finishes a pan or pinch: snap back, settle to identity, or clamp.
    ///
    /// Bounds come from the latest measurements, not the ones captured when
    /// the gesture started.
    pub fn end_gesture(&mut self, now: Instant) {
        self.session = None;

        let target = if self.options.enable_snap_back {
            debug!("snap-back to identity");
            ZoomPanState::default()
        } else if self.state.scale < ZOOM_SETTLE_THRESHOLD {
            ZoomPanState::default()
        } else {
            ZoomPanState {
                scale: self.state.scale,
                translate: self
                    .dimensions
                    .clamp(self.state.translate, self.state.scale),
            }
        };
        self.animate_to(target, now);
    }

    /// Drops the current gesture without settling.
    pub fn abort_gesture(&mut self) {
        self.session = None;
    }

    /// Returns to identity, cancelling any gesture.
    pub fn reset(&mut self, animate: bool, now: Instant) {
        self.session = None;
        if animate {
            self.animate_to(ZoomPanState::default(), now);
        } else {
            self.animation = None;
            self.state = ZoomPanState::default();
        }
    }
}
