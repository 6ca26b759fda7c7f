// SPDX-License-Identifier: MPL-2.0
//! Routes input to the controller that owns the current gesture.
//!
//! The router tracks up to two pointers. The number of pointers down and
//! whether the image is zoomed decide the [`GestureMode`]; any change in
//! pointer count throws the running session away and starts a new one from
//! wherever the transforms are at that moment.

use iced_core::mouse::Button;
use iced_core::{Point, Vector};
use tracing::{debug, trace};
use web_time::Instant;

use super::input::{is_zoom_modifier, InputEvent, PointerId};
use super::mode::{GestureMode, GestureSession, Owner};
use super::{Effect, Response};
use crate::carousel::{CarouselController, WheelStep};
use crate::config::defaults::{DOUBLE_TAP_THRESHOLD, TAP_SLOP};
use crate::render::Transform;
use crate::zoom_pan::ZoomPanController;

/// Maximum number of pointers that take part in a gesture.
const MAX_POINTERS: usize = 2;

/// The controllers an event may be routed to.
pub struct Targets<'a> {
    pub carousel: &'a mut CarouselController,
    pub zoom: &'a mut ZoomPanController,
}

impl Targets<'_> {
    fn is_animating(&self, now: Instant) -> bool {
        self.carousel.is_animating(now) || self.zoom.is_animating(now)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TapRecord {
    time: Instant,
    position: Point,
}

#[derive(Debug, Clone)]
pub struct GestureInputRouter {
    pointers: Vec<(PointerId, Point)>,
    session: Option<GestureSession>,
    mode: GestureMode,
    last_tap: Option<TapRecord>,
    double_tap_zoom: bool,
    /// Set once two pointers were down in the current press; such a press
    /// is never a tap.
    multi_touch: bool,
}

impl Default for GestureInputRouter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl GestureInputRouter {
    /// Creates a router. `double_tap_zoom` enables the touch double-tap toggle.
    #[must_use]
    pub fn new(double_tap_zoom: bool) -> Self {
        Self {
            pointers: Vec::with_capacity(MAX_POINTERS),
            session: None,
            mode: GestureMode::Idle,
            last_tap: None,
            double_tap_zoom,
            multi_touch: false,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.mode
    }

    #[must_use]
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    pub fn handle(&mut self, event: InputEvent, targets: &mut Targets<'_>) -> Response {
        match event {
            InputEvent::PointerDown {
                id,
                position,
                button,
                time,
            } => self.pointer_down(id, position, button, time, targets),
            InputEvent::PointerMove { id, position, time } => {
                self.pointer_move(id, position, time, targets)
            }
            InputEvent::PointerUp { id, position, time } => {
                self.pointer_up(id, position, time, targets)
            }
            InputEvent::PointerCancel { id, time } => self.pointer_cancel(id, time, targets),
            InputEvent::Wheel {
                delta,
                cursor,
                modifiers,
                time,
            } => self.wheel(delta, cursor, is_zoom_modifier(modifiers), time, targets),
            InputEvent::DoubleClick { position, time } => {
                self.double_click(position, time, targets)
            }
        }
    }

    /// Drops the live session and every tracked pointer without touching
    /// the controllers. Used when a programmatic call takes over.
    pub fn interrupt(&mut self, animating: bool) {
        if self.session.take().is_some() {
            debug!(mode = ?self.mode, "gesture interrupted");
        }
        self.pointers.clear();
        self.multi_touch = false;
        self.settle(animating);
    }

    /// Moves between `Idle` and `Animating` while no pointer is down.
    pub fn settle(&mut self, animating: bool) {
        if self.session.is_some() {
            return;
        }
        let next = if animating {
            GestureMode::Animating
        } else {
            GestureMode::Idle
        };
        self.transition(next);
    }

    fn transition(&mut self, next: GestureMode) {
        if next == self.mode {
            return;
        }
        debug_assert!(
            self.mode.can_transition_to(next),
            "illegal gesture transition {:?} -> {:?}",
            self.mode,
            next
        );
        debug!(from = ?self.mode, to = ?next, "gesture mode");
        self.mode = next;
    }

    fn position_of(&self, id: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find_map(|(pointer, position)| (*pointer == id).then_some(*position))
    }

    fn pointer_down(
        &mut self,
        id: PointerId,
        position: Point,
        button: Button,
        time: Instant,
        targets: &mut Targets<'_>,
    ) -> Response {
        if !id.is_touch() && button != Button::Left {
            return Response::ignored();
        }
        if self.position_of(id).is_some() || self.pointers.len() >= MAX_POINTERS {
            trace!(?id, "extra pointer ignored");
            return Response::ignored();
        }
        self.pointers.push((id, position));
        self.multi_touch |= self.pointers.len() > 1;

        let mut response = Response::ignored();
        self.abort_session(time, targets, &mut response);
        self.start_session(time, targets);
        if self.mode.is_exclusive() {
            response.capture();
        }
        response
    }

    fn pointer_move(
        &mut self,
        id: PointerId,
        position: Point,
        _time: Instant,
        targets: &mut Targets<'_>,
    ) -> Response {
        let Some(slot) = self.pointers.iter_mut().find(|(pointer, _)| *pointer == id) else {
            return Response::ignored();
        };
        slot.1 = position;

        let Some(session) = self.session.as_mut() else {
            return Response::ignored();
        };
        session.record(position);
        let mode = session.mode;

        match mode {
            GestureMode::Dragging => {
                targets.carousel.drag_move(position.x);
                Response::ignored()
            }
            GestureMode::Panning => {
                targets.zoom.pan_move(position);
                Response::captured()
            }
            GestureMode::Pinching => {
                if let [(_, a), (_, b)] = self.pointers.as_slice() {
                    targets.zoom.pinch_move(*a, *b);
                }
                Response::captured()
            }
            GestureMode::Idle | GestureMode::Animating => Response::ignored(),
        }
    }

    fn pointer_up(
        &mut self,
        id: PointerId,
        position: Point,
        time: Instant,
        targets: &mut Targets<'_>,
    ) -> Response {
        let Some(index) = self.pointers.iter().position(|(pointer, _)| *pointer == id) else {
            return Response::ignored();
        };
        self.pointers.remove(index);

        let mut response = Response::ignored();

        if !self.pointers.is_empty() {
            // Lifting one finger of a pinch: hand over without settling.
            self.abort_session(time, targets, &mut response);
            self.start_session(time, targets);
            response.capture();
            return response;
        }

        let multi_touch = std::mem::take(&mut self.multi_touch);
        let Some(session) = self.session.take() else {
            self.settle(targets.is_animating(time));
            return response;
        };

        match session.mode.owner() {
            Some(Owner::Carousel) => {
                targets.carousel.drag_move(position.x);
                response.record(targets.carousel.end_drag(time));
            }
            Some(Owner::ZoomPan) => {
                if session.mode == GestureMode::Panning {
                    targets.zoom.pan_move(position);
                }
                targets.zoom.end_gesture(time);
                response.capture();
            }
            None => {}
        }

        let mut travelled = session;
        travelled.record(position);
        if travelled.is_tap(TAP_SLOP) && !multi_touch {
            self.on_tap(id, position, time, targets, &mut response);
        }

        self.settle(targets.is_animating(time));
        response
    }

    fn pointer_cancel(
        &mut self,
        id: PointerId,
        time: Instant,
        targets: &mut Targets<'_>,
    ) -> Response {
        if self.position_of(id).is_none() {
            return Response::ignored();
        }
        // The platform owns every remaining pointer now; later events from
        // them are not part of any session.
        self.pointers.clear();
        self.multi_touch = false;

        let mut response = Response::ignored();
        if let Some(session) = self.session.take() {
            debug!(mode = ?session.mode, "gesture cancelled");
            match session.mode.owner() {
                Some(Owner::Carousel) => response.record(targets.carousel.cancel_drag(time)),
                Some(Owner::ZoomPan) => {
                    targets.zoom.end_gesture(time);
                    response.capture();
                }
                None => {}
            }
        }
        self.settle(targets.is_animating(time));
        response
    }

    fn wheel(
        &mut self,
        delta: Vector,
        cursor: Point,
        zoom_modifier: bool,
        time: Instant,
        targets: &mut Targets<'_>,
    ) -> Response {
        if self.session.is_some() {
            return Response::ignored();
        }

        let response = if zoom_modifier {
            targets.zoom.wheel_zoom(delta.y, cursor, time);
            Response::captured()
        } else if targets.zoom.is_zoomed() {
            targets.zoom.wheel_pan(delta, time);
            Response::captured()
        } else {
            match targets.carousel.wheel_step(delta.x, delta.y, time) {
                WheelStep::Ignored => Response::ignored(),
                WheelStep::Consumed(effect) => {
                    let mut response = Response::captured();
                    response.record(effect);
                    response
                }
            }
        };

        self.settle(targets.is_animating(time));
        response
    }

    fn double_click(
        &mut self,
        position: Point,
        time: Instant,
        targets: &mut Targets<'_>,
    ) -> Response {
        if self.session.is_some() {
            return Response::ignored();
        }
        let response = if targets.zoom.double_click(position, time) {
            Response::captured()
        } else {
            Response::ignored()
        };
        self.settle(targets.is_animating(time));
        response
    }

    fn on_tap(
        &mut self,
        id: PointerId,
        position: Point,
        time: Instant,
        targets: &mut Targets<'_>,
        response: &mut Response,
    ) {
        if !id.is_touch() {
            response.push(Effect::Tap(position));
            return;
        }

        let is_double = self.last_tap.is_some_and(|previous| {
            time.saturating_duration_since(previous.time) <= DOUBLE_TAP_THRESHOLD
                && previous.position.distance(position) < TAP_SLOP
        });

        if is_double && self.double_tap_zoom {
            self.last_tap = None;
            if targets.zoom.double_click(position, time) {
                debug!(x = position.x, y = position.y, "double-tap zoom");
                response.capture();
            }
        } else {
            self.last_tap = Some(TapRecord { time, position });
            response.push(Effect::Tap(position));
        }
    }

    /// Ends the live session without a release decision.
    fn abort_session(&mut self, time: Instant, targets: &mut Targets<'_>, response: &mut Response) {
        let Some(session) = self.session.take() else {
            return;
        };
        trace!(mode = ?session.mode, "session aborted by pointer change");
        match session.mode.owner() {
            Some(Owner::Carousel) => response.record(targets.carousel.cancel_drag(time)),
            Some(Owner::ZoomPan) => targets.zoom.abort_gesture(),
            None => {}
        }
    }

    /// Starts a session for the pointers currently down.
    fn start_session(&mut self, time: Instant, targets: &mut Targets<'_>) {
        let mode = GestureMode::classify(self.pointers.len(), targets.zoom.is_zoomed());
        let (start_position, start_transform) = match (mode, self.pointers.as_slice()) {
            (GestureMode::Dragging, [(_, position)]) => {
                let offset = targets.carousel.offset_at(time);
                targets.carousel.begin_drag(position.x, time);
                (*position, Transform::translate_x(offset))
            }
            (GestureMode::Panning, [(_, position)]) => {
                let transform = targets.zoom.transform_at(time);
                targets.zoom.begin_pan(*position, time);
                (*position, transform)
            }
            (GestureMode::Pinching, [(_, a), (_, b)]) => {
                let transform = targets.zoom.transform_at(time);
                targets.zoom.begin_pinch(*a, *b, time);
                (*a, transform)
            }
            _ => {
                self.settle(targets.is_animating(time));
                return;
            }
        };

        self.transition(mode);
        self.session = Some(GestureSession::new(
            mode,
            start_position,
            time,
            start_transform,
            self.pointers.len(),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselOptions;
    use crate::test_utils::{assert_abs_diff_eq, at};
    use crate::zoom_pan::ZoomOptions;
    use iced_core::event::Status;
    use iced_core::keyboard::Modifiers;
    use iced_core::Size;

    struct Rig {
        router: GestureInputRouter,
        carousel: CarouselController,
        zoom: ZoomPanController,
        t0: Instant,
    }

    impl Rig {
        fn new(slides: usize) -> Self {
            let t0 = Instant::now();
            let mut carousel = CarouselController::new(slides, 0, CarouselOptions::default());
            carousel.set_slide_width(400.0, t0);
            let mut zoom = ZoomPanController::new(ZoomOptions::default());
            zoom.set_dimensions(Size::new(400.0, 300.0), Size::new(400.0, 300.0), t0);
            Self {
                router: GestureInputRouter::default(),
                carousel,
                zoom,
                t0,
            }
        }

        fn send(&mut self, event: InputEvent) -> Response {
            let mut targets = Targets {
                carousel: &mut self.carousel,
                zoom: &mut self.zoom,
            };
            self.router.handle(event, &mut targets)
        }

        fn at(&self, millis: u64) -> Instant {
            at(self.t0, millis)
        }

        fn touch(&mut self, finger: u64, x: f32, y: f32, millis: u64) -> Response {
            let time = self.at(millis);
            self.send(InputEvent::touch_down(finger, Point::new(x, y), time))
        }

        fn touch_move(&mut self, finger: u64, x: f32, y: f32, millis: u64) -> Response {
            let time = self.at(millis);
            self.send(InputEvent::PointerMove {
                id: PointerId::Touch(finger),
                position: Point::new(x, y),
                time,
            })
        }

        fn touch_up(&mut self, finger: u64, x: f32, y: f32, millis: u64) -> Response {
            let time = self.at(millis);
            self.send(InputEvent::PointerUp {
                id: PointerId::Touch(finger),
                position: Point::new(x, y),
                time,
            })
        }

        fn wheel(&mut self, dx: f32, dy: f32, modifiers: Modifiers, millis: u64) -> Response {
            let time = self.at(millis);
            self.send(InputEvent::Wheel {
                delta: Vector::new(dx, dy),
                cursor: Point::new(200.0, 150.0),
                modifiers,
                time,
            })
        }
    }

    #[test]
    fn single_finger_at_identity_drags_the_carousel() {
        let mut rig = Rig::new(4);
        let response = rig.touch(0, 300.0, 150.0, 0);
        assert_eq!(rig.router.mode(), GestureMode::Dragging);
        assert_eq!(response.status, Status::Ignored);

        rig.touch_move(0, 200.0, 150.0, 50);
        assert_abs_diff_eq!(rig.carousel.state().current_translate, -100.0);

        let response = rig.touch_up(0, 150.0, 150.0, 100);
        assert_eq!(response.last_index(), Some(1));
        assert_abs_diff_eq!(rig.carousel.state().current_translate, -400.0);
        assert_eq!(rig.router.mode(), GestureMode::Animating);
    }

    #[test]
    fn single_finger_when_zoomed_pans_and_captures() {
        let mut rig = Rig::new(4);
        rig.zoom.double_click(Point::new(200.0, 150.0), rig.t0);
        let response = rig.touch(0, 200.0, 150.0, 500);
        assert_eq!(rig.router.mode(), GestureMode::Panning);
        assert!(response.is_captured());

        let response = rig.touch_move(0, 250.0, 170.0, 520);
        assert!(response.is_captured());
        assert_abs_diff_eq!(rig.zoom.state().translate.x, 50.0);
        assert_abs_diff_eq!(rig.zoom.state().translate.y, 20.0);
        assert_abs_diff_eq!(rig.carousel.state().current_translate, 0.0);
    }

    #[test]
    fn second_finger_aborts_drag_and_starts_pinch() {
        let mut rig = Rig::new(4);
        rig.touch(0, 300.0, 150.0, 0);
        rig.touch_move(0, 250.0, 150.0, 20);

        let response = rig.touch(1, 350.0, 150.0, 40);
        assert_eq!(rig.router.mode(), GestureMode::Pinching);
        assert!(response.is_captured());
        // The drag returns to where it started instead of evaluating a fling.
        assert_eq!(response.last_index(), Some(0));
        assert_abs_diff_eq!(rig.carousel.state().current_translate, 0.0);
        assert!(!rig.carousel.is_dragging());

        // Fingers 100 px apart spread to 200 px.
        rig.touch_move(0, 200.0, 150.0, 60);
        rig.touch_move(1, 400.0, 150.0, 60);
        assert_abs_diff_eq!(rig.zoom.state().scale, 2.0);
    }

    #[test]
    fn second_finger_during_pan_starts_pinch_from_panned_offset() {
        let mut rig = Rig::new(4);
        rig.zoom.double_click(Point::new(200.0, 150.0), rig.t0);
        rig.touch(0, 200.0, 150.0, 500);
        rig.touch_move(0, 250.0, 170.0, 520);
        assert_eq!(rig.router.mode(), GestureMode::Panning);

        let response = rig.touch(1, 300.0, 170.0, 540);
        assert!(response.is_captured());
        assert_eq!(rig.router.mode(), GestureMode::Pinching);
        // The pan is dropped without a settle.
        assert!(rig.zoom.is_interacting());
        assert!(!rig.zoom.is_animating(rig.at(540)));
        assert_abs_diff_eq!(rig.zoom.state().scale, 2.5);
        assert_abs_diff_eq!(rig.zoom.state().translate.x, 50.0);
        assert_abs_diff_eq!(rig.zoom.state().translate.y, 20.0);

        // Same finger distance, midpoint shifted 10 px right.
        rig.touch_move(0, 260.0, 170.0, 560);
        rig.touch_move(1, 310.0, 170.0, 560);
        assert_abs_diff_eq!(rig.zoom.state().scale, 2.5);
        assert_abs_diff_eq!(rig.zoom.state().translate.x, 60.0);
        assert_abs_diff_eq!(rig.zoom.state().translate.y, 20.0);
        assert_abs_diff_eq!(rig.carousel.state().current_translate, 0.0);
    }

    #[test]
    fn lifting_one_pinch_finger_hands_over_to_pan() {
        let mut rig = Rig::new(4);
        rig.touch(0, 150.0, 150.0, 0);
        rig.touch(1, 250.0, 150.0, 10);
        rig.touch_move(1, 350.0, 150.0, 30);
        let scale = rig.zoom.state().scale;
        assert!(scale > 1.5);

        let response = rig.touch_up(1, 350.0, 150.0, 50);
        assert!(response.is_captured());
        assert_eq!(rig.router.mode(), GestureMode::Panning);
        // No settle: the scale is untouched by the hand-over.
        assert_abs_diff_eq!(rig.zoom.state().scale, scale);
        assert_eq!(rig.router.session().map(|s| s.pointer_count), Some(1));
    }

    #[test]
    fn small_pinch_then_lift_returns_to_dragging() {
        let mut rig = Rig::new(4);
        rig.touch(0, 150.0, 150.0, 0);
        rig.touch(1, 250.0, 150.0, 10);
        rig.touch_up(1, 250.0, 150.0, 30);
        assert_eq!(rig.router.mode(), GestureMode::Dragging);
        assert!(rig.carousel.is_dragging());
    }

    #[test]
    fn third_pointer_is_ignored() {
        let mut rig = Rig::new(4);
        rig.touch(0, 150.0, 150.0, 0);
        rig.touch(1, 250.0, 150.0, 10);
        let response = rig.touch(2, 300.0, 100.0, 20);
        assert_eq!(response, Response::ignored());
        assert_eq!(rig.router.pointer_count(), 2);
        assert_eq!(rig.touch_move(2, 0.0, 0.0, 30), Response::ignored());
    }

    #[test]
    fn right_button_never_starts_a_gesture() {
        let mut rig = Rig::new(4);
        let time = rig.at(0);
        let response = rig.send(InputEvent::PointerDown {
            id: PointerId::Mouse,
            position: Point::new(100.0, 100.0),
            button: Button::Right,
            time,
        });
        assert_eq!(response, Response::ignored());
        assert_eq!(rig.router.mode(), GestureMode::Idle);
    }

    #[test]
    fn tap_is_reported_only_without_movement() {
        let mut rig = Rig::new(4);
        rig.touch(0, 100.0, 100.0, 0);
        rig.touch_move(0, 103.0, 101.0, 20);
        let response = rig.touch_up(0, 103.0, 101.0, 60);
        assert!(response.effects.contains(&Effect::Tap(Point::new(103.0, 101.0))));

        rig.touch(0, 100.0, 100.0, 1000);
        rig.touch_move(0, 130.0, 100.0, 1020);
        rig.touch_move(0, 101.0, 100.0, 1040);
        let response = rig.touch_up(0, 101.0, 100.0, 1060);
        assert!(!response
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::Tap(_))));
    }

    #[test]
    fn releasing_a_still_pinch_is_not_a_tap() {
        let mut rig = Rig::new(4);
        rig.touch(0, 150.0, 150.0, 0);
        rig.touch(1, 250.0, 150.0, 10);
        rig.touch_up(1, 250.0, 150.0, 40);
        let response = rig.touch_up(0, 150.0, 150.0, 60);
        assert!(!response
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::Tap(_))));
    }

    #[test]
    fn double_tap_toggles_zoom() {
        let mut rig = Rig::new(4);
        rig.touch(0, 200.0, 150.0, 0);
        rig.touch_up(0, 200.0, 150.0, 50);
        rig.touch(0, 202.0, 151.0, 200);
        let response = rig.touch_up(0, 202.0, 151.0, 250);
        assert!(response.is_captured());
        assert!(!response
            .effects
            .iter()
            .any(|effect| matches!(effect, Effect::Tap(_))));
        assert_abs_diff_eq!(rig.zoom.state().scale, 2.5);
    }

    #[test]
    fn slow_second_tap_is_just_a_tap() {
        let mut rig = Rig::new(4);
        rig.touch(0, 200.0, 150.0, 0);
        rig.touch_up(0, 200.0, 150.0, 50);
        rig.touch(0, 200.0, 150.0, 600);
        let response = rig.touch_up(0, 200.0, 150.0, 650);
        assert!(response.effects.contains(&Effect::Tap(Point::new(200.0, 150.0))));
        assert!(!rig.zoom.is_zoomed());
    }

    #[test]
    fn cancel_returns_carousel_to_start() {
        let mut rig = Rig::new(4);
        rig.touch(0, 300.0, 150.0, 0);
        rig.touch_move(0, 50.0, 150.0, 30);
        let time = rig.at(40);
        let response = rig.send(InputEvent::PointerCancel {
            id: PointerId::Touch(0),
            time,
        });
        assert_eq!(response.last_index(), Some(0));
        assert_abs_diff_eq!(rig.carousel.state().current_translate, 0.0);
        assert_eq!(rig.router.mode(), GestureMode::Animating);
        assert_eq!(rig.touch_up(0, 50.0, 150.0, 60), Response::ignored());
    }

    #[test]
    fn cancel_settles_zoom_into_bounds() {
        let mut rig = Rig::new(4);
        rig.touch(0, 150.0, 150.0, 0);
        rig.touch(1, 250.0, 150.0, 10);
        rig.touch_move(1, 252.0, 150.0, 20);
        let time = rig.at(30);
        rig.send(InputEvent::PointerCancel {
            id: PointerId::Touch(1),
            time,
        });
        assert!(!rig.zoom.is_zoomed());
        assert_eq!(rig.router.pointer_count(), 0);
    }

    #[test]
    fn plain_horizontal_wheel_steps_the_carousel() {
        let mut rig = Rig::new(4);
        let response = rig.wheel(60.0, 0.0, Modifiers::empty(), 0);
        assert!(response.is_captured());
        assert_eq!(response.last_index(), Some(1));

        let response = rig.wheel(0.0, 60.0, Modifiers::empty(), 500);
        assert_eq!(response.status, Status::Ignored);
    }

    #[test]
    fn control_wheel_zooms() {
        let mut rig = Rig::new(4);
        let response = rig.wheel(0.0, -100.0, Modifiers::CTRL, 0);
        assert!(response.is_captured());
        assert_abs_diff_eq!(rig.zoom.state().scale, 2.0);
        assert_eq!(rig.carousel.current_index(), 0);
    }

    #[test]
    fn wheel_pans_when_zoomed() {
        let mut rig = Rig::new(4);
        rig.wheel(0.0, -100.0, Modifiers::CTRL, 0);
        let response = rig.wheel(40.0, 0.0, Modifiers::empty(), 500);
        assert!(response.is_captured());
        assert_abs_diff_eq!(rig.zoom.state().translate.x, -40.0);
        assert_eq!(rig.carousel.current_index(), 0);
    }

    #[test]
    fn wheel_is_ignored_during_a_session() {
        let mut rig = Rig::new(4);
        rig.touch(0, 300.0, 150.0, 0);
        let response = rig.wheel(0.0, -100.0, Modifiers::CTRL, 10);
        assert_eq!(response, Response::ignored());
        assert_abs_diff_eq!(rig.zoom.state().scale, 1.0);
    }

    #[test]
    fn double_click_event_toggles_zoom() {
        let mut rig = Rig::new(4);
        let time = rig.at(0);
        let response = rig.send(InputEvent::DoubleClick {
            position: Point::new(200.0, 150.0),
            time,
        });
        assert!(response.is_captured());
        assert_abs_diff_eq!(rig.zoom.state().scale, 2.5);
        assert_eq!(rig.router.mode(), GestureMode::Animating);

        rig.router.settle(false);
        assert_eq!(rig.router.mode(), GestureMode::Idle);
    }

    #[test]
    fn interrupt_forgets_pointers() {
        let mut rig = Rig::new(4);
        rig.touch(0, 300.0, 150.0, 0);
        rig.router.interrupt(false);
        assert_eq!(rig.router.mode(), GestureMode::Idle);
        assert!(rig.router.session().is_none());
        assert_eq!(rig.touch_move(0, 100.0, 150.0, 10), Response::ignored());
    }
}
