// SPDX-License-Identifier: MPL-2.0
//! The media viewport: one carousel plus a zoom/pan controller for the
//! visible slide, driven by a gesture router.
//!
//! The host feeds it [`InputEvent`]s and measurements, forwards the returned
//! [`Effect`]s, and on every render tick asks for a [`Frame`].

use iced_core::Size;
use tracing::debug;
use web_time::Instant;

use crate::carousel::{self, CarouselController, CarouselOptions};
use crate::config::Config;
use crate::domain::{AnimationDuration, MaxScale, ResistanceFactor};
use crate::gesture::{Effect, GestureInputRouter, GestureMode, InputEvent, Response, Targets};
use crate::render::{Frame, Transform, TransformSink};
use crate::zoom_pan::{ZoomOptions, ZoomPanController};

/// Construction options for a [`MediaViewport`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportOptions {
    pub slide_count: usize,
    pub initial_index: usize,
    pub carousel: CarouselOptions,
    pub zoom: ZoomOptions,
    pub double_tap_zoom: bool,
}

impl ViewportOptions {
    /// Default options for `slide_count` slides starting at the first one.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            initial_index: 0,
            carousel: CarouselOptions::default(),
            zoom: ZoomOptions::default(),
            double_tap_zoom: true,
        }
    }

    /// Options taken from persisted preferences.
    #[must_use]
    pub fn from_config(config: &Config, slide_count: usize) -> Self {
        Self {
            slide_count,
            initial_index: 0,
            carousel: CarouselOptions {
                resistance: config.resistance(),
                snap_duration: config.snap_duration(),
            },
            zoom: ZoomOptions {
                max_scale: config.max_scale(),
                enable_snap_back: config.enable_snap_back(),
                duration: config.zoom_duration(),
            },
            double_tap_zoom: config.double_tap_zoom(),
        }
    }

    #[must_use]
    pub fn initial_index(mut self, index: usize) -> Self {
        self.initial_index = index;
        self
    }

    #[must_use]
    pub fn max_scale(mut self, max_scale: MaxScale) -> Self {
        self.zoom.max_scale = max_scale;
        self
    }

    #[must_use]
    pub fn enable_snap_back(mut self, enabled: bool) -> Self {
        self.zoom.enable_snap_back = enabled;
        self
    }

    #[must_use]
    pub fn resistance(mut self, resistance: ResistanceFactor) -> Self {
        self.carousel.resistance = resistance;
        self
    }

    /// Uses `duration` for both snap and zoom transitions.
    #[must_use]
    pub fn animation_duration(mut self, duration: AnimationDuration) -> Self {
        self.carousel.snap_duration = duration;
        self.zoom.duration = duration;
        self
    }
}

#[derive(Debug, Clone)]
pub struct MediaViewport {
    router: GestureInputRouter,
    carousel: CarouselController,
    zoom: ZoomPanController,
}

impl MediaViewport {
    #[must_use]
    pub fn new(options: ViewportOptions) -> Self {
        Self {
            router: GestureInputRouter::new(options.double_tap_zoom),
            carousel: CarouselController::new(
                options.slide_count,
                options.initial_index,
                options.carousel,
            ),
            zoom: ZoomPanController::new(options.zoom),
        }
    }

    #[must_use]
    pub fn mode(&self) -> GestureMode {
        self.router.mode()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.carousel.slide_count()
    }

    #[must_use]
    pub fn carousel(&self) -> &CarouselController {
        &self.carousel
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomPanController {
        &self.zoom
    }

    #[must_use]
    pub fn router(&self) -> &GestureInputRouter {
        &self.router
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.carousel.is_animating(now) || self.zoom.is_animating(now)
    }

    /// Routes one input event.
    pub fn handle(&mut self, event: InputEvent) -> Response {
        let before = self.carousel.current_index();
        let mut targets = Targets {
            carousel: &mut self.carousel,
            zoom: &mut self.zoom,
        };
        let response = self.router.handle(event, &mut targets);
        self.on_index_change(before, event.time());
        response
    }

    /// Applies re-measured container and image sizes.
    ///
    /// The slide width equals the container width.
    pub fn resize(&mut self, container: Size, content: Size, now: Instant) {
        self.carousel.set_slide_width(container.width, now);
        self.zoom.set_dimensions(container, content, now);
    }

    /// Animates to `index`, overriding any gesture in progress.
    pub fn scroll_to(&mut self, index: usize, now: Instant) -> Option<Effect> {
        let before = self.carousel.current_index();
        self.router.interrupt(false);
        if self.zoom.is_interacting() {
            self.zoom.end_gesture(now);
        }
        let effect = self.carousel.scroll_to(index, now);
        self.on_index_change(before, now);
        self.router.settle(self.is_animating(now));
        index_effect(effect)
    }

    /// Follows an externally controlled index.
    pub fn sync_active_index(&mut self, index: usize, now: Instant) -> Option<Effect> {
        if index == self.carousel.current_index() {
            return None;
        }
        self.scroll_to(index, now)
    }

    /// Changes the number of slides, re-clamping the index.
    pub fn set_slide_count(&mut self, slide_count: usize, now: Instant) -> Option<Effect> {
        let before = self.carousel.current_index();
        let effect = self.carousel.set_slide_count(slide_count, now);
        if !self.carousel.is_dragging() && self.router.mode() == GestureMode::Dragging {
            self.router.interrupt(self.is_animating(now));
        }
        self.on_index_change(before, now);
        index_effect(effect)
    }

    /// Returns the visible image to identity.
    pub fn reset_zoom(&mut self, animate: bool, now: Instant) {
        if self.zoom.is_interacting() {
            self.router.interrupt(false);
        }
        self.zoom.reset(animate, now);
        self.router.settle(self.is_animating(now));
    }

    /// Computes what to paint at `now`, dropping finished transitions.
    pub fn frame(&mut self, now: Instant) -> Frame {
        self.carousel.tick(now);
        self.zoom.tick(now);
        let animating = self.is_animating(now);
        self.router.settle(animating);

        Frame {
            strip: Transform::translate_x(self.carousel.offset_at(now)),
            image: self.zoom.transform_at(now),
            interaction: self.zoom.interaction(),
            touch_action: self.zoom.touch_action(),
            animating,
        }
    }

    /// Computes the frame at `now` and hands it to `sink`.
    pub fn render<S: TransformSink + ?Sized>(&mut self, now: Instant, sink: &mut S) -> Frame {
        let frame = self.frame(now);
        sink.apply(&frame);
        frame
    }

    fn on_index_change(&mut self, before: usize, now: Instant) {
        let after = self.carousel.current_index();
        if after != before {
            debug!(from = before, to = after, "slide changed, resetting zoom");
            self.zoom.reset(false, now);
        }
    }
}

fn index_effect(effect: carousel::Effect) -> Option<Effect> {
    match effect {
        carousel::Effect::IndexChanged(index) => Some(Effect::IndexChanged(index)),
        carousel::Effect::None => None,
    }
}
