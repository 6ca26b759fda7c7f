// SPDX-License-Identifier: MPL-2.0
//! `swipe_lens` is a gesture engine for product image viewers.
//!
//! It provides a swipeable multi-slide carousel with velocity-based
//! snapping and a pinch/wheel zoom-and-pan controller with bounded panning.
//! The engine does not draw anything: a [`viewport::MediaViewport`] turns
//! input events into [`render::Frame`]s that the host applies to its own
//! rendering surface.
//!
//! # Example
//!
//! ```
//! use iced_core::{Point, Size};
//! use swipe_lens::gesture::{Effect, InputEvent, PointerId};
//! use swipe_lens::viewport::{MediaViewport, ViewportOptions};
//! use web_time::Instant;
//!
//! let t0 = Instant::now();
//! let mut viewport = MediaViewport::new(ViewportOptions::new(4));
//! viewport.resize(Size::new(400.0, 300.0), Size::new(400.0, 300.0), t0);
//!
//! viewport.handle(InputEvent::touch_down(0, Point::new(300.0, 150.0), t0));
//! let response = viewport.handle(InputEvent::PointerUp {
//!     id: PointerId::Touch(0),
//!     position: Point::new(150.0, 150.0),
//!     time: t0 + std::time::Duration::from_millis(100),
//! });
//!
//! assert_eq!(response.effects, vec![Effect::IndexChanged(1)]);
//! ```

pub mod animation;
pub mod carousel;
pub mod config;
pub mod domain;
pub mod error;
pub mod gesture;
pub mod platform;
pub mod render;
pub mod viewport;
pub mod zoom_pan;

#[cfg(test)]
mod test_utils;
