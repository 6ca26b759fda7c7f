// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value objects shared by the controllers.
//!
//! # Modules
//!
//! - [`newtypes`]: clamped tuning values ([`MaxScale`], [`ResistanceFactor`],
//!   [`AnimationDuration`])

pub mod newtypes;

pub use newtypes::{AnimationDuration, MaxScale, ResistanceFactor};
