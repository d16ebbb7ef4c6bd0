// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestrip View: zoom and pan state for a horizontally scrolling timeline.
//!
//! This crate owns the interaction state of a timeline surface and nothing
//! else. It does not lay anything out and it does not talk to a renderer.
//! Callers feed it discrete input events and layout results:
//!
//! - [`ZoomState`]: a zoom density (pixels per day) that is clamped into
//!   `[min_zoom, max_zoom]` on every mutation.
//! - [`WheelAccumulator`]: sums continuous wheel deltas and emits one
//!   [`ZoomStep`] each time the running total reaches the snap threshold.
//! - [`ScrollState`]: the horizontal scroll offset, bounded by the content and
//!   viewport widths last reported by layout.
//! - [`PanDrag`]: middle-button drag panning.
//! - [`ZoomController`]: ties these together and preserves the relative scroll
//!   position across zoom changes.
//!
//! ## Scroll-preserving zoom
//!
//! Changing the zoom changes the content width, which is only known after the
//! host has laid out again. Zooming is therefore a two-phase operation:
//!
//! 1. [`ZoomController::apply_zoom`] (or a button/wheel helper) captures the
//!    current scroll ratio, applies the new density and returns a
//!    [`PendingRestore`] token.
//! 2. The host lays out with the new density and reports the resulting
//!    geometry via [`ZoomController::commit_layout`], then calls
//!    [`ZoomController::commit_restore`] with the token.
//!
//! ```rust
//! use timestrip_view::{RestoreOutcome, ZoomController, ZoomSettings};
//!
//! let mut zc = ZoomController::new(ZoomSettings::default());
//! // 10 days of content at the default 200 px/day, 800 px viewport.
//! zc.commit_layout(2000.0, 800.0);
//! zc.set_scroll_offset(600.0); // halfway
//!
//! let token = zc.zoom_out().unwrap();
//! let width = 10.0 * zc.pixels_per_day();
//! zc.commit_layout(width, 800.0);
//!
//! let RestoreOutcome::Applied { offset } = zc.commit_restore(token) else {
//!     panic!("restore should apply");
//! };
//! assert!((offset / (width - 800.0) - 0.5).abs() < 1e-9);
//! ```
//!
//! All state transitions happen synchronously on the caller's event thread;
//! nothing here blocks, spawns, or locks.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod pan;
mod scroll;
mod wheel;
mod zoom;

pub use controller::{PendingRestore, RestoreOutcome, ZoomController, ZoomControllerDebugInfo};
pub use pan::{PanDrag, PointerButton};
pub use scroll::ScrollState;
pub use wheel::WheelAccumulator;
pub use zoom::{ZoomSettings, ZoomState, ZoomStep};
