// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestrip: a headless model of an interactive, horizontally scrolling timeline.
//!
//! Date-ranged items are packed into compact lanes ([`timestrip_lanes`]),
//! placed on a calendar-day axis ([`timestrip_scale`]), and navigated with
//! zoom and pan ([`timestrip_view`]). This crate ties those together behind
//! [`Timeline`] and adds what a host UI needs around them: item ingestion and
//! validation, per-item rectangles, hit testing, detail text and overlay state.
//!
//! Rendering is left to the host. A frame looks like:
//!
//! 1. Forward input with [`Timeline::handle`]. Zoom events return a
//!    [`PendingRestore`].
//! 2. Draw [`Timeline::layout`] and report it with [`Timeline::commit_layout`].
//! 3. Hand any pending token to [`Timeline::commit_restore`] and scroll the
//!    surface to the resulting offset.
//!
//! ```rust
//! use timestrip::{ItemId, RawItem, RestoreOutcome, Timeline, TimelineConfig, TimelineEvent};
//!
//! let raw = [
//!     ("Design", "2024-01-01", "2024-01-05"),
//!     ("Build", "2024-01-03", "2024-01-10"),
//!     ("Review", "2024-01-06", "2024-01-08"),
//! ]
//! .into_iter()
//! .zip(1..)
//! .map(|((name, start, end), id)| RawItem {
//!     id: ItemId(id),
//!     name: name.into(),
//!     start: start.into(),
//!     end: end.into(),
//! });
//!
//! let mut timeline = Timeline::from_raw(raw, TimelineConfig::default()).unwrap();
//! assert_eq!(timeline.lanes().len(), 2);
//!
//! let layout = timeline.layout();
//! timeline.commit_layout(&layout, 800.0);
//!
//! let token = timeline.handle(TimelineEvent::ZoomOut).unwrap();
//! let layout = timeline.layout();
//! timeline.commit_layout(&layout, 800.0);
//! assert!(matches!(timeline.commit_restore(token), RestoreOutcome::Applied { .. }));
//! assert_eq!(timeline.zoom_label(), "167px/day");
//! ```
//!
//! Malformed input fails ingestion with a [`TimelineError`]; an empty item list
//! is valid and lays out as an empty timeline.

mod config;
mod detail;
mod error;
mod item;
mod layout;
mod overlay;
mod timeline;

pub use config::TimelineConfig;
pub use detail::{ItemDetail, format_duration};
pub use error::{ConfigError, DateField, TimelineError};
pub use item::{Item, ItemId, RawItem, ingest, parse_date};
pub use layout::{
    ItemLayout, LaneLayout, TimelineLayout, compute_axis_marks, compute_item_box, compute_lanes,
};
pub use overlay::{Key, Overlay};
pub use timeline::{Timeline, TimelineEvent};

pub use timestrip_lanes::Lane;
pub use timestrip_scale::{AxisMarks, DateWindow, DayMark, ItemBox, MonthMark};
pub use timestrip_view::{PendingRestore, PointerButton, RestoreOutcome, ZoomController};
