// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timestrip Lanes: compact lane packing for ranged timeline items.
//!
//! Given a list of items that each cover an inclusive `[start, end]` range,
//! [`assign_lanes`] distributes them over the smallest practical number of
//! horizontal lanes so that no two items in a lane overlap.
//!
//! The packer is generic over anything implementing [`Span`]. Bounds only
//! need to be [`Ord`], so calendar dates, day numbers, or timestamps all work.
//!
//! ## Algorithm
//!
//! Items are stably sorted by start (items with equal starts keep their input
//! order). Each item is then placed into the first lane, in creation order,
//! whose last item ends strictly before the item starts. When no lane accepts
//! it, a new lane is opened. Bounds are inclusive: an item ending on the same
//! day another starts overlaps it.
//!
//! This is the first-fit coloring of an interval graph in start order, which
//! produces as many lanes as the maximum number of items covering any single
//! point. Runtime is `O(n · L)` for `n` items and `L` lanes.
//!
//! ## Minimal example
//!
//! ```rust
//! use timestrip_lanes::assign_lanes;
//!
//! // Inclusive day ranges.
//! let items = [1..=5, 3..=10, 6..=8];
//! let lanes = assign_lanes(items);
//!
//! assert_eq!(lanes.len(), 2);
//! assert_eq!(lanes[0].items(), &[1..=5, 6..=8]);
//! assert_eq!(lanes[1].items(), &[3..=10]);
//! ```
//!
//! Ranges whose end precedes their start are a caller contract violation. The
//! packer does not reject them; validate at ingestion.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod lane;
mod span;

pub use lane::{Lane, assign_lane_indices, assign_lanes, lane_count};
pub use span::Span;
