// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One layout pass: lanes, item boxes and axis marks at a given zoom density.
//!
//! Rectangles are in content coordinates: `x` runs along the date axis from
//! the reference date, `y` from the top of the first lane. The header band
//! holding the axis marks sits above `y = 0` and is not part of the rects.

use chrono::NaiveDate;
use kurbo::{Point, Rect};
use timestrip_lanes::{Lane, assign_lanes};
use timestrip_scale::{AxisMarks, DateWindow, DayScale, ItemBox, axis_marks, item_box};
use tracing::trace;

use crate::{Item, ItemId, TimelineConfig};

/// Packs items into lanes of non-overlapping items.
#[must_use]
pub fn compute_lanes(items: impl IntoIterator<Item = Item>) -> Vec<Lane<Item>> {
    let lanes = assign_lanes(items);
    trace!(lanes = lanes.len(), "lanes assigned");
    lanes
}

/// Horizontal box of `item` relative to `reference_min`.
#[must_use]
pub fn compute_item_box(
    item: &Item,
    reference_min: NaiveDate,
    pixels_per_day: f64,
    min_item_width: f64,
) -> ItemBox {
    let scale = DayScale::new(reference_min, pixels_per_day);
    item_box(item.start(), item.end(), &scale, min_item_width)
}

/// Month and day marks for the window `[reference_min, reference_max]`.
#[must_use]
pub fn compute_axis_marks(
    reference_min: NaiveDate,
    reference_max: NaiveDate,
    pixels_per_day: f64,
) -> AxisMarks {
    axis_marks(&DateWindow::new(reference_min, reference_max), pixels_per_day)
}

/// Placement of one item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ItemLayout {
    /// The item.
    pub id: ItemId,
    /// Index of the lane holding it.
    pub lane: usize,
    /// Its box, vertically centered in the lane.
    pub rect: Rect,
}

/// Placement of one lane.
#[derive(Clone, Debug, PartialEq)]
pub struct LaneLayout {
    /// Position of the lane, top to bottom.
    pub index: usize,
    /// Offset of the lane's top edge.
    pub top: f64,
    /// Items in start order.
    pub items: Vec<ItemLayout>,
}

/// Geometry of a whole timeline at one zoom density.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineLayout {
    /// Reference window, `None` for an empty timeline.
    pub window: Option<DateWindow>,
    /// Density this layout was computed at.
    pub pixels_per_day: f64,
    /// Lanes, top to bottom.
    pub lanes: Vec<LaneLayout>,
    /// Width of the scrollable content.
    pub content_width: f64,
    /// Height of the lane area.
    pub content_height: f64,
    /// Height of the lane area plus the header band.
    pub total_height: f64,
    /// Axis marks for the header band.
    pub axis: AxisMarks,
}

impl TimelineLayout {
    /// Lays out packed `lanes` over `window` at `pixels_per_day`.
    ///
    /// Without a window (no items) the layout is empty: no lanes, no marks and
    /// zero content width.
    #[must_use]
    pub fn compute(
        lanes: &[Lane<Item>],
        window: Option<DateWindow>,
        pixels_per_day: f64,
        config: &TimelineConfig,
    ) -> Self {
        let Some(window) = window else {
            return Self {
                window: None,
                pixels_per_day,
                lanes: Vec::new(),
                content_width: 0.0,
                content_height: 0.0,
                total_height: config.axis_header_height,
                axis: AxisMarks::default(),
            };
        };

        let inset = config.item_vertical_offset();
        let lanes: Vec<LaneLayout> = lanes
            .iter()
            .enumerate()
            .map(|(index, lane)| {
                let top = index as f64 * config.lane_height;
                let items = lane
                    .iter()
                    .map(|item| {
                        let bx = compute_item_box(
                            item,
                            window.min(),
                            pixels_per_day,
                            config.min_item_width,
                        );
                        let y0 = top + inset;
                        ItemLayout {
                            id: item.id(),
                            lane: index,
                            rect: Rect::new(bx.left, y0, bx.right(), y0 + config.item_height),
                        }
                    })
                    .collect();
                LaneLayout { index, top, items }
            })
            .collect();

        let content_height = lanes.len() as f64 * config.lane_height;
        Self {
            window: Some(window),
            pixels_per_day,
            content_width: window.content_width(pixels_per_day),
            content_height,
            total_height: content_height + config.axis_header_height,
            axis: compute_axis_marks(window.min(), window.max(), pixels_per_day),
            lanes,
        }
    }

    /// Iterates over every placed item, lane by lane.
    pub fn items(&self) -> impl Iterator<Item = &ItemLayout> {
        self.lanes.iter().flat_map(|lane| lane.items.iter())
    }

    /// The item under a content-space point, if any.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<ItemId> {
        self.items()
            .find(|item| item.rect.contains(point))
            .map(|item| item.id)
    }

    /// Placement of a specific item.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ItemLayout> {
        self.items().find(|item| item.id == id)
    }
}
