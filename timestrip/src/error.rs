// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use chrono::NaiveDate;

use crate::ItemId;

/// Which date of an item failed to parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DateField {
    /// The start date.
    Start,
    /// The end date.
    End,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
        })
    }
}

/// Errors raised while building a timeline.
///
/// Every variant is fatal to ingestion: a malformed item is never rendered as a
/// broken box.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TimelineError {
    /// A date string was not an ISO `YYYY-MM-DD` calendar date.
    #[error("item {id}: {field} date {value:?} is not a YYYY-MM-DD calendar date")]
    InvalidDate {
        /// Offending item.
        id: ItemId,
        /// Which of its dates.
        field: DateField,
        /// The rejected input.
        value: String,
    },
    /// The end date precedes the start date.
    #[error("item {id}: end date {end} precedes start date {start}")]
    InvalidDateRange {
        /// Offending item.
        id: ItemId,
        /// Its start date.
        start: NaiveDate,
        /// Its end date.
        end: NaiveDate,
    },
    /// Two items share an id.
    #[error("duplicate item id {0}")]
    DuplicateId(ItemId),
    /// The configuration is unusable.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigError),
}

/// Problems found by [`crate::TimelineConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Zoom limits must be finite, positive and ordered.
    #[error("zoom limits must be positive with min <= max, got {min}..={max}")]
    ZoomLimits {
        /// Configured lower limit.
        min: f64,
        /// Configured upper limit.
        max: f64,
    },
    /// The zoom factor must be greater than one.
    #[error("zoom factor must be greater than 1, got {0}")]
    ZoomFactor(f64),
    /// The wheel snap threshold must be positive.
    #[error("wheel snap threshold must be positive, got {0}")]
    WheelThreshold(f64),
    /// The lane height must be finite and positive.
    #[error("lane height must be positive, got {0}")]
    LaneHeight(f64),
    /// The item height must be finite and non-negative.
    #[error("item height must be non-negative, got {0}")]
    ItemHeight(f64),
    /// The axis header height must be finite and non-negative.
    #[error("axis header height must be non-negative, got {0}")]
    AxisHeaderHeight(f64),
    /// Items must fit inside their lane.
    #[error("item height {item} exceeds lane height {lane}")]
    ItemTallerThanLane {
        /// Configured item height.
        item: f64,
        /// Configured lane height.
        lane: f64,
    },
    /// The minimum item width must be finite and non-negative.
    #[error("minimum item width must be finite and non-negative, got {0}")]
    MinItemWidth(f64),
}
