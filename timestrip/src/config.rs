// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use timestrip_view::ZoomSettings;

use crate::ConfigError;

/// Layout and interaction constants of a timeline.
///
/// All lengths are in pixels; zoom values are pixels per day. With the `serde`
/// feature, missing fields fall back to their defaults.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TimelineConfig {
    /// Smallest zoom density.
    pub zoom_min: f64,
    /// Largest zoom density.
    pub zoom_max: f64,
    /// Density at startup.
    pub zoom_default: f64,
    /// Per-step zoom multiplier.
    pub zoom_factor: f64,
    /// Wheel delta needed for one zoom step.
    pub wheel_snap_threshold: f64,
    /// Height of one lane.
    pub lane_height: f64,
    /// Height of an item box, centered in its lane.
    pub item_height: f64,
    /// Narrowest an item box is ever drawn.
    pub min_item_width: f64,
    /// Height of the month/day header band above the lanes.
    pub axis_header_height: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            zoom_min: 30.0,
            zoom_max: 200.0,
            zoom_default: 200.0,
            zoom_factor: 1.2,
            wheel_snap_threshold: 30.0,
            lane_height: 90.0,
            item_height: 60.0,
            min_item_width: 20.0,
            axis_header_height: 80.0,
        }
    }
}

impl TimelineConfig {
    /// Checks that the values describe a usable timeline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.zoom_min) || !positive(self.zoom_max) || self.zoom_min > self.zoom_max {
            return Err(ConfigError::ZoomLimits {
                min: self.zoom_min,
                max: self.zoom_max,
            });
        }
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 1.0) {
            return Err(ConfigError::ZoomFactor(self.zoom_factor));
        }
        if !positive(self.wheel_snap_threshold) {
            return Err(ConfigError::WheelThreshold(self.wheel_snap_threshold));
        }
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        if !positive(self.lane_height) {
            return Err(ConfigError::LaneHeight(self.lane_height));
        }
        if !non_negative(self.item_height) {
            return Err(ConfigError::ItemHeight(self.item_height));
        }
        if self.item_height > self.lane_height {
            return Err(ConfigError::ItemTallerThanLane {
                item: self.item_height,
                lane: self.lane_height,
            });
        }
        if !non_negative(self.axis_header_height) {
            return Err(ConfigError::AxisHeaderHeight(self.axis_header_height));
        }
        if !non_negative(self.min_item_width) {
            return Err(ConfigError::MinItemWidth(self.min_item_width));
        }
        Ok(())
    }

    /// Zoom settings for the view controller.
    #[must_use]
    pub fn zoom_settings(&self) -> ZoomSettings {
        ZoomSettings {
            min_zoom: self.zoom_min,
            max_zoom: self.zoom_max,
            default_zoom: self.zoom_default,
            factor: self.zoom_factor,
            wheel_snap_threshold: self.wheel_snap_threshold,
        }
    }

    /// Gap between a lane's top edge and its items' top edges.
    #[must_use]
    pub fn item_vertical_offset(&self) -> f64 {
        (self.lane_height - self.item_height) / 2.0
    }
}
