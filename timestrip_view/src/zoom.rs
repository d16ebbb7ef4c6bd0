// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Zoom configuration for a [`crate::ZoomController`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomSettings {
    /// Smallest density, in pixels per day.
    pub min_zoom: f64,
    /// Largest density, in pixels per day.
    pub max_zoom: f64,
    /// Initial density; clamped into the limits.
    pub default_zoom: f64,
    /// Multiplier applied per zoom-in step and divisor per zoom-out step.
    pub factor: f64,
    /// Accumulated wheel delta magnitude that triggers one zoom step.
    pub wheel_snap_threshold: f64,
}

const DEFAULT_MIN_ZOOM: f64 = 30.0;
const DEFAULT_MAX_ZOOM: f64 = 200.0;

impl Default for ZoomSettings {
    fn default() -> Self {
        Self {
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            default_zoom: 200.0,
            factor: 1.2,
            wheel_snap_threshold: 30.0,
        }
    }
}

/// Direction of a discrete zoom step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZoomStep {
    /// Multiply the density by the zoom factor.
    In,
    /// Divide the density by the zoom factor.
    Out,
}

/// A zoom density kept inside `[min_zoom, max_zoom]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomState {
    pixels_per_day: f64,
    min_zoom: f64,
    max_zoom: f64,
}

impl ZoomState {
    /// Creates a zoom state, normalizing the limits so that `min_zoom <= max_zoom`.
    ///
    /// A non-finite limit falls back to the other one, or to the default limits
    /// when both are non-finite. A non-finite `initial` starts at `min_zoom`.
    #[must_use]
    pub fn new(min_zoom: f64, max_zoom: f64, initial: f64) -> Self {
        let (min_zoom, max_zoom) = match (min_zoom.is_finite(), max_zoom.is_finite()) {
            (true, true) => (min_zoom, max_zoom),
            (true, false) => (min_zoom, min_zoom),
            (false, true) => (max_zoom, max_zoom),
            (false, false) => (DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM),
        };
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        let initial = if initial.is_finite() { initial } else { min_zoom };
        Self {
            pixels_per_day: initial.clamp(min_zoom, max_zoom),
            min_zoom,
            max_zoom,
        }
    }

    /// Current density in pixels per day.
    #[must_use]
    pub fn pixels_per_day(&self) -> f64 {
        self.pixels_per_day
    }

    /// Lower zoom limit.
    #[must_use]
    pub fn min_zoom(&self) -> f64 {
        self.min_zoom
    }

    /// Upper zoom limit.
    #[must_use]
    pub fn max_zoom(&self) -> f64 {
        self.max_zoom
    }

    /// Sets the density, clamping it into the limits.
    ///
    /// Non-finite requests are ignored. Returns `true` if the density changed.
    pub fn set(&mut self, pixels_per_day: f64) -> bool {
        if !pixels_per_day.is_finite() {
            return false;
        }
        let clamped = pixels_per_day.clamp(self.min_zoom, self.max_zoom);
        if (self.pixels_per_day - clamped).abs() < f64::EPSILON {
            return false;
        }
        self.pixels_per_day = clamped;
        true
    }

    /// The density one `step` away from the current one, clamped into the limits.
    #[must_use]
    pub fn stepped(&self, step: ZoomStep, factor: f64) -> f64 {
        let target = match step {
            ZoomStep::In => self.pixels_per_day * factor,
            ZoomStep::Out => self.pixels_per_day / factor,
        };
        target.clamp(self.min_zoom, self.max_zoom)
    }

    /// `false` once the density has reached the upper limit.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.pixels_per_day < self.max_zoom
    }

    /// `false` once the density has reached the lower limit.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.pixels_per_day > self.min_zoom
    }
}
