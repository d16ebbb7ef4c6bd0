// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal scroll position of the timeline surface.
///
/// The offset is kept inside `[0, content_width - viewport_width]`, or at zero
/// when the content fits in the viewport.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset: f64,
    content_width: f64,
    viewport_width: f64,
}

impl ScrollState {
    /// Creates a scroll state at offset zero with the given geometry.
    #[must_use]
    pub fn new(content_width: f64, viewport_width: f64) -> Self {
        let mut scroll = Self::default();
        scroll.set_geometry(content_width, viewport_width);
        scroll
    }

    /// Current scroll offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Width of the scrollable content.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.content_width
    }

    /// Width of the visible viewport.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Largest valid offset.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Scroll position as a fraction of the scrollable range.
    ///
    /// The divisor is floored at one pixel so a non-scrollable surface yields `0.0`.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.offset / (self.content_width - self.viewport_width).max(1.0)
    }

    /// Offset that corresponds to `ratio` under the current geometry.
    #[must_use]
    pub fn offset_for_ratio(&self, ratio: f64) -> f64 {
        ratio * self.max_offset()
    }

    /// Updates the geometry and re-clamps the offset into the new range.
    pub fn set_geometry(&mut self, content_width: f64, viewport_width: f64) {
        self.content_width = sanitize(content_width);
        self.viewport_width = sanitize(viewport_width);
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }

    /// Scrolls to `offset`, clamped into range, and returns the applied offset.
    ///
    /// A non-finite request leaves the offset unchanged.
    pub fn set_offset(&mut self, offset: f64) -> f64 {
        if offset.is_finite() {
            self.offset = offset.clamp(0.0, self.max_offset());
        }
        self.offset
    }
}

fn sanitize(width: f64) -> f64 {
    if width.is_finite() { width.max(0.0) } else { 0.0 }
}
