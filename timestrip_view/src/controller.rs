// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tracing::{debug, trace};

use crate::{
    PanDrag, PointerButton, ScrollState, WheelAccumulator, ZoomSettings, ZoomState, ZoomStep,
};

/// Token for a scroll restore that must wait for the next layout.
///
/// Returned by every zoom operation of [`ZoomController`]. Hand it back to
/// [`ZoomController::commit_restore`] once layout has been committed for the
/// new density.
#[derive(Copy, Clone, Debug, PartialEq)]
#[must_use = "a zoom without a committed restore loses the scroll position"]
pub struct PendingRestore {
    generation: u64,
    ratio: f64,
}

impl PendingRestore {
    /// Scroll ratio captured before the zoom was applied.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }
}

/// What [`ZoomController::commit_restore`] did with a token.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RestoreOutcome {
    /// The scroll offset was restored.
    Applied {
        /// Offset written to the scroll state.
        offset: f64,
    },
    /// A later zoom replaced this one; its own token will restore instead.
    Superseded,
    /// No layout has been committed for this zoom yet, so the content width is stale.
    LayoutPending,
    /// The surface went away before the restore could run.
    Detached,
}

/// Zoom and pan controller for one timeline surface.
///
/// Owns the zoom density, wheel accumulation, scroll offset and drag state.
/// The composing layer owns the controller and forwards input events to it.
#[derive(Clone, Debug)]
pub struct ZoomController {
    zoom: ZoomState,
    factor: f64,
    wheel: WheelAccumulator,
    scroll: ScrollState,
    pan: PanDrag,
    attached: bool,
    generation: u64,
    layout_generation: Option<u64>,
}

impl ZoomController {
    /// Creates a controller at the configured default density.
    ///
    /// The surface counts as detached until the first [`ZoomController::commit_layout`].
    #[must_use]
    pub fn new(settings: ZoomSettings) -> Self {
        Self {
            zoom: ZoomState::new(
                settings.min_zoom,
                settings.max_zoom,
                settings.default_zoom,
            ),
            factor: settings.factor,
            wheel: WheelAccumulator::new(settings.wheel_snap_threshold),
            scroll: ScrollState::default(),
            pan: PanDrag::default(),
            attached: false,
            generation: 0,
            layout_generation: None,
        }
    }

    /// Current density in pixels per day.
    #[must_use]
    pub fn pixels_per_day(&self) -> f64 {
        self.zoom.pixels_per_day()
    }

    /// The clamped zoom state.
    #[must_use]
    pub fn zoom_state(&self) -> &ZoomState {
        &self.zoom
    }

    /// The scroll state as of the last layout or scroll.
    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll_offset(&self) -> f64 {
        self.scroll.offset()
    }

    /// Whether the zoom-in control is active.
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.zoom.can_zoom_in()
    }

    /// Whether the zoom-out control is active.
    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        self.zoom.can_zoom_out()
    }

    /// Applies a new density, clamped, and captures the scroll ratio to restore.
    pub fn apply_zoom(&mut self, pixels_per_day: f64) -> PendingRestore {
        let ratio = self.scroll.ratio();
        let before = self.zoom.pixels_per_day();
        let changed = self.zoom.set(pixels_per_day);
        self.generation += 1;
        debug!(
            requested = pixels_per_day,
            before,
            after = self.zoom.pixels_per_day(),
            changed,
            ratio,
            generation = self.generation,
            "zoom applied"
        );
        PendingRestore {
            generation: self.generation,
            ratio,
        }
    }

    /// Zooms in one step. `None` when already at the upper limit.
    pub fn zoom_in(&mut self) -> Option<PendingRestore> {
        if !self.can_zoom_in() {
            return None;
        }
        Some(self.step(ZoomStep::In))
    }

    /// Zooms out one step. `None` when already at the lower limit.
    pub fn zoom_out(&mut self) -> Option<PendingRestore> {
        if !self.can_zoom_out() {
            return None;
        }
        Some(self.step(ZoomStep::Out))
    }

    /// Resets the density to the lower limit.
    pub fn reset_zoom(&mut self) -> PendingRestore {
        self.apply_zoom(self.zoom.min_zoom())
    }

    /// Feeds a wheel delta; zooms once per accumulated threshold.
    pub fn on_wheel(&mut self, delta_y: f64) -> Option<PendingRestore> {
        let step = self.wheel.feed(delta_y);
        trace!(delta_y, pending = self.wheel.pending(), ?step, "wheel");
        step.map(|step| self.step(step))
    }

    fn step(&mut self, step: ZoomStep) -> PendingRestore {
        let target = self.zoom.stepped(step, self.factor);
        self.apply_zoom(target)
    }

    /// Reports the geometry produced by the latest layout.
    ///
    /// Marks the surface as attached and the current zoom as laid out.
    pub fn commit_layout(&mut self, content_width: f64, viewport_width: f64) {
        self.scroll.set_geometry(content_width, viewport_width);
        self.attached = true;
        self.layout_generation = Some(self.generation);
    }

    /// Marks the surface as gone. Pending restores will cancel.
    pub fn detach_surface(&mut self) {
        self.attached = false;
        self.pan.end();
    }

    /// Whether a surface has reported layout and not been detached since.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Restores the scroll ratio captured by `token` under the committed geometry.
    pub fn commit_restore(&mut self, token: PendingRestore) -> RestoreOutcome {
        let outcome = if !self.attached {
            RestoreOutcome::Detached
        } else if token.generation != self.generation {
            RestoreOutcome::Superseded
        } else if self.layout_generation != Some(token.generation) {
            RestoreOutcome::LayoutPending
        } else {
            let offset = self.scroll.set_offset(self.scroll.offset_for_ratio(token.ratio));
            RestoreOutcome::Applied { offset }
        };
        debug!(generation = token.generation, ?outcome, "scroll restore");
        outcome
    }

    /// Scrolls directly, e.g. from a scrollbar. Returns the clamped offset.
    pub fn set_scroll_offset(&mut self, offset: f64) -> f64 {
        self.scroll.set_offset(offset)
    }

    /// Starts a pan at pointer X `x`.
    ///
    /// Only the middle button pans. A second begin while a pan is active is
    /// ignored. Returns `true` if a pan started.
    pub fn begin_pan(&mut self, button: PointerButton, x: f64) -> bool {
        if button != PointerButton::Middle || self.pan.is_dragging() || !x.is_finite() {
            return false;
        }
        self.pan.start(x, self.scroll.offset());
        debug!(x, start_offset = self.scroll.offset(), "pan started");
        true
    }

    /// Moves an active pan to pointer X `x` and returns the new scroll offset.
    pub fn update_pan(&mut self, x: f64) -> Option<f64> {
        let target = self.pan.offset_for(x)?;
        Some(self.scroll.set_offset(target))
    }

    /// Ends the active pan, if any. Also used when the pointer leaves the surface.
    pub fn end_pan(&mut self) {
        if self.pan.is_dragging() {
            debug!(offset = self.scroll.offset(), "pan ended");
        }
        self.pan.end();
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_dragging()
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomControllerDebugInfo {
        ZoomControllerDebugInfo {
            pixels_per_day: self.zoom.pixels_per_day(),
            min_zoom: self.zoom.min_zoom(),
            max_zoom: self.zoom.max_zoom(),
            factor: self.factor,
            wheel_pending: self.wheel.pending(),
            scroll_offset: self.scroll.offset(),
            content_width: self.scroll.content_width(),
            viewport_width: self.scroll.viewport_width(),
            panning: self.pan.is_dragging(),
            attached: self.attached,
            generation: self.generation,
        }
    }
}

/// Debug snapshot of a [`ZoomController`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ZoomControllerDebugInfo {
    /// Current density.
    pub pixels_per_day: f64,
    /// Lower zoom limit.
    pub min_zoom: f64,
    /// Upper zoom limit.
    pub max_zoom: f64,
    /// Step factor.
    pub factor: f64,
    /// Wheel delta not yet turned into a step.
    pub wheel_pending: f64,
    /// Current scroll offset.
    pub scroll_offset: f64,
    /// Last committed content width.
    pub content_width: f64,
    /// Last committed viewport width.
    pub viewport_width: f64,
    /// Whether a pan is active.
    pub panning: bool,
    /// Whether the surface is attached.
    pub attached: bool,
    /// Number of zoom applications so far.
    pub generation: u64,
}
