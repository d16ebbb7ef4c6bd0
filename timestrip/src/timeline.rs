// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use timestrip_lanes::Lane;
use timestrip_scale::DateWindow;
use timestrip_view::{PendingRestore, PointerButton, RestoreOutcome, ZoomController};
use tracing::debug;

use crate::item::ensure_unique_ids;
use crate::layout::compute_lanes;
use crate::{
    Item, ItemDetail, ItemId, Key, Overlay, RawItem, TimelineConfig, TimelineError,
    TimelineLayout, ingest,
};

/// Discrete input delivered to [`Timeline::handle`].
///
/// Pointer positions are in viewport coordinates except for
/// [`TimelineEvent::Click`], which is hit tested in content coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TimelineEvent {
    /// Mouse wheel; negative is up.
    Wheel {
        /// Vertical wheel delta.
        delta_y: f64,
    },
    /// A pointer button went down over the surface.
    PointerDown {
        /// Which button.
        button: PointerButton,
        /// Pointer position.
        position: Point,
    },
    /// The pointer moved.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// A pointer button was released.
    PointerUp,
    /// The pointer left the surface.
    PointerLeave,
    /// A primary click on the lane area.
    Click {
        /// Click position in content coordinates.
        position: Point,
    },
    /// A key press.
    Key(Key),
    /// A click outside an open overlay's content.
    BackdropClick,
    /// The zoom-in button.
    ZoomIn,
    /// The zoom-out button.
    ZoomOut,
    /// The zoom reset button.
    ResetZoom,
    /// The help button.
    ToggleHelp,
    /// Native scrolling moved the surface.
    Scroll {
        /// New scroll offset.
        offset: f64,
    },
    /// The surface was torn down.
    SurfaceDetached,
}

/// An interactive timeline over a fixed item list.
///
/// Owns the packed lanes, the zoom/pan controller and the overlay state. The
/// host renders [`Timeline::layout`], reports it back with
/// [`Timeline::commit_layout`], and completes zooms with
/// [`Timeline::commit_restore`].
#[derive(Clone, Debug)]
pub struct Timeline {
    config: TimelineConfig,
    lanes: Vec<Lane<Item>>,
    window: Option<DateWindow>,
    controller: ZoomController,
    overlay: Overlay,
}

impl Timeline {
    /// Builds a timeline from validated items.
    pub fn new(items: Vec<Item>, config: TimelineConfig) -> Result<Self, TimelineError> {
        config.validate()?;
        ensure_unique_ids(&items)?;
        let window =
            DateWindow::from_dates(items.iter().flat_map(|item| [item.start(), item.end()]));
        let lanes = compute_lanes(items);
        debug!(lanes = lanes.len(), ?window, "timeline built");
        Ok(Self {
            controller: ZoomController::new(config.zoom_settings()),
            config,
            lanes,
            window,
            overlay: Overlay::default(),
        })
    }

    /// Builds a timeline from raw items, failing on the first malformed one.
    pub fn from_raw(
        raw: impl IntoIterator<Item = RawItem>,
        config: TimelineConfig,
    ) -> Result<Self, TimelineError> {
        Self::new(ingest(raw)?, config)
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    /// Packed lanes, top to bottom.
    #[must_use]
    pub fn lanes(&self) -> &[Lane<Item>] {
        &self.lanes
    }

    /// Reference window, `None` when there are no items.
    #[must_use]
    pub fn window(&self) -> Option<DateWindow> {
        self.window
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.lanes
            .iter()
            .flat_map(|lane| lane.iter())
            .find(|item| item.id() == id)
    }

    /// The zoom/pan controller.
    #[must_use]
    pub fn controller(&self) -> &ZoomController {
        &self.controller
    }

    /// Mutable access to the zoom/pan controller.
    pub fn controller_mut(&mut self) -> &mut ZoomController {
        &mut self.controller
    }

    /// Overlay state.
    #[must_use]
    pub fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Mutable overlay state.
    pub fn overlay_mut(&mut self) -> &mut Overlay {
        &mut self.overlay
    }

    /// Geometry at the current zoom density.
    #[must_use]
    pub fn layout(&self) -> TimelineLayout {
        TimelineLayout::compute(
            &self.lanes,
            self.window,
            self.controller.pixels_per_day(),
            &self.config,
        )
    }

    /// Records that `layout` is now on screen in a viewport `viewport_width` wide.
    ///
    /// A layout computed at a different density than the current one is stale
    /// and ignored. Returns `true` if the geometry was committed.
    pub fn commit_layout(&mut self, layout: &TimelineLayout, viewport_width: f64) -> bool {
        let current = self.controller.pixels_per_day();
        if layout.pixels_per_day != current {
            debug!(layout = layout.pixels_per_day, current, "ignoring stale layout");
            return false;
        }
        self.controller.commit_layout(layout.content_width, viewport_width);
        true
    }

    /// Completes a zoom once its layout has been committed.
    pub fn commit_restore(&mut self, token: PendingRestore) -> RestoreOutcome {
        self.controller.commit_restore(token)
    }

    /// Dispatches one input event.
    ///
    /// Returns a token when the event changed the zoom; the host must lay out,
    /// commit, and then hand the token to [`Timeline::commit_restore`].
    pub fn handle(&mut self, event: TimelineEvent) -> Option<PendingRestore> {
        match event {
            TimelineEvent::Wheel { delta_y } => return self.controller.on_wheel(delta_y),
            TimelineEvent::ZoomIn => return self.controller.zoom_in(),
            TimelineEvent::ZoomOut => return self.controller.zoom_out(),
            TimelineEvent::ResetZoom => return Some(self.controller.reset_zoom()),
            TimelineEvent::PointerDown { button, position } => {
                self.controller.begin_pan(button, position.x);
            }
            TimelineEvent::PointerMove { position } => {
                self.controller.update_pan(position.x);
            }
            TimelineEvent::PointerUp | TimelineEvent::PointerLeave => self.controller.end_pan(),
            // Clicks are ignored while a pan is in progress.
            TimelineEvent::Click { .. } if self.controller.is_panning() => {}
            TimelineEvent::Click { position } => {
                if let Some(id) = self.layout().hit_test(position) {
                    debug!(%id, "item selected");
                    self.overlay.open_detail(id);
                }
            }
            TimelineEvent::Key(key) => {
                self.overlay.on_key(key);
            }
            TimelineEvent::BackdropClick => {
                self.overlay.dismiss();
            }
            TimelineEvent::ToggleHelp => self.overlay.toggle_help(),
            TimelineEvent::Scroll { offset } => {
                self.controller.set_scroll_offset(offset);
            }
            TimelineEvent::SurfaceDetached => self.controller.detach_surface(),
        }
        None
    }

    /// Detail text for the item whose popup is open.
    #[must_use]
    pub fn selected_detail(&self) -> Option<ItemDetail> {
        self.overlay
            .selected()
            .and_then(|id| self.item(id))
            .map(ItemDetail::new)
    }

    /// Zoom indicator text, e.g. `167px/day`.
    #[must_use]
    pub fn zoom_label(&self) -> String {
        format!("{}px/day", self.controller.pixels_per_day().round())
    }
}
