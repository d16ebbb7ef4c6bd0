// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan state.
//!
//! 1) Start a pan with [`PanDrag::start`], giving the pointer X and the scroll
//!    offset at that moment.
//! 2) On each move, [`PanDrag::offset_for`] returns the scroll offset that keeps
//!    the content under the pointer.
//! 3) End with [`PanDrag::end`].

/// Pointer buttons, as far as panning is concerned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left button.
    Primary,
    /// The wheel button. The only button that starts a pan.
    Middle,
    /// Usually the right button.
    Secondary,
    /// Any other button, by platform index.
    Other(u8),
}

/// Tracks one drag-to-pan session.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PanDrag {
    /// Pointer X where the drag started.
    pub anchor_x: Option<f64>,
    /// Scroll offset when the drag started.
    pub start_offset: f64,
}

impl PanDrag {
    /// Starts tracking a pan from pointer position `x`.
    pub fn start(&mut self, x: f64, scroll_offset: f64) {
        self.anchor_x = Some(x);
        self.start_offset = scroll_offset;
    }

    /// Scroll offset for pointer position `x`, or `None` when not dragging.
    ///
    /// Moving the pointer right scrolls the content back towards the start.
    #[must_use]
    pub fn offset_for(&self, x: f64) -> Option<f64> {
        self.anchor_x.map(|anchor| self.start_offset - (x - anchor))
    }

    /// Ends the session and clears its state.
    pub fn end(&mut self) {
        self.anchor_x = None;
        self.start_offset = 0.0;
    }

    /// Returns `true` while a pan is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor_x.is_some()
    }
}
