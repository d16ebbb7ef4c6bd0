// Copyright 2025 the Timestrip Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::ItemId;

/// Keys the timeline reacts to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// Dismisses the top-most overlay.
    Escape,
    /// Anything else; ignored.
    Other,
}

/// Modal overlays stacked over the timeline: the item detail popup and the help panel.
///
/// The detail popup sits above the help panel, so it is dismissed first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
    selected: Option<ItemId>,
    help_open: bool,
}

impl Overlay {
    /// Item whose detail popup is open.
    #[must_use]
    pub fn selected(&self) -> Option<ItemId> {
        self.selected
    }

    /// Whether the help panel is open.
    #[must_use]
    pub fn is_help_open(&self) -> bool {
        self.help_open
    }

    /// Whether any overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected.is_some() || self.help_open
    }

    /// Opens the detail popup for `id`, replacing any previous selection.
    pub fn open_detail(&mut self, id: ItemId) {
        self.selected = Some(id);
    }

    /// Closes the detail popup.
    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Opens the help panel.
    pub fn open_help(&mut self) {
        self.help_open = true;
    }

    /// Closes the help panel.
    pub fn close_help(&mut self) {
        self.help_open = false;
    }

    /// Toggles the help panel.
    pub fn toggle_help(&mut self) {
        self.help_open = !self.help_open;
    }

    /// Closes the top-most overlay. Returns `false` if nothing was open.
    pub fn dismiss(&mut self) -> bool {
        if self.selected.take().is_some() {
            return true;
        }
        core::mem::replace(&mut self.help_open, false)
    }

    /// Handles a key press; Escape dismisses. Returns `true` if consumed.
    pub fn on_key(&mut self, key: Key) -> bool {
        match key {
            Key::Escape => self.dismiss(),
            Key::Other => false,
        }
    }
}
