// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Dynamic header: compact "scrolled" style past a small scroll offset.

/// Scroll offset in pixels past which the header collapses.
pub const SCROLL_THRESHOLD_PX: u32 = 50;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    pub scrolled: bool,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current scroll offset. Returns whether the visual state
    /// changed, so callers only touch the DOM on transitions.
    pub fn on_scroll(&mut self, scroll_y: u32) -> bool {
        let scrolled = scroll_y > SCROLL_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}
