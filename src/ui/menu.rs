// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Mobile burger menu

use crate::view::{RootState, MENU_OPEN_CLASS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BurgerMenu {
    open: bool,
}

impl BurgerMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Burger button tap.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Navigation link tap closes the menu before scrolling.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Mirror the open state onto the root class. Idempotent.
    pub fn sync(&self, root: &mut RootState) {
        root.set_class(MENU_OPEN_CLASS, self.open);
    }
}
