// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Document-root presentation state
//!
//! The page applies every cross-cutting decision (lite mode, dark theme,
//! open burger menu) as a boolean class on the root element. `RootState`
//! models that class list with set semantics so repeated application of
//! the same decision cannot flicker the state.

use std::collections::BTreeSet;

/// Class stripping non-essential motion for low-end devices.
pub const LITE_CLASS: &str = "lite";

/// Class enabling the dark palette.
pub const DARK_CLASS: &str = "dark";

/// Class shown while the burger menu is open.
pub const MENU_OPEN_CLASS: &str = "menu-open";

/// Boolean class flags on the document root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    classes: BTreeSet<String>,
}

impl RootState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear a class. Returns whether the state changed.
    pub fn set_class(&mut self, name: &str, on: bool) -> bool {
        if on {
            self.classes.insert(name.to_string())
        } else {
            self.classes.remove(name)
        }
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    /// Current classes in stable order.
    pub fn class_list(&self) -> Vec<&str> {
        self.classes.iter().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_class_reports_change() {
        let mut root = RootState::new();
        assert!(root.set_class(LITE_CLASS, true));
        assert!(!root.set_class(LITE_CLASS, true));
        assert!(root.set_class(LITE_CLASS, false));
        assert!(!root.set_class(LITE_CLASS, false));
    }

    #[test]
    fn test_repeated_application_is_stable() {
        let mut root = RootState::new();
        for _ in 0..10 {
            root.set_class(DARK_CLASS, true);
        }
        assert_eq!(root.class_list(), vec![DARK_CLASS]);
    }

    #[test]
    fn test_class_list_is_ordered() {
        let mut root = RootState::new();
        root.set_class(MENU_OPEN_CLASS, true);
        root.set_class(DARK_CLASS, true);
        assert_eq!(root.class_list(), vec![DARK_CLASS, MENU_OPEN_CLASS]);
    }
}
