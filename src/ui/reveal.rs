// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Reveal-on-scroll for sections and menu items
//!
//! An element becomes visible once enough of it intersects the viewport
//! and is then dropped from observation, so the reveal plays exactly
//! once.

use std::collections::BTreeSet;

/// Fraction of an element that must be visible before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.15;

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    observed: BTreeSet<String>,
    revealed: BTreeSet<String>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing an element. Re-observing a revealed element does
    /// not replay its animation.
    pub fn observe(&mut self, element: &str) {
        if !self.revealed.contains(element) {
            self.observed.insert(element.to_string());
        }
    }

    /// Feed an intersection callback. Returns true when this call
    /// reveals the element (at most once per element).
    pub fn on_intersection(&mut self, element: &str, ratio: f64) -> bool {
        if ratio < REVEAL_THRESHOLD || !self.observed.remove(element) {
            return false;
        }
        self.revealed.insert(element.to_string());
        true
    }

    pub fn is_revealed(&self, element: &str) -> bool {
        self.revealed.contains(element)
    }

    /// Elements still waiting on their reveal.
    pub fn pending(&self) -> usize {
        self.observed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_at_threshold() {
        let mut tracker = RevealTracker::new();
        tracker.observe("section-menu");
        assert!(!tracker.on_intersection("section-menu", 0.10));
        assert!(tracker.on_intersection("section-menu", 0.15));
        assert!(tracker.is_revealed("section-menu"));
    }

    #[test]
    fn test_reveals_only_once() {
        let mut tracker = RevealTracker::new();
        tracker.observe("dish-moussaka");
        assert!(tracker.on_intersection("dish-moussaka", 0.9));
        assert!(!tracker.on_intersection("dish-moussaka", 0.9));
    }

    #[test]
    fn test_unobserved_element_never_reveals() {
        let mut tracker = RevealTracker::new();
        assert!(!tracker.on_intersection("footer", 1.0));
        assert!(!tracker.is_revealed("footer"));
    }

    #[test]
    fn test_reobserving_revealed_element_is_inert() {
        let mut tracker = RevealTracker::new();
        tracker.observe("section-story");
        tracker.on_intersection("section-story", 0.5);
        tracker.observe("section-story");
        assert_eq!(tracker.pending(), 0);
        assert!(!tracker.on_intersection("section-story", 0.5));
    }

    #[test]
    fn test_pending_count() {
        let mut tracker = RevealTracker::new();
        tracker.observe("a");
        tracker.observe("b");
        assert_eq!(tracker.pending(), 2);
        tracker.on_intersection("a", 0.2);
        assert_eq!(tracker.pending(), 1);
    }
}
