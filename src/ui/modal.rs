// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Dish-image modal
//!
//! At most one dish is open at a time; opening another replaces it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    pub title: String,
    pub image_src: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DishModal {
    current: Option<Dish>,
}

impl DishModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, dish: Dish) {
        self.current = Some(dish);
    }

    /// Close on backdrop tap, close button, or Escape.
    pub fn close(&mut self) {
        self.current = None;
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Dish> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dish(title: &str) -> Dish {
        Dish {
            title: title.to_string(),
            image_src: format!("img/{title}.webp"),
        }
    }

    #[test]
    fn test_starts_closed() {
        assert!(!DishModal::new().is_open());
    }

    #[test]
    fn test_open_replaces_current() {
        let mut modal = DishModal::new();
        modal.open(dish("moussaka"));
        modal.open(dish("souvlaki"));
        assert_eq!(modal.current().unwrap().title, "souvlaki");
    }

    #[test]
    fn test_close_clears() {
        let mut modal = DishModal::new();
        modal.open(dish("saganaki"));
        modal.close();
        modal.close();
        assert!(!modal.is_open());
        assert_eq!(modal.current(), None);
    }
}
