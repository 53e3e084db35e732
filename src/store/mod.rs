// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Injected key-value storage
//!
//! The browser's local/session storage slots become an explicit store
//! interface so the classifier and theme toggle can be tested without a
//! real browser storage object. `MemoryStore` backs tests and per-run
//! session semantics; `FileStore` persists under the barko home for the
//! CLI.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use crate::error::Result;

/// Session-scoped slot holding the low-end decision: `"1"` or `"0"`,
/// absent means not yet decided this session.
pub const LOW_END_KEY: &str = "barko_low_end";

/// Durable slot holding the theme preference: `"dark"` or `"light"`.
pub const THEME_KEY: &str = "barko_theme";

/// Durable slot holding the UI language: `"el"` or `"en"`.
pub const LANGUAGE_KEY: &str = "barko_lang";

/// Typed get/set over string slots.
pub trait KeyValueStore {
    /// Read a slot; `None` when the slot was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Drop a single slot. Removing an absent slot is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;

    /// Drop every slot.
    fn clear(&mut self) -> Result<()>;
}

/// Get the barko home directory (~/.barko or $BARKO_HOME).
pub fn barko_home() -> PathBuf {
    if let Ok(home) = std::env::var("BARKO_HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".barko")
}

/// Path of the session-scoped store file.
///
/// The browser clears session storage when the tab closes; the CLI analog
/// is `barko clear` wiping this file.
pub fn session_store_path() -> PathBuf {
    barko_home().join("session.json")
}

/// Path of the durable preference store file.
pub fn prefs_store_path() -> PathBuf {
    barko_home().join("prefs.json")
}
