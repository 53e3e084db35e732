// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Dark/light theme preference
//!
//! Persisted indefinitely in the durable store, independent of the
//! capability decision.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BarkoError, Result};
use crate::store::{KeyValueStore, THEME_KEY};
use crate::view::{RootState, DARK_CLASS};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    #[default]
    Light,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Load the persisted preference. Absent or unrecognized values read
    /// as the light default.
    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        Ok(store
            .get(THEME_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default())
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(THEME_KEY, self.as_str())
    }

    /// Flip the persisted preference and return the new mode.
    pub fn toggle(store: &mut dyn KeyValueStore) -> Result<Self> {
        let next = Self::load(store)?.toggled();
        next.save(store)?;
        Ok(next)
    }

    /// Mirror the mode onto the root class state. Idempotent.
    pub fn sync(&self, root: &mut RootState) {
        root.set_class(DARK_CLASS, *self == Self::Dark);
    }
}

impl FromStr for ThemeMode {
    type Err = BarkoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(BarkoError::InvalidInput(format!("unknown theme: {other}"))),
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
