// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Language switcher
//!
//! Greek is the site default; the choice persists in the durable store
//! alongside the theme preference.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BarkoError, Result};
use crate::store::{KeyValueStore, LANGUAGE_KEY};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    El,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::El => "el",
            Self::En => "en",
        }
    }

    pub fn load(store: &dyn KeyValueStore) -> Result<Self> {
        Ok(store
            .get(LANGUAGE_KEY)?
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default())
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(LANGUAGE_KEY, self.as_str())
    }
}

impl FromStr for Language {
    type Err = BarkoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "el" | "gr" => Ok(Self::El),
            "en" => Ok(Self::En),
            other => Err(BarkoError::InvalidInput(format!(
                "unsupported language: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_default_is_greek() {
        let store = MemoryStore::new();
        assert_eq!(Language::load(&store).unwrap(), Language::El);
    }

    #[test]
    fn test_switch_persists() {
        let mut store = MemoryStore::new();
        Language::En.save(&mut store).unwrap();
        assert_eq!(Language::load(&store).unwrap(), Language::En);
    }

    #[test]
    fn test_legacy_gr_code_parses() {
        assert_eq!("gr".parse::<Language>().unwrap(), Language::El);
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!("fr".parse::<Language>().is_err());
    }
}
