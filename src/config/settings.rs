// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Settings management for Barko
//!
//! Handles loading and saving settings from ~/.barko/settings.json

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::capability::{ProbeConfig, ScoreConfig};
use crate::error::Result;
use crate::store::barko_home;

/// Main settings structure, stored in ~/.barko/settings.json
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Capability score weights and bands
    #[serde(default)]
    pub score: ScoreConfig,

    /// Frame probe thresholds
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl Settings {
    /// Get the default settings file path.
    pub fn default_path() -> PathBuf {
        barko_home().join("settings.json")
    }

    /// Load settings from the default path.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load settings from a specific path. A missing file yields the
    /// built-in defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
