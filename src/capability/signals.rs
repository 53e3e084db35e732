// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Device and network capability signals
//!
//! Every signal is optional: an absent browser API (or, in the CLI, a
//! platform without the equivalent telemetry) reads as `None` and
//! contributes nothing to the score.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sysinfo::System;

use crate::error::BarkoError;

/// Narrow-viewport breakpoint in CSS pixels, matching the site's
/// mobile media query.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Terminal-width analog of the narrow-viewport media query.
const NARROW_TERMINAL_COLS: u16 = 90;

/// Coarse browser-reported network speed tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectiveConnectionType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
}

impl EffectiveConnectionType {
    /// Whether this tier counts as the slowest class for scoring.
    pub fn is_slow(&self) -> bool {
        matches!(self, Self::Slow2g | Self::TwoG)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slow2g => "slow-2g",
            Self::TwoG => "2g",
            Self::ThreeG => "3g",
            Self::FourG => "4g",
        }
    }
}

impl FromStr for EffectiveConnectionType {
    type Err = BarkoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow-2g" => Ok(Self::Slow2g),
            "2g" => Ok(Self::TwoG),
            "3g" => Ok(Self::ThreeG),
            "4g" => Ok(Self::FourG),
            other => Err(BarkoError::InvalidInput(format!(
                "unknown effective connection type: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for EffectiveConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of every capability signal the classifier consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapabilitySignals {
    /// Approximate device memory in GB
    pub device_memory_gb: Option<f64>,
    /// Logical core count
    pub cpu_cores: Option<usize>,
    /// Network save-data preference
    pub save_data: Option<bool>,
    /// Network effective connection tier
    pub effective_type: Option<EffectiveConnectionType>,
    /// Viewport-based mobile/desktop classification
    pub mobile: Option<bool>,
    /// Reduced-motion accessibility preference
    pub reduced_motion: Option<bool>,
}

impl CapabilitySignals {
    /// Classify a viewport width the way the site's media query does.
    pub fn mobile_from_width(width_px: u32) -> bool {
        width_px < MOBILE_BREAKPOINT_PX
    }
}

/// Source of live capability signals.
pub trait SignalProvider {
    fn signals(&self) -> CapabilitySignals;
}

/// Live signal gathering for the CLI.
///
/// Memory and cores come from the OS; network signals have no desktop
/// equivalent and stay absent unless set through the `BARKO_SAVE_DATA` /
/// `BARKO_EFFECTIVE_TYPE` environment variables. Reduced motion reads
/// `BARKO_REDUCED_MOTION`, and the narrow-viewport classification falls
/// back to terminal width.
#[derive(Debug, Default)]
pub struct SystemSignals;

impl SystemSignals {
    pub fn new() -> Self {
        Self
    }

    fn env_flag(name: &str) -> Option<bool> {
        match std::env::var(name) {
            Ok(value) => Some(matches!(value.trim(), "1" | "true" | "on")),
            Err(_) => None,
        }
    }
}

impl SignalProvider for SystemSignals {
    fn signals(&self) -> CapabilitySignals {
        let mut sys = System::new_all();
        sys.refresh_all();

        let ram_bytes = sys.total_memory();
        let device_memory_gb = if ram_bytes > 0 {
            Some(ram_bytes as f64 / (1024.0 * 1024.0 * 1024.0))
        } else {
            None
        };

        let cpu_cores = match sys.cpus().len() {
            0 => None,
            n => Some(n),
        };

        let effective_type = std::env::var("BARKO_EFFECTIVE_TYPE")
            .ok()
            .and_then(|raw| raw.parse().ok());

        let mobile = crossterm::terminal::size()
            .ok()
            .map(|(cols, _)| cols < NARROW_TERMINAL_COLS);

        CapabilitySignals {
            device_memory_gb,
            cpu_cores,
            save_data: Self::env_flag("BARKO_SAVE_DATA"),
            effective_type,
            mobile,
            reduced_motion: Self::env_flag("BARKO_REDUCED_MOTION"),
        }
    }
}
