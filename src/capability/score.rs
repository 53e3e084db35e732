// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Weighted capability score
//!
//! The score leans conservative: it takes several weak signals, or one
//! strong one plus a weak one, to push a device into the low-end band,
//! and an uncertain middle band defers to the frame probe.

use serde::{Deserialize, Serialize};

use super::signals::CapabilitySignals;

/// Weights and cutoffs for the capability score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Points when the save-data preference is active
    #[serde(default = "default_save_data_weight")]
    pub save_data_weight: u32,
    /// Points when the connection is in the slowest tier
    #[serde(default = "default_slow_connection_weight")]
    pub slow_connection_weight: u32,
    /// Memory below this many GB scores `very_low_memory_weight`
    #[serde(default = "default_memory_floor_gb")]
    pub memory_floor_gb: f64,
    #[serde(default = "default_very_low_memory_weight")]
    pub very_low_memory_weight: u32,
    /// Memory at or below this many GB scores `low_memory_weight`
    #[serde(default = "default_memory_low_gb")]
    pub memory_low_gb: f64,
    #[serde(default = "default_low_memory_weight")]
    pub low_memory_weight: u32,
    /// Core count at or below this scores `few_cores_weight`
    #[serde(default = "default_cores_floor")]
    pub cores_floor: usize,
    #[serde(default = "default_few_cores_weight")]
    pub few_cores_weight: u32,
    /// Core count at or below this scores `some_cores_weight`
    #[serde(default = "default_cores_low")]
    pub cores_low: usize,
    #[serde(default = "default_some_cores_weight")]
    pub some_cores_weight: u32,
    #[serde(default = "default_reduced_motion_weight")]
    pub reduced_motion_weight: u32,
    /// Mobile viewport only counts alongside another positive signal
    #[serde(default = "default_mobile_weight")]
    pub mobile_weight: u32,
    /// Scores at or above this are low-end without probing
    #[serde(default = "default_low_end_min")]
    pub low_end_min: u32,
    /// Scores at or below this are capable without probing
    #[serde(default = "default_capable_max")]
    pub capable_max: u32,
}

fn default_save_data_weight() -> u32 {
    3
}
fn default_slow_connection_weight() -> u32 {
    3
}
fn default_memory_floor_gb() -> f64 {
    1.0
}
fn default_very_low_memory_weight() -> u32 {
    2
}
fn default_memory_low_gb() -> f64 {
    4.0
}
fn default_low_memory_weight() -> u32 {
    1
}
fn default_cores_floor() -> usize {
    2
}
fn default_few_cores_weight() -> u32 {
    3
}
fn default_cores_low() -> usize {
    4
}
fn default_some_cores_weight() -> u32 {
    1
}
fn default_reduced_motion_weight() -> u32 {
    1
}
fn default_mobile_weight() -> u32 {
    1
}
fn default_low_end_min() -> u32 {
    4
}
fn default_capable_max() -> u32 {
    1
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            save_data_weight: default_save_data_weight(),
            slow_connection_weight: default_slow_connection_weight(),
            memory_floor_gb: default_memory_floor_gb(),
            very_low_memory_weight: default_very_low_memory_weight(),
            memory_low_gb: default_memory_low_gb(),
            low_memory_weight: default_low_memory_weight(),
            cores_floor: default_cores_floor(),
            few_cores_weight: default_few_cores_weight(),
            cores_low: default_cores_low(),
            some_cores_weight: default_some_cores_weight(),
            reduced_motion_weight: default_reduced_motion_weight(),
            mobile_weight: default_mobile_weight(),
            low_end_min: default_low_end_min(),
            capable_max: default_capable_max(),
        }
    }
}

/// Which branch of the decision chain a score selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// At or above `low_end_min`: low-end, no probe
    LowEnd,
    /// At or below `capable_max`: capable, no probe
    Capable,
    /// In between: defer to the frame probe
    Uncertain,
}

impl ScoreConfig {
    /// Compute the weighted score for a signal snapshot.
    ///
    /// Absent signals contribute zero. The mobile point is conditional:
    /// it only lands when some other signal already scored, so a capable
    /// phone is not penalized for its screen size alone.
    pub fn score(&self, signals: &CapabilitySignals) -> u32 {
        let mut score = 0;

        if signals.save_data == Some(true) {
            score += self.save_data_weight;
        }

        if let Some(ect) = signals.effective_type {
            if ect.is_slow() {
                score += self.slow_connection_weight;
            }
        }

        if let Some(memory_gb) = signals.device_memory_gb {
            if memory_gb < self.memory_floor_gb {
                score += self.very_low_memory_weight;
            } else if memory_gb <= self.memory_low_gb {
                score += self.low_memory_weight;
            }
        }

        if let Some(cores) = signals.cpu_cores {
            if cores <= self.cores_floor {
                score += self.few_cores_weight;
            } else if cores <= self.cores_low {
                score += self.some_cores_weight;
            }
        }

        if signals.reduced_motion == Some(true) {
            score += self.reduced_motion_weight;
        }

        if signals.mobile == Some(true) && score > 0 {
            score += self.mobile_weight;
        }

        score
    }

    /// Map a score onto its decision band.
    pub fn band(&self, score: u32) -> ScoreBand {
        if score >= self.low_end_min {
            ScoreBand::LowEnd
        } else if score <= self.capable_max {
            ScoreBand::Capable
        } else {
            ScoreBand::Uncertain
        }
    }
}
