// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Empirical frame-timing probe
//!
//! Disambiguates an uncertain capability score by sampling frame
//! callbacks for roughly a second of wall-clock time and counting frames
//! that miss the smoothness threshold. The analysis is a pure function of
//! the timestamp stream; only the sampler touches the clock.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Timing thresholds for the probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Delay before sampling starts, letting layout/fonts settle
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,
    /// Wall-clock observation window
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// Inter-frame gap above this is a long frame (slower than 30 fps)
    #[serde(default = "default_long_frame_ms")]
    pub long_frame_ms: u64,
    /// Fewer sampled frames than this invalidates the measurement
    #[serde(default = "default_min_valid_frames")]
    pub min_valid_frames: usize,
    /// Fewer frames than this over the window means low-end
    #[serde(default = "default_min_smooth_frames")]
    pub min_smooth_frames: usize,
    /// More long frames than this over the window means low-end
    #[serde(default = "default_max_long_frames")]
    pub max_long_frames: usize,
}

fn default_settle_ms() -> u64 {
    300
}
fn default_window_ms() -> u64 {
    950
}
fn default_long_frame_ms() -> u64 {
    34
}
fn default_min_valid_frames() -> usize {
    30
}
fn default_min_smooth_frames() -> usize {
    45
}
fn default_max_long_frames() -> usize {
    6
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            settle_ms: default_settle_ms(),
            window_ms: default_window_ms(),
            long_frame_ms: default_long_frame_ms(),
            min_valid_frames: default_min_valid_frames(),
            min_smooth_frames: default_min_smooth_frames(),
            max_long_frames: default_max_long_frames(),
        }
    }
}

impl ProbeConfig {
    pub fn settle(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }

    pub fn window(&self) -> Duration {
        Duration::from_millis(self.window_ms)
    }

    pub fn long_frame(&self) -> Duration {
        Duration::from_millis(self.long_frame_ms)
    }
}

/// Structured probe result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSample {
    /// Frames observed over the window
    pub frames: usize,
    /// Frames whose inter-frame gap exceeded the long-frame threshold
    pub long_frames: usize,
}

/// What a frame sample says about the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeVerdict {
    /// Too few frames to trust, likely background throttling
    Invalid,
    /// Long-frame count exceeded the jank ceiling
    Jank,
    /// Frame count below the smoothness floor
    Slow,
    /// Neither threshold tripped
    Smooth,
}

impl FrameSample {
    /// Analyze a stream of frame timestamps (offsets from sampling start,
    /// strictly ordered). A frame is long when the gap since the previous
    /// timestamp (or since start, for the first frame) exceeds
    /// `long_frame`.
    pub fn from_timestamps(timestamps: &[Duration], long_frame: Duration) -> Self {
        let mut long_frames = 0;
        let mut previous = Duration::ZERO;
        for &ts in timestamps {
            if ts.saturating_sub(previous) > long_frame {
                long_frames += 1;
            }
            previous = ts;
        }
        Self {
            frames: timestamps.len(),
            long_frames,
        }
    }

    /// Judge the sample against the probe thresholds. The validity check
    /// comes first: a throttled sample must never force low-end.
    pub fn verdict(&self, config: &ProbeConfig) -> ProbeVerdict {
        if self.frames < config.min_valid_frames {
            ProbeVerdict::Invalid
        } else if self.long_frames > config.max_long_frames {
            ProbeVerdict::Jank
        } else if self.frames < config.min_smooth_frames {
            ProbeVerdict::Slow
        } else {
            ProbeVerdict::Smooth
        }
    }
}

/// Source of frame timestamps over a bounded window.
///
/// The browser implementation would hang off `requestAnimationFrame`;
/// the CLI paces a timer loop. Either way the probe resolves exactly
/// once, at window end.
#[async_trait]
pub trait FrameSampler: Send + Sync {
    /// Sample frame callbacks for `window` of wall-clock time, returning
    /// each frame's offset from the start of sampling.
    async fn sample(&self, window: Duration) -> Result<Vec<Duration>>;
}

/// Timer-paced sampler: one "frame" per tick of a ~60 Hz timer, measured
/// on a monotonic clock. Scheduling delay on a loaded machine shows up
/// as long frames, which is exactly the signal the probe wants.
#[derive(Debug, Clone)]
pub struct TimerFrameSampler {
    frame_interval: Duration,
}

impl TimerFrameSampler {
    pub fn new() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
        }
    }

    pub fn with_interval(frame_interval: Duration) -> Self {
        Self { frame_interval }
    }
}

impl Default for TimerFrameSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameSampler for TimerFrameSampler {
    async fn sample(&self, window: Duration) -> Result<Vec<Duration>> {
        let start = std::time::Instant::now();
        let mut timestamps = Vec::new();
        loop {
            tokio::time::sleep(self.frame_interval).await;
            let elapsed = start.elapsed();
            if elapsed >= window {
                break;
            }
            timestamps.push(elapsed);
        }
        Ok(timestamps)
    }
}
