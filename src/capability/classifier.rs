// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! The capability decision chain
//!
//! Strict first-match order: overrides, session cache, score bands, and
//! only in the uncertain band the frame probe. A decision, once cached
//! for a session, is returned unchanged on every later page load within
//! that session; overrides and skipped/invalid probe outcomes are applied
//! but never cached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::probe::{FrameSample, FrameSampler, ProbeVerdict};
use super::score::ScoreBand;
use super::signals::CapabilitySignals;
use crate::config::Settings;
use crate::error::Result;
use crate::store::{KeyValueStore, LOW_END_KEY};
use crate::view::{RootState, LITE_CLASS};

/// Page-level override and diagnostic flags, sourced from URL query
/// parameters on the site and from CLI flags in the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageFlags {
    /// `?full`: force the full experience
    pub full: bool,
    /// `?lite`: force the lite experience
    pub lite: bool,
    /// `?debug`: diagnostic trace only, no behavioral effect
    pub debug: bool,
}

impl PageFlags {
    /// Parse a raw query string (`"lite&debug"`, with or without the
    /// leading `?`). Unknown parameters are ignored; values after `=`
    /// are irrelevant, presence is what counts.
    pub fn from_query(query: &str) -> Self {
        let mut flags = Self::default();
        for param in query.trim_start_matches('?').split('&') {
            let key = param.split('=').next().unwrap_or("");
            match key {
                "full" => flags.full = true,
                "lite" => flags.lite = true,
                "debug" => flags.debug = true,
                _ => {}
            }
        }
        flags
    }
}

/// Whether the page is currently in the foreground. The probe only runs
/// on a visible, focused page; an inactive tab must never be blocked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageContext {
    pub visible: bool,
    pub focused: bool,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            visible: true,
            focused: true,
        }
    }
}

impl PageContext {
    pub fn active(&self) -> bool {
        self.visible && self.focused
    }

    pub fn background() -> Self {
        Self {
            visible: false,
            focused: false,
        }
    }
}

/// Why the classifier reached its decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionReason {
    ForcedFull,
    ForcedLite,
    Cached,
    ScoreHigh,
    ScoreLow,
    ProbeJank,
    ProbeSlow,
    ProbeSmooth,
    ProbeSkipped,
    ProbeInvalid,
}

impl DecisionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ForcedFull => "forced-full",
            Self::ForcedLite => "forced-lite",
            Self::Cached => "cached",
            Self::ScoreHigh => "score-high",
            Self::ScoreLow => "score-low",
            Self::ProbeJank => "probe-jank",
            Self::ProbeSlow => "probe-slow",
            Self::ProbeSmooth => "probe-smooth",
            Self::ProbeSkipped => "probe-skipped",
            Self::ProbeInvalid => "probe-invalid",
        }
    }
}

impl std::fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The session's capability decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    pub low_end: bool,
    pub reason: DecisionReason,
    /// Weighted score, absent on override/cached branches
    pub score: Option<u32>,
    /// Probe measurement, present only when the probe ran
    pub sample: Option<FrameSample>,
    pub sampled_at: DateTime<Utc>,
}

impl Decision {
    fn new(low_end: bool, reason: DecisionReason) -> Self {
        Self {
            low_end,
            reason,
            score: None,
            sample: None,
            sampled_at: Utc::now(),
        }
    }

    /// Session-slot encoding: `"1"` low-end, `"0"` not.
    pub fn cache_value(&self) -> &'static str {
        if self.low_end {
            "1"
        } else {
            "0"
        }
    }

    /// Apply the decision to the document root. Set semantics: applying
    /// the same decision any number of times leaves the same class state.
    pub fn apply(&self, root: &mut RootState) {
        root.set_class(LITE_CLASS, self.low_end);
    }
}

/// The Capability Classifier.
pub struct Classifier<'a> {
    settings: &'a Settings,
}

impl<'a> Classifier<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Run the decision chain once for this page load.
    ///
    /// Terminal score/probe outcomes are written to the session slot
    /// before being returned; overrides and skipped/invalid probe
    /// outcomes are returned without touching the cache so a later page
    /// load gets a fresh evaluation.
    pub async fn classify(
        &self,
        store: &mut dyn KeyValueStore,
        signals: &CapabilitySignals,
        flags: PageFlags,
        page: PageContext,
        sampler: &dyn FrameSampler,
    ) -> Result<Decision> {
        if flags.full {
            debug!(reason = "forced-full", "override active");
            return Ok(Decision::new(false, DecisionReason::ForcedFull));
        }
        if flags.lite {
            debug!(reason = "forced-lite", "override active");
            return Ok(Decision::new(true, DecisionReason::ForcedLite));
        }

        if let Some(cached) = Self::read_cached(store)? {
            debug!(low_end = cached, "returning cached session decision");
            return Ok(Decision::new(cached, DecisionReason::Cached));
        }

        let score = self.settings.score.score(signals);
        debug!(score, ?signals, "capability score computed");

        let mut decision = match self.settings.score.band(score) {
            ScoreBand::LowEnd => Decision::new(true, DecisionReason::ScoreHigh),
            ScoreBand::Capable => Decision::new(false, DecisionReason::ScoreLow),
            ScoreBand::Uncertain => {
                if !page.active() {
                    debug!(reason = "probe-skipped", "page not visible/focused");
                    let mut skipped = Decision::new(false, DecisionReason::ProbeSkipped);
                    skipped.score = Some(score);
                    return Ok(skipped);
                }
                let mut probed = self.run_probe(sampler).await?;
                probed.score = Some(score);
                if probed.reason == DecisionReason::ProbeInvalid {
                    // Untrustworthy sample, do not cache.
                    return Ok(probed);
                }
                probed
            }
        };
        decision.score = Some(score);

        store.set(LOW_END_KEY, decision.cache_value())?;
        debug!(
            low_end = decision.low_end,
            reason = %decision.reason,
            "decision cached for session"
        );
        Ok(decision)
    }

    fn read_cached(store: &dyn KeyValueStore) -> Result<Option<bool>> {
        Ok(match store.get(LOW_END_KEY)?.as_deref() {
            Some("1") => Some(true),
            Some("0") => Some(false),
            // A corrupt slot reads as undecided.
            _ => None,
        })
    }

    async fn run_probe(&self, sampler: &dyn FrameSampler) -> Result<Decision> {
        let probe = &self.settings.probe;

        // Let layout and fonts settle before measuring.
        tokio::time::sleep(probe.settle()).await;

        let timestamps = sampler.sample(probe.window()).await?;
        let sample = FrameSample::from_timestamps(&timestamps, probe.long_frame());
        debug!(
            frames = sample.frames,
            long_frames = sample.long_frames,
            "probe window complete"
        );

        let mut decision = match sample.verdict(probe) {
            ProbeVerdict::Invalid => Decision::new(false, DecisionReason::ProbeInvalid),
            ProbeVerdict::Jank => Decision::new(true, DecisionReason::ProbeJank),
            ProbeVerdict::Slow => Decision::new(true, DecisionReason::ProbeSlow),
            ProbeVerdict::Smooth => Decision::new(false, DecisionReason::ProbeSmooth),
        };
        decision.sample = Some(sample);
        Ok(decision)
    }
}
