// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Session lifecycle: the decision is computed once, every later page
//! load in the same session applies the identical boolean, and
//! skipped/invalid outcomes leave the session undecided.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use barko::capability::{
    CapabilitySignals, Classifier, DecisionReason, FrameSampler, PageContext, PageFlags,
};
use barko::config::Settings;
use barko::error::Result;
use barko::store::{FileStore, KeyValueStore, MemoryStore, LOW_END_KEY, THEME_KEY};
use barko::theme::ThemeMode;
use barko::view::{RootState, DARK_CLASS, LITE_CLASS};

struct CountingSampler {
    timestamps: Vec<Duration>,
    calls: AtomicUsize,
}

impl CountingSampler {
    fn even(frames: usize, step_ms: u64) -> Self {
        Self {
            timestamps: (1..=frames as u64)
                .map(|i| Duration::from_millis(i * step_ms))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FrameSampler for CountingSampler {
    async fn sample(&self, _window: Duration) -> Result<Vec<Duration>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.timestamps.clone())
    }
}

fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.probe.settle_ms = 0;
    settings
}

fn uncertain_signals() -> CapabilitySignals {
    CapabilitySignals {
        cpu_cores: Some(4),
        device_memory_gb: Some(4.0),
        ..Default::default()
    }
}

#[tokio::test]
async fn probe_runs_once_then_every_page_load_hits_the_cache() {
    let settings = settings();
    let classifier = Classifier::new(&settings);
    let mut session = MemoryStore::new();
    let sampler = CountingSampler::even(58, 16);

    // First page load: uncertain score, probe runs, decision cached.
    let first = classifier
        .classify(
            &mut session,
            &uncertain_signals(),
            PageFlags::default(),
            PageContext::default(),
            &sampler,
        )
        .await
        .unwrap();
    assert_eq!(first.reason, DecisionReason::ProbeSmooth);
    assert_eq!(sampler.calls(), 1);

    // Later page loads: identical boolean, probe never re-runs.
    for _ in 0..3 {
        let next = classifier
            .classify(
                &mut session,
                &uncertain_signals(),
                PageFlags::default(),
                PageContext::default(),
                &sampler,
            )
            .await
            .unwrap();
        assert_eq!(next.low_end, first.low_end);
        assert_eq!(next.reason, DecisionReason::Cached);
    }
    assert_eq!(sampler.calls(), 1);
}

#[tokio::test]
async fn override_page_load_leaves_the_session_cache_intact() {
    let settings = settings();
    let classifier = Classifier::new(&settings);
    let mut session = MemoryStore::new();
    session.set(LOW_END_KEY, "1").unwrap();
    let sampler = CountingSampler::even(58, 16);

    let forced = classifier
        .classify(
            &mut session,
            &uncertain_signals(),
            PageFlags {
                full: true,
                lite: false,
                debug: false,
            },
            PageContext::default(),
            &sampler,
        )
        .await
        .unwrap();
    assert!(!forced.low_end);

    // Dropping the override flag restores the cached decision.
    let after = classifier
        .classify(
            &mut session,
            &uncertain_signals(),
            PageFlags::default(),
            PageContext::default(),
            &sampler,
        )
        .await
        .unwrap();
    assert!(after.low_end);
    assert_eq!(after.reason, DecisionReason::Cached);
}

#[tokio::test]
async fn skipped_probe_gets_a_fresh_chance_on_the_next_active_load() {
    let settings = settings();
    let classifier = Classifier::new(&settings);
    let mut session = MemoryStore::new();
    let sampler = CountingSampler::even(58, 16);

    let skipped = classifier
        .classify(
            &mut session,
            &uncertain_signals(),
            PageFlags::default(),
            PageContext::background(),
            &sampler,
        )
        .await
        .unwrap();
    assert_eq!(skipped.reason, DecisionReason::ProbeSkipped);
    assert_eq!(session.get(LOW_END_KEY).unwrap(), None);

    // Tab comes to the foreground: the probe finally runs and caches.
    let fresh = classifier
        .classify(
            &mut session,
            &uncertain_signals(),
            PageFlags::default(),
            PageContext::default(),
            &sampler,
        )
        .await
        .unwrap();
    assert_eq!(fresh.reason, DecisionReason::ProbeSmooth);
    assert_eq!(sampler.calls(), 1);
    assert_eq!(session.get(LOW_END_KEY).unwrap().as_deref(), Some("0"));
}

#[tokio::test]
async fn session_decision_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let settings = settings();
    let classifier = Classifier::new(&settings);
    let sampler = CountingSampler::even(58, 16);

    {
        let mut session = FileStore::open(&path).unwrap();
        let decision = classifier
            .classify(
                &mut session,
                &uncertain_signals(),
                PageFlags::default(),
                PageContext::default(),
                &sampler,
            )
            .await
            .unwrap();
        assert_eq!(decision.reason, DecisionReason::ProbeSmooth);
    }

    // A new page load in the same session opens the store afresh.
    let mut session = FileStore::open(&path).unwrap();
    let decision = classifier
        .classify(
            &mut session,
            &uncertain_signals(),
            PageFlags::default(),
            PageContext::default(),
            &sampler,
        )
        .await
        .unwrap();
    assert_eq!(decision.reason, DecisionReason::Cached);
    assert_eq!(sampler.calls(), 1);

    // Closing the tab clears session storage; the probe runs again.
    session.clear().unwrap();
    let decision = classifier
        .classify(
            &mut session,
            &uncertain_signals(),
            PageFlags::default(),
            PageContext::default(),
            &sampler,
        )
        .await
        .unwrap();
    assert_eq!(decision.reason, DecisionReason::ProbeSmooth);
    assert_eq!(sampler.calls(), 2);
}

#[tokio::test]
async fn theme_preference_is_independent_of_the_capability_decision() {
    let settings = settings();
    let classifier = Classifier::new(&settings);
    let mut session = MemoryStore::new();
    let mut prefs = MemoryStore::new();
    let sampler = CountingSampler::even(58, 16);

    ThemeMode::Dark.save(&mut prefs).unwrap();

    let decision = classifier
        .classify(
            &mut session,
            &CapabilitySignals {
                save_data: Some(true),
                effective_type: Some("slow-2g".parse().unwrap()),
                ..Default::default()
            },
            PageFlags::default(),
            PageContext::default(),
            &sampler,
        )
        .await
        .unwrap();

    // Both states land on the same root without clobbering each other.
    let mut root = RootState::new();
    decision.apply(&mut root);
    ThemeMode::load(&prefs).unwrap().sync(&mut root);

    assert!(root.has_class(LITE_CLASS));
    assert!(root.has_class(DARK_CLASS));
    assert_eq!(prefs.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(prefs.get(LOW_END_KEY).unwrap(), None);
}
