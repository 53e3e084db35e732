// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Command runners for the Barko CLI

use std::io::{self, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    ExecutableCommand,
};

use crate::capability::{
    Classifier, Decision, FrameSample, FrameSampler, PageContext, PageFlags, SignalProvider,
    SystemSignals, TimerFrameSampler,
};
use crate::cli::{ClassifyArgs, LangArgs, OutputFormat, ProbeArgs, ThemeAction, ThemeArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::store::{
    prefs_store_path, session_store_path, FileStore, KeyValueStore, LOW_END_KEY,
};
use crate::theme::ThemeMode;
use crate::ui::Language;
use crate::view::RootState;

fn print_heading(text: &str) -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(stdout, "{text}")?;
    stdout.execute(ResetColor)?;
    Ok(())
}

/// Run the classifier against live system signals and the on-disk
/// session store, then print the decision and resulting root classes.
pub async fn run_classify(
    settings: &Settings,
    args: &ClassifyArgs,
    format: OutputFormat,
    debug: bool,
) -> Result<()> {
    let mut store = FileStore::open(session_store_path())?;
    if args.fresh {
        store.remove(LOW_END_KEY)?;
    }

    let signals = SystemSignals::new().signals();
    let flags = PageFlags {
        lite: args.lite,
        full: args.full,
        debug,
    };
    let sampler = TimerFrameSampler::new();

    let decision = Classifier::new(settings)
        .classify(
            &mut store,
            &signals,
            flags,
            PageContext::default(),
            &sampler,
        )
        .await?;

    let mut root = RootState::new();
    decision.apply(&mut root);
    ThemeMode::load(&FileStore::open(prefs_store_path())?)?.sync(&mut root);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&decision)?);
        }
        OutputFormat::Text => {
            print_decision(&decision)?;
            println!("root classes: {}", root.class_list().join(" "));
        }
    }
    Ok(())
}

fn print_decision(decision: &Decision) -> Result<()> {
    let mut stdout = io::stdout();
    let (label, color) = if decision.low_end {
        ("low-end", Color::Yellow)
    } else {
        ("not low-end", Color::Green)
    };
    write!(stdout, "Capability decision: ")?;
    stdout.execute(SetForegroundColor(color))?;
    writeln!(stdout, "{label}")?;
    stdout.execute(ResetColor)?;

    writeln!(stdout, "  reason: {}", decision.reason)?;
    if let Some(score) = decision.score {
        writeln!(stdout, "  score:  {score}")?;
    }
    if let Some(sample) = decision.sample {
        writeln!(
            stdout,
            "  probe:  {} frames, {} long",
            sample.frames, sample.long_frames
        )?;
    }
    Ok(())
}

/// Print the detected capability signals and their score.
pub fn run_signals(settings: &Settings, format: OutputFormat) -> Result<()> {
    let signals = SystemSignals::new().signals();
    let score = settings.score.score(&signals);

    match format {
        OutputFormat::Json => {
            let mut value = serde_json::to_value(&signals)?;
            value["score"] = score.into();
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            print_heading("Capability signals")?;
            println!(
                "  memory:         {}",
                signals
                    .device_memory_gb
                    .map(|gb| format!("{gb:.1} GB"))
                    .unwrap_or_else(|| "unavailable".into())
            );
            println!(
                "  cores:          {}",
                opt_str(signals.cpu_cores.map(|c| c.to_string()))
            );
            println!(
                "  save-data:      {}",
                opt_str(signals.save_data.map(|b| b.to_string()))
            );
            println!(
                "  connection:     {}",
                opt_str(signals.effective_type.map(|e| e.to_string()))
            );
            println!(
                "  mobile:         {}",
                opt_str(signals.mobile.map(|b| b.to_string()))
            );
            println!(
                "  reduced-motion: {}",
                opt_str(signals.reduced_motion.map(|b| b.to_string()))
            );
            println!("  score:          {score}");
        }
    }
    Ok(())
}

fn opt_str(value: Option<String>) -> String {
    value.unwrap_or_else(|| "unavailable".into())
}

/// Run the frame probe standalone, regardless of the score band.
pub async fn run_probe(
    settings: &Settings,
    args: &ProbeArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut probe = settings.probe.clone();
    if let Some(window_ms) = args.window_ms {
        probe.window_ms = window_ms;
    }

    let sampler = TimerFrameSampler::new();
    tokio::time::sleep(probe.settle()).await;
    let timestamps = sampler.sample(probe.window()).await?;
    let sample = FrameSample::from_timestamps(&timestamps, probe.long_frame());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sample)?),
        OutputFormat::Text => {
            print_heading("Frame probe")?;
            println!("  window:      {} ms", probe.window_ms);
            println!("  frames:      {}", sample.frames);
            println!("  long frames: {}", sample.long_frames);
            println!("  verdict:     {:?}", sample.verdict(&probe));
        }
    }
    Ok(())
}

/// Show or change the persisted theme preference.
pub fn run_theme(args: &ThemeArgs, format: OutputFormat) -> Result<()> {
    let mut store = FileStore::open(prefs_store_path())?;
    let mode = match args.mode {
        None => ThemeMode::load(&store)?,
        Some(ThemeAction::Toggle) => ThemeMode::toggle(&mut store)?,
        Some(ThemeAction::Dark) => {
            ThemeMode::Dark.save(&mut store)?;
            ThemeMode::Dark
        }
        Some(ThemeAction::Light) => {
            ThemeMode::Light.save(&mut store)?;
            ThemeMode::Light
        }
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&mode)?),
        OutputFormat::Text => println!("theme: {mode}"),
    }
    Ok(())
}

/// Show or change the persisted UI language.
pub fn run_lang(args: &LangArgs, format: OutputFormat) -> Result<()> {
    let mut store = FileStore::open(prefs_store_path())?;
    let lang = match &args.lang {
        None => Language::load(&store)?,
        Some(raw) => {
            let lang: Language = raw.parse()?;
            lang.save(&mut store)?;
            lang
        }
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&lang)?),
        OutputFormat::Text => println!("language: {lang}"),
    }
    Ok(())
}

/// Drop the session's cached decision, like closing the tab.
pub fn run_clear() -> Result<()> {
    let mut store = FileStore::open(session_store_path())?;
    store.clear()?;
    println!("session cache cleared");
    Ok(())
}
