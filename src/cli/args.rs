// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Barko - capability classifier and page-state tooling
#[derive(Parser, Debug)]
#[command(name = "barko")]
#[command(version, about = "Low-end capability classifier for the Barko site")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit the diagnostic trace (signal values, score, frame counts)
    #[arg(long, global = true)]
    pub debug: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the capability classifier (default when no command given)
    Classify(ClassifyArgs),

    /// Show the detected capability signals
    Signals,

    /// Run the frame-timing probe on its own
    Probe(ProbeArgs),

    /// Show or change the persisted theme preference
    Theme(ThemeArgs),

    /// Show or change the persisted UI language
    Lang(LangArgs),

    /// Drop the session's cached decision
    Clear,
}

/// Arguments for the classify subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ClassifyArgs {
    /// Force the lite experience (mirrors `?lite`)
    #[arg(long, conflicts_with = "full")]
    pub lite: bool,

    /// Force the full experience (mirrors `?full`)
    #[arg(long)]
    pub full: bool,

    /// Ignore any cached decision for this run
    #[arg(long)]
    pub fresh: bool,
}

/// Arguments for the probe subcommand
#[derive(clap::Args, Debug)]
pub struct ProbeArgs {
    /// Observation window in milliseconds (defaults to settings)
    #[arg(long)]
    pub window_ms: Option<u64>,
}

/// Arguments for the theme subcommand
#[derive(clap::Args, Debug)]
pub struct ThemeArgs {
    /// New mode; omit to print the current one
    #[arg(value_enum)]
    pub mode: Option<ThemeAction>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ThemeAction {
    Dark,
    Light,
    Toggle,
}

/// Arguments for the lang subcommand
#[derive(clap::Args, Debug)]
pub struct LangArgs {
    /// New language; omit to print the current one
    pub lang: Option<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
