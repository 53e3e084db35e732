// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Barko - capability classifier and page-state tooling
//!
//! Entry point for the Barko CLI.

use clap::Parser;

use barko::cli::{Cli, ClassifyArgs, Commands};
use barko::commands;
use barko::config::Settings;
use barko::error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing. `--debug` mirrors the site's `?debug` query
    // flag: diagnostics only, no behavioral effect. `RUST_LOG` still
    // takes precedence.
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());
    if cli.debug {
        if let Ok(directive) = "barko=debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    match &cli.command {
        None => {
            commands::run_classify(&settings, &ClassifyArgs::default(), cli.format, cli.debug)
                .await
        }
        Some(Commands::Classify(args)) => {
            commands::run_classify(&settings, args, cli.format, cli.debug).await
        }
        Some(Commands::Signals) => commands::run_signals(&settings, cli.format),
        Some(Commands::Probe(args)) => commands::run_probe(&settings, args, cli.format).await,
        Some(Commands::Theme(args)) => commands::run_theme(args, cli.format),
        Some(Commands::Lang(args)) => commands::run_lang(args, cli.format),
        Some(Commands::Clear) => commands::run_clear(),
    }
}
