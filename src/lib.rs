// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Barko - client-side behavior core of the Barko restaurant site.
//!
//! This crate is the typed port of the site's page logic:
//! - `capability`: the low-end device classifier (signals, score, frame
//!   probe, session-cached decision)
//! - `store`: injected key-value storage standing in for local/session
//!   storage
//! - `theme`: the persisted dark/light preference
//! - `view`: the boolean class state applied to the document root
//! - `ui`: one canonical handler per page behavior (header, reveal,
//!   burger menu, language switcher, dish modal)
//!
//! The `barko` CLI (`src/main.rs`) runs the classifier against live
//! system signals and manages the persisted state.

pub mod capability;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod store;
pub mod theme;
pub mod ui;
pub mod view;

pub use error::{BarkoError, Result};
