// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Configuration module for Barko
//!
//! Handles loading and saving classifier settings.

pub mod settings;

pub use settings::*;
