// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Low-end device classification
//!
//! Decides once per session whether the device/connection is "low-end"
//! so the rest of the page can strip non-essential motion. The decision
//! chain: explicit overrides, then the session cache, then a weighted
//! signal score, then (only in the uncertain band) a short frame-timing
//! probe.

pub mod classifier;
pub mod probe;
pub mod score;
pub mod signals;

pub use classifier::*;
pub use probe::*;
pub use score::*;
pub use signals::*;
