// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Barko Taverna

//! Page behavior handlers
//!
//! One canonical handler per behavior, registered against a minimal
//! typed view-model instead of being copy-pasted per page: dynamic
//! header, reveal-on-scroll, burger menu, language switcher, dish modal.

pub mod header;
pub mod language;
pub mod menu;
pub mod modal;
pub mod reveal;

pub use header::*;
pub use language::*;
pub use menu::*;
pub use modal::*;
pub use reveal::*;
