// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integration helpers for input crates.
//!
//! Modules in this file are behind feature flags so `understory_marquee` can
//! remain usable in contexts that do not depend on those crates.
//!
//! - [`ui_events`] (`ui_events_adapter` feature): map
//!   `ui_events::pointer::PointerEvent` values to [`crate::DragPhase`]s.

#[cfg(feature = "ui_events_adapter")]
pub mod ui_events;
