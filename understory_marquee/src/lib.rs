// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_marquee --heading-base-level=0

//! Understory Marquee: rubber-band selection state for pointer drags.
//!
//! A marquee is the translucent rectangle that follows the pointer while the
//! user drags across a canvas or list to select the items underneath it. This
//! crate owns the bookkeeping for that interaction:
//!
//! - [`rect_from_points`]: normalize an anchor and the current pointer position
//!   into a [`kurbo::Rect`] with non-negative extents, whichever way the drag goes.
//! - [`MarqueeController`]: a small `Idle → Dragging → Idle` state machine that
//!   creates an overlay on drag start, resizes it on every move, and detaches it
//!   on end or cancel.
//! - [`MarqueeStyle`]: tint, fill opacity, border width, and stack order applied
//!   to each overlay when it is created.
//!
//! The crate does not draw, route events, or hit-test. The host provides an
//! [`OverlayContainer`] that mints [`MarqueeOverlay`] handles, and delivers
//! pointer phases either by calling the controller directly or through a
//! [`PointerDragSource`]. Deciding which items the final rectangle encloses is
//! up to the caller (for example with a box-tree rectangle query feeding
//! `understory_selection`).
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Rect};
//! use understory_marquee::{MarqueeController, MarqueeOverlay, MarqueeStyle, OverlayContainer};
//!
//! // A container that remembers where its overlay currently is.
//! #[derive(Default)]
//! struct Canvas {
//!     overlay_bounds: Rc<RefCell<Option<Rect>>>,
//! }
//!
//! struct Overlay(Rc<RefCell<Option<Rect>>>);
//!
//! impl OverlayContainer for Canvas {
//!     type Overlay = Overlay;
//!
//!     fn insert_overlay(&mut self, _stack_order: usize) -> Overlay {
//!         Overlay(self.overlay_bounds.clone())
//!     }
//! }
//!
//! impl MarqueeOverlay for Overlay {
//!     fn apply_style(&mut self, _style: &MarqueeStyle) {}
//!
//!     fn set_bounds(&mut self, bounds: Rect) {
//!         *self.0.borrow_mut() = Some(bounds);
//!     }
//!
//!     fn detach(self) {
//!         *self.0.borrow_mut() = None;
//!     }
//! }
//!
//! let mut canvas = Canvas::default();
//! let mut marquee = MarqueeController::new(MarqueeStyle::default());
//!
//! marquee.start(Point::new(10.0, 10.0), Some(&mut canvas));
//! marquee.update(Point::new(50.0, 30.0));
//! assert_eq!(marquee.selection(), Rect::new(10.0, 10.0, 50.0, 30.0));
//! assert_eq!(*canvas.overlay_bounds.borrow(), Some(marquee.selection()));
//!
//! // Dragging back past the anchor flips the rect instead of inverting it.
//! marquee.update(Point::new(0.0, 0.0));
//! assert_eq!(marquee.selection(), Rect::new(0.0, 0.0, 10.0, 10.0));
//!
//! // The final rect is handed back; the polled selection resets.
//! let last = marquee.end(Point::new(0.0, 0.0));
//! assert_eq!(last, Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
//! assert_eq!(marquee.selection(), Rect::ZERO);
//! assert_eq!(*canvas.overlay_bounds.borrow(), None);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and Peniko against the standard library.
//! - `libm`: use `libm` for float math in `no_std` builds.
//! - `ui_events_adapter`: [`adapters::ui_events`] maps `ui-events` pointer
//!   events to drag phases.
//!
//! Diagnostics go through the `log` facade: transitions at `trace`, dropped
//! starts at `debug`.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod adapters;
pub mod controller;
pub mod overlay;
pub mod rect;
pub mod source;
pub mod style;

pub use controller::{MarqueeController, MarqueeError, MarqueeResponse};
pub use overlay::{MarqueeOverlay, OverlayContainer};
pub use rect::rect_from_points;
pub use source::{DragEvent, DragPhase, PointerDragSource};
pub use style::MarqueeStyle;
