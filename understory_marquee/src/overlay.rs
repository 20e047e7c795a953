// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host traits for creating and driving the marquee overlay.
//!
//! The controller never draws anything itself. The host supplies an
//! [`OverlayContainer`] (the view or layer the drag happens in) that can mint
//! a fresh [`MarqueeOverlay`] on demand. The controller then owns that
//! overlay until the drag finishes and hands it back through
//! [`MarqueeOverlay::detach`].
//!
//! Overlays are never reused across drags: each drag start asks the container
//! for a new one.

use kurbo::Rect;

use crate::style::MarqueeStyle;

/// A surface that can host a marquee overlay.
pub trait OverlayContainer {
    /// Handle to one overlay instance.
    type Overlay: MarqueeOverlay;

    /// Create a new overlay and attach it at `stack_order` among this
    /// container's children.
    ///
    /// The returned overlay has no style or bounds yet.
    fn insert_overlay(&mut self, stack_order: usize) -> Self::Overlay;
}

/// A transient overlay representing the in-progress selection rectangle.
pub trait MarqueeOverlay {
    /// Apply fill, border, and stacking from `style`.
    ///
    /// Called exactly once per overlay, right after creation.
    fn apply_style(&mut self, style: &MarqueeStyle);

    /// Move and resize the overlay to `bounds`, in container coordinates.
    fn set_bounds(&mut self, bounds: Rect);

    /// Detach the overlay from its container and release it.
    fn detach(self);
}
