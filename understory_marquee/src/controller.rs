// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee controller: turn a pointer drag into an overlay lifecycle and a selection rect.
//!
//! ## Usage
//!
//! 1) On pointer down, call [`MarqueeController::start`] with the pointer position and the
//!    container to draw in. A fresh overlay is created, styled, and attached.
//! 2) On each move, call [`MarqueeController::update`]. The selection is recomputed from the
//!    anchor and the overlay is resized to match.
//! 3) On pointer up, call [`MarqueeController::end`] to get the final selection; on abort,
//!    call [`MarqueeController::cancel`]. Either way the overlay is detached and the
//!    controller returns to idle.
//!
//! Events that arrive while idle (other than a start) are ignored. A start without a
//! container is dropped; [`MarqueeController::try_start`] reports that case as
//! [`MarqueeError::NoTargetContainer`] for callers that want to know.
//!
//! Hosts that already have a gesture object can implement
//! [`PointerDragSource`] for it and feed it through [`MarqueeController::handle`].

use core::fmt;
use core::mem;

use kurbo::{Point, Rect};
use log::{debug, trace};

use crate::overlay::{MarqueeOverlay, OverlayContainer};
use crate::rect::rect_from_points;
use crate::source::{DragPhase, PointerDragSource};
use crate::style::MarqueeStyle;

/// Reasons a marquee drag could not begin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarqueeError {
    /// The start event did not carry a container to attach the overlay to.
    NoTargetContainer,
}

impl fmt::Display for MarqueeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargetContainer => f.write_str("drag start has no target container"),
        }
    }
}

impl core::error::Error for MarqueeError {}

/// What a single event did to the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MarqueeResponse {
    /// A drag began and an overlay was attached.
    Began,
    /// The selection changed to the given rect.
    Changed(Rect),
    /// The drag finished with the given final selection.
    Ended(Rect),
    /// The drag was aborted.
    Cancelled,
    /// The event had no effect.
    Ignored,
}

#[derive(Debug)]
enum MarqueeState<O> {
    Idle,
    Dragging {
        overlay: O,
        anchor: Point,
        selection: Rect,
    },
}

/// Drives a marquee overlay from pointer drag phases.
///
/// The controller exclusively owns the overlay for the duration of a drag. Dropping a
/// controller mid-drag detaches its overlay.
#[derive(Debug)]
pub struct MarqueeController<O: MarqueeOverlay> {
    style: MarqueeStyle,
    state: MarqueeState<O>,
}

impl<O: MarqueeOverlay> Default for MarqueeController<O> {
    fn default() -> Self {
        Self::new(MarqueeStyle::default())
    }
}

impl<O: MarqueeOverlay> MarqueeController<O> {
    /// Creates an idle controller that styles its overlays with `style`.
    #[must_use]
    pub fn new(style: MarqueeStyle) -> Self {
        Self {
            style,
            state: MarqueeState::Idle,
        }
    }

    /// Style applied to newly created overlays.
    #[must_use]
    pub fn style(&self) -> &MarqueeStyle {
        &self.style
    }

    /// Replace the style. Takes effect from the next drag; a live overlay keeps its style.
    pub fn set_style(&mut self, style: MarqueeStyle) {
        self.style = style;
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, MarqueeState::Dragging { .. })
    }

    /// Point where the current drag started, or the origin when idle.
    #[must_use]
    pub fn anchor(&self) -> Point {
        match &self.state {
            MarqueeState::Idle => Point::ZERO,
            MarqueeState::Dragging { anchor, .. } => *anchor,
        }
    }

    /// Current selection rect, or [`Rect::ZERO`] when idle.
    #[must_use]
    pub fn selection(&self) -> Rect {
        match &self.state {
            MarqueeState::Idle => Rect::ZERO,
            MarqueeState::Dragging { selection, .. } => *selection,
        }
    }

    /// The live overlay, if a drag is in progress.
    #[must_use]
    pub fn overlay(&self) -> Option<&O> {
        match &self.state {
            MarqueeState::Idle => None,
            MarqueeState::Dragging { overlay, .. } => Some(overlay),
        }
    }

    /// Begin a drag at `point` inside `container`.
    ///
    /// Fails with [`MarqueeError::NoTargetContainer`] when `container` is `None`; the
    /// controller is left untouched in that case. If a drag is already in progress its
    /// overlay is detached before the new one is created.
    pub fn try_start<C>(
        &mut self,
        point: Point,
        container: Option<&mut C>,
    ) -> Result<(), MarqueeError>
    where
        C: OverlayContainer<Overlay = O>,
    {
        let container = container.ok_or(MarqueeError::NoTargetContainer)?;

        if let MarqueeState::Dragging { overlay, anchor, .. } =
            mem::replace(&mut self.state, MarqueeState::Idle)
        {
            trace!("marquee restarted; dropping drag anchored at {anchor:?}");
            overlay.detach();
        }

        let mut overlay = container.insert_overlay(self.style.stack_order);
        overlay.apply_style(&self.style);
        let selection = rect_from_points(point, point);
        overlay.set_bounds(selection);

        trace!("marquee began at {point:?}");
        self.state = MarqueeState::Dragging {
            overlay,
            anchor: point,
            selection,
        };
        Ok(())
    }

    /// Begin a drag at `point` inside `container`, ignoring a missing container.
    ///
    /// See [`Self::try_start`].
    pub fn start<C>(&mut self, point: Point, container: Option<&mut C>)
    where
        C: OverlayContainer<Overlay = O>,
    {
        if let Err(err) = self.try_start(point, container) {
            debug!("marquee start at {point:?} ignored: {err}");
        }
    }

    /// Recompute the selection for a pointer now at `point` and resize the overlay.
    ///
    /// Returns the new selection, or `None` when no drag is in progress.
    pub fn update(&mut self, point: Point) -> Option<Rect> {
        let MarqueeState::Dragging {
            overlay,
            anchor,
            selection,
        } = &mut self.state
        else {
            return None;
        };
        *selection = rect_from_points(*anchor, point);
        overlay.set_bounds(*selection);
        Some(*selection)
    }

    /// Finish the drag with the pointer released at `point`.
    ///
    /// Detaches the overlay, resets the controller to idle, and returns the final
    /// selection. Returns `None` when no drag is in progress.
    pub fn end(&mut self, point: Point) -> Option<Rect> {
        let MarqueeState::Dragging {
            overlay, anchor, ..
        } = mem::replace(&mut self.state, MarqueeState::Idle)
        else {
            return None;
        };
        let selection = rect_from_points(anchor, point);
        overlay.detach();
        trace!("marquee ended with {selection:?}");
        Some(selection)
    }

    /// Abort the drag, discarding the selection.
    ///
    /// Returns `true` if a drag was in progress.
    pub fn cancel(&mut self) -> bool {
        let MarqueeState::Dragging { overlay, .. } =
            mem::replace(&mut self.state, MarqueeState::Idle)
        else {
            return false;
        };
        overlay.detach();
        trace!("marquee cancelled");
        true
    }

    /// Apply one phase reported by `source`.
    pub fn handle<S>(&mut self, source: &mut S) -> MarqueeResponse
    where
        S: PointerDragSource,
        S::Container: OverlayContainer<Overlay = O>,
    {
        let point = source.location();
        match source.phase() {
            DragPhase::Start => match self.try_start(point, source.container()) {
                Ok(()) => MarqueeResponse::Began,
                Err(err) => {
                    debug!("marquee start at {point:?} ignored: {err}");
                    MarqueeResponse::Ignored
                }
            },
            DragPhase::Move => self
                .update(point)
                .map_or(MarqueeResponse::Ignored, MarqueeResponse::Changed),
            DragPhase::End => self
                .end(point)
                .map_or(MarqueeResponse::Ignored, MarqueeResponse::Ended),
            DragPhase::Cancel => {
                if self.cancel() {
                    MarqueeResponse::Cancelled
                } else {
                    MarqueeResponse::Ignored
                }
            }
        }
    }
}

impl<O: MarqueeOverlay> Drop for MarqueeController<O> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct Counters {
        inserted: Cell<usize>,
        styled: Cell<usize>,
        detached: Cell<usize>,
        bounds: Cell<Option<Rect>>,
    }

    struct Host<'a>(&'a Counters);

    struct Overlay<'a>(&'a Counters);

    impl<'a> OverlayContainer for Host<'a> {
        type Overlay = Overlay<'a>;

        fn insert_overlay(&mut self, _stack_order: usize) -> Overlay<'a> {
            self.0.inserted.set(self.0.inserted.get() + 1);
            Overlay(self.0)
        }
    }

    impl MarqueeOverlay for Overlay<'_> {
        fn apply_style(&mut self, _style: &MarqueeStyle) {
            self.0.styled.set(self.0.styled.get() + 1);
        }

        fn set_bounds(&mut self, bounds: Rect) {
            self.0.bounds.set(Some(bounds));
        }

        fn detach(self) {
            self.0.detached.set(self.0.detached.get() + 1);
        }
    }

    #[test]
    fn new_controller_is_idle() {
        let marquee = MarqueeController::<Overlay<'_>>::default();
        assert!(!marquee.is_dragging());
        assert_eq!(marquee.anchor(), Point::ZERO);
        assert_eq!(marquee.selection(), Rect::ZERO);
        assert!(marquee.overlay().is_none());
    }

    #[test]
    fn try_start_without_container_reports_error() {
        let mut marquee = MarqueeController::<Overlay<'_>>::default();
        let result = marquee.try_start::<Host<'_>>(Point::new(1.0, 1.0), None);
        assert_eq!(result, Err(MarqueeError::NoTargetContainer));
        assert!(!marquee.is_dragging());
    }

    #[test]
    fn start_styles_once_and_sizes_overlay_to_anchor() {
        let counters = Counters::default();
        let mut host = Host(&counters);
        let mut marquee = MarqueeController::default();

        marquee.start(Point::new(4.0, 6.0), Some(&mut host));

        assert_eq!(counters.inserted.get(), 1);
        assert_eq!(counters.styled.get(), 1);
        assert_eq!(counters.bounds.get(), Some(Rect::new(4.0, 6.0, 4.0, 6.0)));

        marquee.update(Point::new(8.0, 9.0));
        assert_eq!(counters.styled.get(), 1, "style must not be reapplied on move");
        assert_eq!(counters.bounds.get(), Some(Rect::new(4.0, 6.0, 8.0, 9.0)));
    }

    #[test]
    fn end_returns_final_rect_from_release_point() {
        let counters = Counters::default();
        let mut host = Host(&counters);
        let mut marquee = MarqueeController::default();

        marquee.start(Point::new(10.0, 10.0), Some(&mut host));
        marquee.update(Point::new(20.0, 20.0));
        let last = marquee.end(Point::new(5.0, 30.0));

        assert_eq!(last, Some(Rect::new(5.0, 10.0, 10.0, 30.0)));
        assert_eq!(counters.detached.get(), 1);
        assert_eq!(marquee.selection(), Rect::ZERO);
    }

    #[test]
    fn restart_detaches_previous_overlay() {
        let counters = Counters::default();
        let mut host = Host(&counters);
        let mut marquee = MarqueeController::default();

        marquee.start(Point::new(1.0, 1.0), Some(&mut host));
        marquee.start(Point::new(2.0, 2.0), Some(&mut host));

        assert_eq!(counters.inserted.get(), 2);
        assert_eq!(counters.detached.get(), 1);
        assert_eq!(marquee.anchor(), Point::new(2.0, 2.0));
    }

    #[test]
    fn restart_without_container_keeps_current_drag() {
        let counters = Counters::default();
        let mut host = Host(&counters);
        let mut marquee = MarqueeController::default();

        marquee.start(Point::new(1.0, 1.0), Some(&mut host));
        marquee.start::<Host<'_>>(Point::new(9.0, 9.0), None);

        assert!(marquee.is_dragging());
        assert_eq!(marquee.anchor(), Point::new(1.0, 1.0));
        assert_eq!(counters.detached.get(), 0);
    }

    #[test]
    fn dropping_mid_drag_detaches_overlay() {
        let counters = Counters::default();
        let mut host = Host(&counters);
        {
            let mut marquee = MarqueeController::default();
            marquee.start(Point::new(1.0, 1.0), Some(&mut host));
        }
        assert_eq!(counters.detached.get(), 1);
    }

    #[test]
    fn error_message() {
        use alloc::string::ToString;
        assert_eq!(
            MarqueeError::NoTargetContainer.to_string(),
            "drag start has no target container"
        );
    }
}
