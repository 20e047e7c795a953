// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer drag phases and the source trait the host's event system satisfies.
//!
//! Hosts either implement [`PointerDragSource`] on their own gesture type or
//! build a [`DragEvent`] per pointer event and hand it to
//! [`MarqueeController::handle`](crate::MarqueeController::handle).

use kurbo::Point;

use crate::overlay::OverlayContainer;

/// Discrete stage of a pointer drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// The pointer went down and a drag begins.
    Start,
    /// The pointer moved while the drag is in progress.
    Move,
    /// The pointer was released.
    End,
    /// The host aborted the drag (focus loss, gesture arbitration, ...).
    Cancel,
}

/// Anything that can report one phase of a pointer drag.
pub trait PointerDragSource {
    /// Container the drag happens in.
    type Container: OverlayContainer;

    /// Current phase of the drag.
    fn phase(&self) -> DragPhase;

    /// Pointer location in the container's coordinate space.
    fn location(&self) -> Point;

    /// Container the overlay should be attached to, if any.
    ///
    /// Only consulted for [`DragPhase::Start`].
    fn container(&mut self) -> Option<&mut Self::Container>;
}

/// A single pointer-phase event.
#[derive(Debug)]
pub struct DragEvent<'a, C> {
    /// Drag phase.
    pub phase: DragPhase,
    /// Pointer location in container coordinates.
    pub point: Point,
    /// Target container; `None` when the event carries no target.
    pub container: Option<&'a mut C>,
}

impl<'a, C> DragEvent<'a, C> {
    /// A start event targeting `container`.
    pub fn start(point: Point, container: &'a mut C) -> Self {
        Self {
            phase: DragPhase::Start,
            point,
            container: Some(container),
        }
    }

    /// An event with no target container.
    pub fn untargeted(phase: DragPhase, point: Point) -> Self {
        Self {
            phase,
            point,
            container: None,
        }
    }

    /// A move event.
    pub fn moved(point: Point) -> Self {
        Self::untargeted(DragPhase::Move, point)
    }

    /// An end event.
    pub fn end(point: Point) -> Self {
        Self::untargeted(DragPhase::End, point)
    }

    /// A cancel event.
    pub fn cancel() -> Self {
        Self::untargeted(DragPhase::Cancel, Point::ZERO)
    }
}

impl<C: OverlayContainer> PointerDragSource for DragEvent<'_, C> {
    type Container = C;

    fn phase(&self) -> DragPhase {
        self.phase
    }

    fn location(&self) -> Point {
        self.point
    }

    fn container(&mut self) -> Option<&mut C> {
        self.container.as_deref_mut()
    }
}
