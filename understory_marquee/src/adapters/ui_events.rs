// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `ui-events` adapter: drive a marquee from [`PointerEvent`]s.
//!
//! Pointer down starts a drag, move updates it, up ends it, and cancel aborts
//! it. Scroll, gesture, enter, and leave events carry no drag phase.
//! Positions are taken in logical coordinates.
//!
//! [`drag_phase`] accepts every pointer and button. Use
//! [`primary_drag_phase`] (or [`PointerEventSource::new_primary`]) when only
//! the primary pointer pressing the primary button should draw a marquee, so
//! that a secondary click mid-drag does not re-anchor it.
//!
//! ```no_run
//! use ui_events::pointer::{PointerButton, PointerEvent};
//! use understory_marquee::adapters::ui_events::PointerEventSource;
//! use understory_marquee::{MarqueeController, OverlayContainer};
//!
//! fn on_pointer<C: OverlayContainer>(
//!     marquee: &mut MarqueeController<C::Overlay>,
//!     event: &PointerEvent,
//!     container: &mut C,
//! ) {
//!     if let Some(mut source) = PointerEventSource::new(event, Some(container)) {
//!         marquee.handle(&mut source);
//!     }
//! }
//! ```

use kurbo::Point;
use ui_events::pointer::{PointerButton, PointerEvent};

use crate::overlay::OverlayContainer;
use crate::source::{DragPhase, PointerDragSource};

/// Drag phase and logical position carried by `event`, if it is part of a drag.
///
/// Cancel events carry no position and report the origin.
#[must_use]
pub fn drag_phase(event: &PointerEvent) -> Option<(DragPhase, Point)> {
    match event {
        PointerEvent::Down(e) => Some((DragPhase::Start, e.state.logical_point())),
        PointerEvent::Move(e) => Some((DragPhase::Move, e.current.logical_point())),
        PointerEvent::Up(e) => Some((DragPhase::End, e.state.logical_point())),
        PointerEvent::Cancel(_) => Some((DragPhase::Cancel, Point::ZERO)),
        PointerEvent::Enter(_)
        | PointerEvent::Leave(_)
        | PointerEvent::Scroll(_)
        | PointerEvent::Gesture(_) => None,
    }
}

/// Like [`drag_phase`], but only for the primary pointer and primary button.
///
/// Presses and releases of other buttons, and events from secondary pointers
/// (extra touches, a second pen), yield `None`.
#[must_use]
pub fn primary_drag_phase(event: &PointerEvent) -> Option<(DragPhase, Point)> {
    let primary = match event {
        PointerEvent::Down(e) | PointerEvent::Up(e) => {
            e.pointer.is_primary_pointer()
                && matches!(e.button, None | Some(PointerButton::Primary))
        }
        PointerEvent::Move(e) => e.pointer.is_primary_pointer(),
        PointerEvent::Cancel(info) => info.is_primary_pointer(),
        PointerEvent::Enter(_)
        | PointerEvent::Leave(_)
        | PointerEvent::Scroll(_)
        | PointerEvent::Gesture(_) => false,
    };
    if primary { drag_phase(event) } else { None }
}

/// A [`PointerDragSource`] backed by one `ui-events` pointer event.
#[derive(Debug)]
pub struct PointerEventSource<'a, C> {
    phase: DragPhase,
    point: Point,
    container: Option<&'a mut C>,
}

impl<'a, C> PointerEventSource<'a, C> {
    /// Wrap `event`, targeting `container` on pointer down.
    ///
    /// Returns `None` for events that carry no drag phase.
    pub fn new(event: &PointerEvent, container: Option<&'a mut C>) -> Option<Self> {
        let (phase, point) = drag_phase(event)?;
        Some(Self {
            phase,
            point,
            container,
        })
    }

    /// Wrap `event` if it comes from the primary pointer and button.
    ///
    /// See [`primary_drag_phase`].
    pub fn new_primary(event: &PointerEvent, container: Option<&'a mut C>) -> Option<Self> {
        let (phase, point) = primary_drag_phase(event)?;
        Some(Self {
            phase,
            point,
            container,
        })
    }
}

impl<C: OverlayContainer> PointerDragSource for PointerEventSource<'_, C> {
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
