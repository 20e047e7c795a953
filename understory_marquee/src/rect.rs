// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle normalization for marquee drags.
//!
//! A marquee is described by two corners: the anchor recorded when the drag
//! started and the current pointer position. The pointer may travel in any
//! direction from the anchor, so the two corners have no fixed relationship.
//! [`rect_from_points`] turns them into an axis-aligned [`Rect`] whose
//! extents are never negative.
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_marquee::rect_from_points;
//!
//! // Dragging up and to the left still yields a well-formed rect.
//! let r = rect_from_points(Point::new(50.0, 30.0), Point::new(10.0, 10.0));
//! assert_eq!(r, Rect::new(10.0, 10.0, 50.0, 30.0));
//! assert_eq!(r.width(), 40.0);
//! assert_eq!(r.height(), 20.0);
//! ```

use kurbo::{Point, Rect};

/// Returns the axis-aligned rectangle spanned by `a` and `b`.
///
/// The origin is the component-wise minimum of the two points and the size
/// is the absolute distance between them on each axis. The result does not
/// depend on argument order, and `a == b` gives a zero-size rect at that
/// point.
///
/// Inputs are assumed to be finite.
#[must_use]
pub fn rect_from_points(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), a.x.max(b.x), a.y.max(b.y))
}
