// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure placement geometry: where a floating rect goes, and by how much it
//! overflows.

use kurbo::{Point, Rect, Size};

use crate::placement::{Align, Placement, Side};

/// Computes the top-left corner of a floating element of size `floating`
/// placed against `reference` at `placement`, pushed `distance` away along
/// the placement's primary axis.
///
/// Pure arithmetic: zero-size rects produce a degenerate but finite
/// position, and negative (off-screen) reference coordinates are valid
/// inputs.
#[must_use]
pub fn anchor_point(reference: Rect, floating: Size, placement: Placement, distance: f64) -> Point {
    let main = match placement.side {
        Side::Top => reference.y0 - floating.height - distance,
        Side::Bottom => reference.y1 + distance,
        Side::Left => reference.x0 - floating.width - distance,
        Side::Right => reference.x1 + distance,
    };
    let cross = if placement.side.is_vertical() {
        aligned(reference.x0, reference.x1, floating.width, placement.align)
    } else {
        aligned(reference.y0, reference.y1, floating.height, placement.align)
    };
    if placement.side.is_vertical() {
        Point::new(cross, main)
    } else {
        Point::new(main, cross)
    }
}

fn aligned(ref_start: f64, ref_end: f64, extent: f64, align: Align) -> f64 {
    match align {
        Align::Start => ref_start,
        Align::End => ref_end - extent,
        Align::Center => (ref_start + ref_end - extent) / 2.0,
    }
}

/// How far `rect` pokes past `boundary` on the given side, in pixels.
///
/// Positive values mean overflow; zero or negative mean the rect is inside
/// the boundary on that side.
#[must_use]
pub fn side_overflow(rect: Rect, boundary: Rect, side: Side) -> f64 {
    match side {
        Side::Top => boundary.y0 - rect.y0,
        Side::Bottom => rect.y1 - boundary.y1,
        Side::Left => boundary.x0 - rect.x0,
        Side::Right => rect.x1 - boundary.x1,
    }
}

/// The gap between `reference` and the floating `rect` along the primary
/// axis of `side`.
///
/// This recovers the offset distance already applied to a tentative
/// position, so a recomputation (after a flip, or after narrowing an inline
/// reference) can preserve it.
#[must_use]
pub fn primary_gap(reference: Rect, rect: Rect, side: Side) -> f64 {
    match side {
        Side::Top => reference.y0 - rect.y1,
        Side::Bottom => rect.y0 - reference.y1,
        Side::Left => reference.x0 - rect.x1,
        Side::Right => rect.x0 - reference.x1,
    }
}
