// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The placement pipeline: composable adjustment steps over a tentative
//! position.
//!
//! [`compute_position`] seeds a [`PositionState`] from the raw placement
//! geometry and then runs each [`Middleware`] in the caller's declared
//! order. Steps only refine the state; they never discard what an earlier
//! step produced. A step may request a restart with a different placement
//! (that is how [`Flip`] works), and the pipeline honors at most one restart
//! per computation, so a flip can never oscillate.
//!
//! The conventional order is [`Inline`], [`Offset`], [`Flip`], [`Shift`],
//! [`Arrow`] — narrow the reference first, push away from it, choose the
//! side, keep on screen, aim the arrow last.

use kurbo::{Point, Rect, Size, Vec2};

use crate::geometry::{anchor_point, primary_gap, side_overflow};
use crate::placement::Placement;

/// Measured inputs to one position computation.
///
/// All rects are in the same (viewport) coordinate space. `reference`
/// usually holds a single rect; inline references wrapping across lines
/// provide one rect per line box.
#[derive(Clone, Copy, Debug)]
pub struct PositionInput<'a> {
    /// Client rects of the reference element (at least one).
    pub reference: &'a [Rect],
    /// Size of the floating element.
    pub floating: Size,
    /// The requested placement.
    pub placement: Placement,
    /// The boundary the floating element should stay within, typically the
    /// viewport.
    pub boundary: Rect,
    /// Last known pointer position, consulted by [`Inline`].
    pub pointer: Option<Point>,
}

/// Data recorded by middleware steps for the host to consume.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionData {
    /// Distance applied by [`Offset`].
    pub offset: f64,
    /// Translation applied by [`Shift`], when it had to clamp.
    pub shift: Option<Vec2>,
    /// Whether the placement was flipped away from the requested side.
    pub flipped: bool,
    /// Arrow geometry computed by [`Arrow`].
    pub arrow: Option<ArrowData>,
}

/// Where the arrow glyph sits along the floating element's anchored edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowData {
    /// Offset of the arrow's leading corner from the edge's start.
    pub offset: f64,
    /// `true` when the ideal position was clamped by the padding, meaning
    /// the arrow no longer points at the reference center exactly.
    pub clamped: bool,
}

/// The evolving output of the pipeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionState {
    /// The placement in effect (differs from the request after a flip).
    pub placement: Placement,
    /// The effective reference rect ([`Inline`] may narrow it).
    pub reference: Rect,
    /// Tentative top-left corner of the floating element.
    pub point: Point,
    /// Middleware-recorded data.
    pub data: PositionData,
}

impl PositionState {
    /// The floating element's rect at the current tentative position.
    #[must_use]
    pub fn floating_rect(&self, floating: Size) -> Rect {
        Rect::from_origin_size(self.point, floating)
    }
}

/// Outcome of one middleware step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    /// Keep running the remaining steps.
    Continue,
    /// Re-run the pipeline from the top with a different placement.
    Restart {
        /// The placement for the next pass.
        placement: Placement,
    },
}

/// One adjustment step in the placement pipeline.
pub trait Middleware {
    /// Stable name, for diagnostics.
    fn name(&self) -> &'static str;

    /// Refines `state`. Returning [`Control::Restart`] asks for one more
    /// pass with a new placement; the pipeline grants it at most once.
    fn run(&self, input: &PositionInput<'_>, state: &mut PositionState) -> Control;
}

/// Runs the pipeline to a final position.
///
/// An empty `reference` slice (nothing measurable) yields a degenerate state
/// at the boundary origin; callers that can should skip the computation
/// entirely instead (see the registry).
#[must_use]
pub fn compute_position(input: &PositionInput<'_>, middleware: &[&dyn Middleware]) -> PositionState {
    let reference = bounding_rect(input.reference).unwrap_or_else(|| {
        Rect::from_origin_size(input.boundary.origin(), Size::ZERO)
    });
    let mut placement = input.placement;
    let mut restarted = false;
    'pass: loop {
        let mut state = PositionState {
            placement,
            reference,
            point: anchor_point(reference, input.floating, placement, 0.0),
            data: PositionData {
                flipped: restarted,
                ..PositionData::default()
            },
        };
        for step in middleware {
            match step.run(input, &mut state) {
                Control::Continue => {}
                Control::Restart {
                    placement: next_placement,
                } if !restarted => {
                    restarted = true;
                    placement = next_placement;
                    continue 'pass;
                }
                // Restart budget exhausted: finish this pass as-is.
                Control::Restart { .. } => {}
            }
        }
        return state;
    }
}

fn bounding_rect(rects: &[Rect]) -> Option<Rect> {
    let (first, rest) = rects.split_first()?;
    Some(rest.iter().fold(*first, |acc, rect| acc.union(*rect)))
}

/// Pushes the floating element away from the reference along the
/// placement's primary axis.
#[derive(Clone, Copy, Debug)]
pub struct Offset(pub f64);

impl Middleware for Offset {
    fn name(&self) -> &'static str {
        "offset"
    }

    fn run(&self, input: &PositionInput<'_>, state: &mut PositionState) -> Control {
        let gap = primary_gap(
            state.reference,
            state.floating_rect(input.floating),
            state.placement.side,
        );
        state.point = anchor_point(
            state.reference,
            input.floating,
            state.placement,
            gap + self.0,
        );
        state.data.offset = self.0;
        Control::Continue
    }
}

/// Clamps the position so the floating element stays within the boundary,
/// without changing the placement.
#[derive(Clone, Copy, Debug, Default)]
pub struct Shift {
    /// Minimum distance to keep between the element and the boundary edge.
    pub padding: f64,
}

impl Shift {
    /// A shift with the given boundary padding.
    #[must_use]
    pub const fn with_padding(padding: f64) -> Self {
        Self { padding }
    }
}

impl Middleware for Shift {
    fn name(&self) -> &'static str {
        "shift"
    }

    fn run(&self, input: &PositionInput<'_>, state: &mut PositionState) -> Control {
        let bounds = input.boundary.inset(-self.padding);
        // Clamp the far edge first so oversized elements pin to the near
        // edge rather than jittering past it.
        let x = state
            .point
            .x
            .min(bounds.x1 - input.floating.width)
            .max(bounds.x0);
        let y = state
            .point
            .y
            .min(bounds.y1 - input.floating.height)
            .max(bounds.y0);
        let delta = Vec2::new(x - state.point.x, y - state.point.y);
        if delta.x != 0.0 || delta.y != 0.0 {
            state.point = Point::new(x, y);
            state.data.shift = Some(delta);
        }
        Control::Continue
    }
}

/// Swaps to the opposite side when the preferred side overflows the
/// boundary and the opposite side would overflow less.
///
/// The threshold is deliberate: any positive overflow on the primary axis
/// triggers the comparison, and the flip only happens when it is a strict
/// improvement, which (together with the pipeline's single-restart budget)
/// rules out oscillation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Flip;

impl Middleware for Flip {
    fn name(&self) -> &'static str {
        "flip"
    }

    fn run(&self, input: &PositionInput<'_>, state: &mut PositionState) -> Control {
        let rect = state.floating_rect(input.floating);
        let overflow = side_overflow(rect, input.boundary, state.placement.side);
        if overflow <= 0.0 {
            return Control::Continue;
        }
        let gap = primary_gap(state.reference, rect, state.placement.side);
        let opposite = state.placement.opposite();
        let candidate = Rect::from_origin_size(
            anchor_point(state.reference, input.floating, opposite, gap),
            input.floating,
        );
        if side_overflow(candidate, input.boundary, opposite.side) < overflow {
            Control::Restart {
                placement: opposite,
            }
        } else {
            Control::Continue
        }
    }
}

/// Positions an arrow glyph along the floating element's anchored edge so
/// it points at the reference's center.
#[derive(Clone, Copy, Debug)]
pub struct Arrow {
    /// Extent of the arrow glyph along the edge.
    pub size: f64,
    /// Minimum distance from the floating element's corners.
    pub padding: f64,
}

impl Middleware for Arrow {
    fn name(&self) -> &'static str {
        "arrow"
    }

    fn run(&self, input: &PositionInput<'_>, state: &mut PositionState) -> Control {
        let (edge_extent, ideal) = if state.placement.side.is_vertical() {
            (
                input.floating.width,
                state.reference.center().x - state.point.x - self.size / 2.0,
            )
        } else {
            (
                input.floating.height,
                state.reference.center().y - state.point.y - self.size / 2.0,
            )
        };
        let lo = self.padding;
        let hi = (edge_extent - self.size - self.padding).max(lo);
        let offset = ideal.clamp(lo, hi);
        state.data.arrow = Some(ArrowData {
            offset,
            clamped: offset != ideal,
        });
        Control::Continue
    }
}

/// Narrows a multi-rect (inline, line-wrapped) reference to the rect
/// nearest the pointer, so the floating element anchors to the line the
/// user is on instead of the bounding box of all lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inline;

impl Middleware for Inline {
    fn name(&self) -> &'static str {
        "inline"
    }

    fn run(&self, input: &PositionInput<'_>, state: &mut PositionState) -> Control {
        let (Some(pointer), true) = (input.pointer, input.reference.len() > 1) else {
            return Control::Continue;
        };
        let nearest = input.reference.iter().copied().min_by(|a, b| {
            distance_squared(pointer, *a)
                .partial_cmp(&distance_squared(pointer, *b))
                .unwrap_or(core::cmp::Ordering::Equal)
        });
        let Some(nearest) = nearest else {
            return Control::Continue;
        };
        let gap = primary_gap(
            state.reference,
            state.floating_rect(input.floating),
            state.placement.side,
        );
        state.reference = nearest;
        state.point = anchor_point(nearest, input.floating, state.placement, gap);
        Control::Continue
    }
}

/// Squared distance from a point to a rect; zero when the rect contains it.
fn distance_squared(point: Point, rect: Rect) -> f64 {
    let dx = (rect.x0 - point.x).max(point.x - rect.x1).max(0.0);
    let dy = (rect.y0 - point.y).max(point.y - rect.y1).max(0.0);
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::{
        Arrow, Control, Flip, Inline, Middleware, Offset, PositionInput, Shift, compute_position,
    };
    use crate::placement::{Placement, Side};
    use kurbo::{Point, Rect, Size, Vec2};

    const BOUNDARY: Rect = Rect::new(0.0, 0.0, 400.0, 300.0);
    const FLOATING: Size = Size::new(60.0, 40.0);

    fn input<'a>(reference: &'a [Rect], placement: &str) -> PositionInput<'a> {
        PositionInput {
            reference,
            floating: FLOATING,
            placement: placement.parse().unwrap(),
            boundary: BOUNDARY,
            pointer: None,
        }
    }

    #[test]
    fn bare_pipeline_matches_raw_geometry() {
        let reference = [Rect::new(100.0, 100.0, 140.0, 120.0)];
        let state = compute_position(&input(&reference, "bottom-start"), &[]);
        assert_eq!(state.point, Point::new(100.0, 120.0));
        assert!(!state.data.flipped);
    }

    #[test]
    fn offset_pushes_along_the_primary_axis() {
        let reference = [Rect::new(100.0, 100.0, 140.0, 120.0)];
        let state = compute_position(&input(&reference, "bottom-start"), &[&Offset(8.0)]);
        assert_eq!(state.point, Point::new(100.0, 128.0));
        assert_eq!(state.data.offset, 8.0);

        let state = compute_position(&input(&reference, "left"), &[&Offset(8.0)]);
        assert_eq!(state.point.x, 100.0 - 60.0 - 8.0);
    }

    #[test]
    fn shift_clamps_into_the_boundary_without_changing_placement() {
        // Reference hugs the right edge; bottom-start would hang outside.
        let reference = [Rect::new(380.0, 100.0, 395.0, 120.0)];
        let state = compute_position(&input(&reference, "bottom-start"), &[&Shift::default()]);
        assert_eq!(state.placement.side, Side::Bottom);
        assert_eq!(state.point.x, 340.0);
        assert_eq!(state.data.shift, Some(Vec2::new(-40.0, 0.0)));
    }

    #[test]
    fn shift_is_a_no_op_when_nothing_clamps() {
        let reference = [Rect::new(100.0, 100.0, 140.0, 120.0)];
        let bare = compute_position(&input(&reference, "bottom-start"), &[&Offset(8.0)]);
        let shifted = compute_position(
            &input(&reference, "bottom-start"),
            &[&Offset(8.0), &Shift::default()],
        );
        assert_eq!(bare.point, shifted.point);
        assert_eq!(shifted.data.shift, None);
    }

    #[test]
    fn shift_against_a_boundary_of_the_floating_rects_own_size_is_exact() {
        // Round trip: place with an offset, then shift inside a boundary
        // that is exactly the floating rect. Nothing can clamp, so the
        // original offset position comes back untouched.
        let reference = [Rect::new(100.0, 100.0, 140.0, 120.0)];
        let bare = compute_position(&input(&reference, "bottom-start"), &[&Offset(8.0)]);

        let mut inp = input(&reference, "bottom-start");
        inp.boundary = Rect::from_origin_size(bare.point, FLOATING);
        let shifted = compute_position(&inp, &[&Offset(8.0), &Shift::default()]);
        assert_eq!(shifted.point, bare.point);
        assert_eq!(shifted.data.shift, None);
    }

    #[test]
    fn flip_swaps_sides_when_the_preferred_side_overflows() {
        // Near the bottom edge: bottom placement overflows, top fits.
        let reference = [Rect::new(100.0, 250.0, 140.0, 270.0)];
        let state = compute_position(
            &input(&reference, "bottom-start"),
            &[&Offset(8.0), &Flip],
        );
        assert_eq!(state.placement, "top-start".parse().unwrap());
        assert!(state.data.flipped);
        // The offset distance survives the flip.
        assert_eq!(state.point.y, 250.0 - 40.0 - 8.0);
    }

    #[test]
    fn flip_stays_put_when_the_opposite_side_is_worse() {
        // A very short boundary: both sides overflow, bottom less than top.
        let boundary = Rect::new(0.0, 0.0, 400.0, 60.0);
        let reference = [Rect::new(100.0, 10.0, 140.0, 30.0)];
        let mut inp = input(&reference, "bottom-start");
        inp.boundary = boundary;
        let state = compute_position(&inp, &[&Flip]);
        assert_eq!(state.placement.side, Side::Bottom);
        assert!(!state.data.flipped);
    }

    #[test]
    fn flip_then_shift_never_flips_twice() {
        // Cramped boundaries around every placement: run each through
        // flip + shift and assert at most one restart happened (the final
        // placement is either the request or its opposite, never a third
        // pass artifact), and the result is stable under re-running.
        let reference = [Rect::new(300.0, 220.0, 340.0, 240.0)];
        for placement in Placement::ALL {
            let inp = PositionInput {
                reference: &reference,
                floating: Size::new(500.0, 400.0),
                placement,
                boundary: BOUNDARY,
                pointer: None,
            };
            let first = compute_position(&inp, &[&Offset(4.0), &Flip, &Shift::default()]);
            assert!(
                first.placement == placement || first.placement == placement.opposite(),
                "{placement:?} produced {:?}",
                first.placement
            );
            let again = PositionInput {
                placement: first.placement,
                ..inp
            };
            let second = compute_position(&again, &[&Offset(4.0), &Flip, &Shift::default()]);
            assert_eq!(second.placement, first.placement, "oscillated from {placement:?}");
        }
    }

    #[test]
    fn arrow_points_at_the_reference_center() {
        let reference = [Rect::new(100.0, 100.0, 140.0, 120.0)];
        let state = compute_position(
            &input(&reference, "bottom"),
            &[&Arrow {
                size: 10.0,
                padding: 4.0,
            }],
        );
        let arrow = state.data.arrow.unwrap();
        // Floating spans x 90..150; reference center x is 120.
        assert_eq!(arrow.offset, 120.0 - 90.0 - 5.0);
        assert!(!arrow.clamped);
    }

    #[test]
    fn arrow_clamps_to_the_edge_padding() {
        // Shifted hard against the boundary, the ideal arrow position falls
        // outside the floating element; it clamps and says so.
        let reference = [Rect::new(390.0, 100.0, 398.0, 120.0)];
        let state = compute_position(
            &input(&reference, "bottom"),
            &[
                &Shift::default(),
                &Arrow {
                    size: 10.0,
                    padding: 4.0,
                },
            ],
        );
        let arrow = state.data.arrow.unwrap();
        assert_eq!(arrow.offset, 60.0 - 10.0 - 4.0);
        assert!(arrow.clamped);
    }

    #[test]
    fn inline_anchors_to_the_rect_nearest_the_pointer() {
        // Two line boxes of a wrapped inline reference.
        let lines = [
            Rect::new(200.0, 100.0, 360.0, 115.0),
            Rect::new(40.0, 115.0, 180.0, 130.0),
        ];
        let mut inp = input(&lines, "bottom-start");
        inp.pointer = Some(Point::new(60.0, 122.0));
        let state = compute_position(&inp, &[&Inline, &Offset(4.0)]);
        assert_eq!(state.reference, lines[1]);
        assert_eq!(state.point, Point::new(40.0, 134.0));

        // Without a pointer, the bounding box of all lines anchors.
        let state = compute_position(&input(&lines, "bottom-start"), &[&Inline, &Offset(4.0)]);
        assert_eq!(state.point, Point::new(40.0, 134.0));
        assert_eq!(state.reference, lines[0].union(lines[1]));
    }

    #[test]
    fn an_unmeasurable_reference_degenerates_quietly() {
        let state = compute_position(&input(&[], "bottom-start"), &[&Shift::default()]);
        assert!(state.point.x.is_finite() && state.point.y.is_finite());
    }

    #[test]
    fn middleware_names_are_stable() {
        let steps: [&dyn Middleware; 5] = [
            &Inline,
            &Offset(0.0),
            &Flip,
            &Shift::default(),
            &Arrow {
                size: 8.0,
                padding: 0.0,
            },
        ];
        let names: alloc::vec::Vec<_> = steps.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["inline", "offset", "flip", "shift", "arrow"]);
    }

    #[test]
    fn restart_control_compares() {
        let restart = Control::Restart {
            placement: "top".parse().unwrap(),
        };
        assert_ne!(restart, Control::Continue);
    }
}
