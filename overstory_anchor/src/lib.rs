// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Anchor: boundary-aware placement for floating elements.
//!
//! ## Overview
//!
//! This crate computes where a floating panel (dropdown, tooltip, menu)
//! should sit relative to a reference element, and keeps that answer current
//! as the world changes. It is split along the same lines as the problem:
//!
//! - [`placement`] — the twelve canonical side + alignment values, with
//!   opposites and right-to-left mirroring.
//! - [`geometry`] — pure placement arithmetic over [`kurbo::Rect`]s.
//! - [`middleware`] — the adjustment pipeline: [`Offset`](middleware::Offset)
//!   pushes away from the reference, [`Flip`](middleware::Flip) swaps sides
//!   on overflow (at most once per computation),
//!   [`Shift`](middleware::Shift) clamps into the boundary,
//!   [`Arrow`](middleware::Arrow) aims the arrow glyph, and
//!   [`Inline`](middleware::Inline) narrows wrapped-text references to the
//!   line under the pointer.
//! - [`registry`] — arena-style sessions: the trigger and the panel both
//!   write their latest measurements against one
//!   [`OverlayId`](registry::OverlayId) instead of referencing each other,
//!   and the last good position survives a side going unmeasurable.
//! - [`update`] — bookkeeping for when to re-run the pipeline: window
//!   scroll/resize, element resizes, and explicit dependency revisions.
//!
//! The crate never measures anything itself and holds no timers; hosts feed
//! measurements in and apply positions out.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use overstory_anchor::middleware::{Flip, Offset, Shift};
//! use overstory_anchor::registry::OverlayRegistry;
//!
//! let mut registry = OverlayRegistry::new();
//! let overlay = registry.register();
//!
//! // The trigger and the panel each report their own measurements.
//! registry.set_reference_rect(overlay, Some(Rect::new(100.0, 260.0, 140.0, 280.0)));
//! registry.set_floating(overlay, Some(Size::new(120.0, 80.0)));
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 300.0);
//! let state = registry
//!     .reposition(
//!         overlay,
//!         "bottom-start".parse().unwrap(),
//!         viewport,
//!         None,
//!         &[&Offset(4.0), &Flip, &Shift::default()],
//!     )
//!     .unwrap();
//!
//! // Too close to the bottom edge: the panel flipped above the trigger.
//! assert!(state.data.flipped);
//! assert_eq!(state.point.y, 260.0 - 80.0 - 4.0);
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod geometry;
pub mod middleware;
pub mod placement;
pub mod registry;
pub mod update;
