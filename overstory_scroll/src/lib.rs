// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Scroll: smooth, cancellable scroll-into-view.
//!
//! Bringing a highlighted item into view has two halves: a pure computation
//! (how far must the scroll offset move so the item sits at the requested
//! alignment) and an animation session (apply that delta over time, easing
//! along the way, cooperating with user input). This crate provides both,
//! without touching a clock or a frame scheduler — the host supplies
//! millisecond timestamps and drives ticks from its own frame loop.
//!
//! ## Minimal example
//!
//! A [`Scroller`] owns at most one animation session. Starting a new scroll
//! supersedes the previous one, so rapid successive calls settle on the last
//! target rather than a blend:
//!
//! ```rust
//! use overstory_scroll::{Axis, ScrollAlign, Scroller, Span, Viewport};
//!
//! let mut scroller = Scroller::new(Axis::Y).with_duration(100);
//!
//! // Item at offset 400, 30 tall, inside a viewport currently at offset 0.
//! let item = Span::new(400.0, 30.0);
//! let view = Viewport::new(0.0, 200.0);
//! scroller.scroll_into_view(item, view, 0);
//!
//! // Drive it from the host frame loop.
//! let mid = scroller.tick(50).unwrap();
//! assert!(!mid.finished);
//! let last = scroller.tick(100).unwrap();
//! assert!(last.finished);
//! assert_eq!(last.position, 400.0);
//! // The session is over; further ticks are silent.
//! assert!(scroller.tick(150).is_none());
//! ```
//!
//! With `cancelable` set, a real user wheel or touch event reported via
//! [`Scroller::interrupt`] aborts the session where it stands instead of
//! snapping to the target, respecting user intent. Zero duration (or reduced
//! motion) completes on the first tick.
//!
//! This crate is `no_std`.

#![no_std]

mod animate;
mod easing;
mod geometry;

pub use animate::{Axis, Frame, ScrollAnimation, Scroller};
pub use easing::{Easing, EasingFn};
pub use geometry::{ScrollAlign, Span, Viewport, scroll_delta, target_offset};
