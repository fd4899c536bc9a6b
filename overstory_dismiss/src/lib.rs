// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Dismiss: outside-interaction detection for overlays.
//!
//! An open overlay usually closes when the user interacts anywhere outside
//! it. This crate decides whether a pointer or touch event counts as such an
//! outside interaction. It does not observe events itself: the host resolves
//! the event target to a root→target path of node keys (for example from a
//! hit test) and asks the watch for a [`Verdict`].
//!
//! A [`DismissWatch`] tracks the overlay's own root implicitly. Widgets that
//! render parts of themselves out of tree (a portal-mounted panel next to an
//! in-tree trigger) register those extra nodes with
//! [`DismissWatch::track`]; an interaction inside *any* tracked node is not
//! an outside interaction.
//!
//! Individual nodes can be marked to opt out of dismissal entirely (for
//! example a toast region layered over everything). The host surfaces that
//! marker through [`Interaction::ignored`].
//!
//! ## Minimal example
//!
//! ```rust
//! use overstory_dismiss::{DismissWatch, Interaction, InteractionKinds, Verdict};
//!
//! // Overlay rooted at node 7, watching the default event kinds.
//! let watch: DismissWatch<u32> = DismissWatch::new(7);
//!
//! // A pointer-down on some unrelated subtree dismisses…
//! let outside = Interaction::new(InteractionKinds::POINTER_DOWN, &[1, 4, 9]);
//! assert_eq!(watch.observe(&outside), Verdict::Outside);
//!
//! // …while one inside the overlay does not.
//! let inside = Interaction::new(InteractionKinds::POINTER_DOWN, &[1, 7, 12]);
//! assert_eq!(watch.observe(&inside), Verdict::Inside);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod watch;

pub use watch::{DismissWatch, Interaction, InteractionKinds, Verdict};
