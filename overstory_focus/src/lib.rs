// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Focus: keeping keyboard focus where an overlay needs it.
//!
//! Three cooperating pieces:
//!
//! - A [`TabScope`] is a snapshot of the focusable descendants of a
//!   container, with their bounds and tab-order properties. Hosts rebuild it
//!   from the live tree on every key press, so content that appears or
//!   disappears while an overlay is open is always navigated correctly.
//! - A [`TrapSession`] confines Tab/Shift+Tab cycling to a container while
//!   active, remembers what was focused beforehand, and on deactivation
//!   tells the host where (and after how long) to restore focus.
//! - [`rove`] implements roving arrow-key navigation between siblings, with
//!   orientation, right-to-left mirroring, and optional wraparound.
//!
//! Focus itself lives in the host: every function here returns the key of
//! the node that *should* receive focus, and the host moves it. Nothing in
//! this crate can lose focus on its own.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use overstory_focus::{TabDirection, TabScope, TabStop, TrapSession, scope_tab};
//!
//! let stops = vec![
//!     TabStop::new(1_u32, Rect::new(0.0, 0.0, 10.0, 10.0)),
//!     TabStop::new(2_u32, Rect::new(0.0, 20.0, 10.0, 30.0)),
//! ];
//! let scope = TabScope { stops: &stops };
//!
//! let mut trap = TrapSession::activate(100_u32, Some(50));
//! // Tab from the last stop wraps to the first while the trap is active.
//! assert_eq!(
//!     trap.handle_tab(&scope, Some(2), TabDirection::Forward),
//!     Some(1)
//! );
//!
//! // Closing the overlay restores focus to where it was, slightly delayed
//! // so the restore does not race the host's own focus side effects.
//! let restore = trap.deactivate(true).unwrap();
//! assert_eq!(restore.target, 50);
//! # let _ = scope_tab(&scope, Some(1), TabDirection::Backward);
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

mod roving;
mod scope;
mod trap;

pub use roving::{ArrowKey, Orientation, ReadingDirection, RovingMove, RovingOptions, rove};
pub use scope::{TabDirection, TabScope, TabStop, scope_tab};
pub use trap::{FocusRestore, InitialFocus, RETURN_FOCUS_DELAY_MS, TrapSession};
