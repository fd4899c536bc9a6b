// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Disclosure: the open/close state machine behind overlays.
//!
//! A [`Disclosure`] unifies controlled and uncontrolled open state behind one
//! mutation API. Operations report a [`Transition`] exactly when the visible
//! state actually changes, so hosts can fire `on_open`/`on_close` side effects
//! without guarding against no-op calls themselves:
//!
//! ```rust
//! use overstory_disclosure::{Disclosure, Transition};
//!
//! let mut state = Disclosure::uncontrolled(false);
//! assert_eq!(state.open(), Some(Transition::Opened));
//! // Opening an already-open disclosure reports nothing.
//! assert_eq!(state.open(), None);
//! assert_eq!(state.toggle(), Some(Transition::Closed));
//! ```
//!
//! In *controlled* mode the externally supplied value is authoritative:
//! operations still report the transition the host should apply, but never
//! mutate the internal flag themselves. The host feeds the external value
//! back with [`Disclosure::sync`] whenever it changes.
//!
//! [`HoverIntent`] layers delayed open/close on top, for hover-driven
//! overlays such as tooltips and hover menus. Deadlines are expressed in
//! caller-supplied millisecond timestamps; the host polls with its own timer
//! or frame clock and nothing can fire after [`HoverIntent::clear`]:
//!
//! ```rust
//! use overstory_disclosure::{HoverIntent, Intent};
//!
//! let mut hover = HoverIntent::new(100, 50);
//! assert_eq!(hover.request_open(1_000), None);
//! // A close request before the open delay elapses supersedes it entirely,
//! // so the overlay never opens.
//! assert_eq!(hover.request_close(1_050), None);
//! assert_eq!(hover.poll(1_100), Some(Intent::Close));
//! assert_eq!(hover.poll(2_000), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod hover;
mod state;

pub use hover::{HoverIntent, Intent};
pub use state::{Disclosure, Transition};
