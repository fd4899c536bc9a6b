// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Pagination: dots-compressed page ranges.
//!
//! This crate turns `(total, active, siblings, boundaries)` into an ordered
//! sequence of page numbers interspersed with at most two [`PageItem::Dots`]
//! markers, suitable for rendering a fixed-width pagination control.
//!
//! The core guarantee is *length stability*: for a fixed `(total, siblings,
//! boundaries)` configuration that requires compression, the returned sequence
//! has the same length for every active page. Callers can therefore render the
//! control without layout shift as the active page moves.
//!
//! ## Minimal example
//!
//! ```rust
//! use overstory_pagination::{PageItem, compress_range};
//!
//! // Ten pages, one sibling on each side of the active page, one boundary
//! // page at each end.
//! let items = compress_range(10, 1, 1, 1);
//! assert_eq!(
//!     items,
//!     vec![
//!         PageItem::Page(1),
//!         PageItem::Page(2),
//!         PageItem::Page(3),
//!         PageItem::Page(4),
//!         PageItem::Page(5),
//!         PageItem::Dots,
//!         PageItem::Page(10),
//!     ]
//! );
//! ```
//!
//! For stateful consumers, [`Pagination`] wraps the range computation with a
//! clamped active page and `next`/`previous`/`first`/`last` operations:
//!
//! ```rust
//! use overstory_pagination::Pagination;
//!
//! let mut pages = Pagination::new(10);
//! assert_eq!(pages.active(), 1);
//! assert_eq!(pages.next(), Some(2));
//! assert_eq!(pages.last(), Some(10));
//! // Stepping past the end is a no-op rather than an error.
//! assert_eq!(pages.next(), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod range;

pub use controller::Pagination;
pub use range::{PageItem, compress_range};
