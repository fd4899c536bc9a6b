// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small controller that owns the active page and range configuration.

use alloc::vec::Vec;

use crate::range::{PageItem, compress_range};

/// Controller for a paginated view.
///
/// Owns the total page count, the clamped active page, and the compression
/// configuration, and exposes page navigation that reports actual changes.
/// Every mutating operation returns `Some(new_active)` only when the active
/// page really moved, so hosts can forward change notifications without
/// firing on no-op calls.
///
/// Out-of-range requests clamp rather than error: pagination must always
/// render something sane.
#[derive(Clone, Debug)]
pub struct Pagination {
    total: u32,
    active: u32,
    siblings: u32,
    boundaries: u32,
}

impl Pagination {
    /// Creates a controller over `total` pages with one sibling and one
    /// boundary page, starting on page 1.
    #[must_use]
    pub fn new(total: u32) -> Self {
        Self {
            total,
            active: 1,
            siblings: 1,
            boundaries: 1,
        }
    }

    /// Sets how many pages are shown on each side of the active page.
    #[must_use]
    pub fn with_siblings(mut self, siblings: u32) -> Self {
        self.siblings = siblings;
        self
    }

    /// Sets how many pages are always shown at each end of the range.
    #[must_use]
    pub fn with_boundaries(mut self, boundaries: u32) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Sets the initial active page, clamped into bounds.
    #[must_use]
    pub fn starting_on(mut self, page: u32) -> Self {
        self.active = self.clamped(page);
        self
    }

    /// Total number of pages.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// The current active page (1-based).
    #[must_use]
    pub const fn active(&self) -> u32 {
        self.active
    }

    fn clamped(&self, page: u32) -> u32 {
        if self.total == 0 {
            1
        } else {
            page.clamp(1, self.total)
        }
    }

    /// Replaces the total page count, re-clamping the active page.
    ///
    /// Returns `Some(new_active)` if the active page moved as a result.
    pub fn set_total(&mut self, total: u32) -> Option<u32> {
        self.total = total;
        let clamped = self.clamped(self.active);
        if clamped == self.active {
            return None;
        }
        self.active = clamped;
        Some(clamped)
    }

    /// Moves to `page` (clamped). Returns `Some(new_active)` on change.
    pub fn set_page(&mut self, page: u32) -> Option<u32> {
        let clamped = self.clamped(page);
        if clamped == self.active {
            return None;
        }
        self.active = clamped;
        Some(clamped)
    }

    /// Advances one page, stopping at the end.
    pub fn next(&mut self) -> Option<u32> {
        self.set_page(self.active.saturating_add(1))
    }

    /// Steps back one page, stopping at the start.
    pub fn previous(&mut self) -> Option<u32> {
        self.set_page(self.active.saturating_sub(1))
    }

    /// Jumps to the first page.
    pub fn first(&mut self) -> Option<u32> {
        self.set_page(1)
    }

    /// Jumps to the last page.
    pub fn last(&mut self) -> Option<u32> {
        self.set_page(self.total)
    }

    /// The compressed range for the current state.
    #[must_use]
    pub fn range(&self) -> Vec<PageItem> {
        compress_range(self.total, self.active, self.siblings, self.boundaries)
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;
    use crate::range::PageItem;

    #[test]
    fn navigation_reports_only_actual_changes() {
        let mut pages = Pagination::new(3);
        assert_eq!(pages.next(), Some(2));
        assert_eq!(pages.next(), Some(3));
        // Already on the last page.
        assert_eq!(pages.next(), None);
        assert_eq!(pages.previous(), Some(2));
        assert_eq!(pages.first(), Some(1));
        assert_eq!(pages.first(), None);
        assert_eq!(pages.last(), Some(3));
    }

    #[test]
    fn set_page_clamps_out_of_range_requests() {
        let mut pages = Pagination::new(5).starting_on(3);
        assert_eq!(pages.set_page(99), Some(5));
        assert_eq!(pages.set_page(0), Some(1));
        assert_eq!(pages.set_page(0), None);
    }

    #[test]
    fn shrinking_total_reclamps_the_active_page() {
        let mut pages = Pagination::new(10).starting_on(9);
        assert_eq!(pages.set_total(4), Some(4));
        assert_eq!(pages.active(), 4);
        // Growing the total keeps the page where it was.
        assert_eq!(pages.set_total(20), None);
    }

    #[test]
    fn zero_total_renders_nothing_and_ignores_navigation() {
        let mut pages = Pagination::new(0);
        assert!(pages.range().is_empty());
        assert_eq!(pages.next(), None);
        assert_eq!(pages.last(), None);
        assert_eq!(pages.active(), 1);
    }

    #[test]
    fn range_follows_the_active_page() {
        let mut pages = Pagination::new(10);
        assert_eq!(pages.range()[0], PageItem::Page(1));
        pages.last();
        let range = pages.range();
        assert_eq!(range[1], PageItem::Dots);
        assert_eq!(range.last(), Some(&PageItem::Page(10)));
    }
}
