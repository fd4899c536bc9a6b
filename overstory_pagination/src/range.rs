// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Range compression: page numbers with ellipsis markers.

use alloc::vec::Vec;

/// One entry in a compressed page range.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PageItem {
    /// A 1-based page number.
    Page(u32),
    /// An ellipsis standing in for a run of omitted pages.
    Dots,
}

impl PageItem {
    /// Returns the page number, or `None` for [`PageItem::Dots`].
    #[must_use]
    pub const fn page(self) -> Option<u32> {
        match self {
            Self::Page(page) => Some(page),
            Self::Dots => None,
        }
    }

    /// Returns `true` if this entry is an ellipsis marker.
    #[must_use]
    pub const fn is_dots(self) -> bool {
        matches!(self, Self::Dots)
    }
}

/// Appends the inclusive run `from..=to` as page entries. Empty if `from > to`.
fn push_run(out: &mut Vec<PageItem>, from: u32, to: u32) {
    for page in from..=to {
        out.push(PageItem::Page(page));
    }
}

/// Compute a dots-compressed page range.
///
/// - `total`: number of pages. Zero yields an empty range.
/// - `active`: the current page, clamped into `[1, total]` before use.
/// - `siblings`: pages shown on each side of the active page.
/// - `boundaries`: pages always shown at each end of the range.
///
/// When `2 * siblings + 3 + 2 * boundaries >= total` the dense range
/// `[1..=total]` is returned and no compression happens. Otherwise the result
/// is the leading boundary run, the sibling window around the active page, and
/// the trailing boundary run, with an ellipsis wherever the gap between runs
/// spans more than one page. A gap of exactly one page shows that page number
/// instead of an ellipsis, so a single page is never hidden behind dots.
///
/// Compressed results have the invariant length `2 * siblings + 3 +
/// 2 * boundaries` regardless of `active`.
#[must_use]
pub fn compress_range(total: u32, active: u32, siblings: u32, boundaries: u32) -> Vec<PageItem> {
    if total == 0 {
        return Vec::new();
    }
    let active = active.clamp(1, total);

    let dense_len = siblings
        .saturating_mul(2)
        .saturating_add(boundaries.saturating_mul(2))
        .saturating_add(3);
    if dense_len >= total {
        let mut out = Vec::with_capacity(total as usize);
        push_run(&mut out, 1, total);
        return out;
    }

    // Compression applies, so `total > 2 * siblings + 2 * boundaries + 3` and
    // the subtractions below cannot underflow.
    let left_sibling = active.saturating_sub(siblings).max(boundaries);
    let right_sibling = active.saturating_add(siblings).min(total - boundaries);
    let show_left_dots = left_sibling > boundaries + 2;
    let show_right_dots = right_sibling < total - (boundaries + 1);

    let mut out = Vec::with_capacity(dense_len as usize);
    if !show_left_dots && show_right_dots {
        // Active page sits inside the leading run; only the right side is
        // truncated.
        let left_run = siblings * 2 + boundaries + 2;
        push_run(&mut out, 1, left_run);
        out.push(PageItem::Dots);
        push_run(&mut out, total - boundaries + 1, total);
    } else if show_left_dots && !show_right_dots {
        let right_run = boundaries + 1 + siblings * 2;
        push_run(&mut out, 1, boundaries);
        out.push(PageItem::Dots);
        push_run(&mut out, total - right_run, total);
    } else {
        push_run(&mut out, 1, boundaries);
        out.push(PageItem::Dots);
        push_run(&mut out, left_sibling, right_sibling);
        out.push(PageItem::Dots);
        push_run(&mut out, total - boundaries + 1, total);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{PageItem, compress_range};
    use alloc::vec;

    fn pages(items: &[PageItem]) -> alloc::vec::Vec<i64> {
        items
            .iter()
            .map(|item| match item {
                PageItem::Page(page) => i64::from(*page),
                PageItem::Dots => -1,
            })
            .collect()
    }

    #[test]
    fn short_ranges_are_dense() {
        // 2 * 1 + 3 + 2 * 1 = 7 >= 7, so no compression.
        let items = compress_range(7, 4, 1, 1);
        assert_eq!(pages(&items), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn zero_total_yields_empty_range() {
        assert!(compress_range(0, 1, 1, 1).is_empty());
    }

    #[test]
    fn right_truncation_at_range_start() {
        let items = compress_range(10, 1, 1, 1);
        assert_eq!(pages(&items), vec![1, 2, 3, 4, 5, -1, 10]);
    }

    #[test]
    fn left_truncation_at_range_end() {
        let items = compress_range(10, 10, 1, 1);
        assert_eq!(pages(&items), vec![1, -1, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn both_sides_truncate_around_the_middle() {
        let items = compress_range(20, 10, 1, 1);
        assert_eq!(pages(&items), vec![1, -1, 9, 10, 11, -1, 20]);
    }

    #[test]
    fn one_page_gap_is_shown_instead_of_dots() {
        // With active = 4 the gap between the boundary run and the sibling
        // window is a single page, which must appear as a number.
        let items = compress_range(10, 4, 1, 1);
        assert_eq!(pages(&items), vec![1, 2, 3, 4, 5, -1, 10]);
        // One step later the gap is two pages and collapses to dots.
        let items = compress_range(10, 5, 1, 1);
        assert_eq!(pages(&items), vec![1, -1, 4, 5, 6, -1, 10]);
    }

    #[test]
    fn active_is_clamped_into_bounds() {
        assert_eq!(compress_range(10, 0, 1, 1), compress_range(10, 1, 1, 1));
        assert_eq!(compress_range(10, 99, 1, 1), compress_range(10, 10, 1, 1));
    }

    #[test]
    fn compressed_length_is_invariant_over_active() {
        for (total, siblings, boundaries) in [(10, 1, 1), (25, 2, 1), (40, 1, 3), (100, 3, 2)] {
            let expected = (2 * siblings + 3 + 2 * boundaries) as usize;
            for active in 1..=total {
                let items = compress_range(total, active, siblings, boundaries);
                assert_eq!(
                    items.len(),
                    expected,
                    "length drifted for total={total} active={active}"
                );
            }
        }
    }

    #[test]
    fn first_and_last_pages_are_always_present() {
        for active in 1..=30 {
            let items = compress_range(30, active, 1, 1);
            assert_eq!(items.first(), Some(&PageItem::Page(1)));
            assert_eq!(items.last(), Some(&PageItem::Page(30)));
        }
    }

    #[test]
    fn zero_boundaries_still_compress() {
        let items = compress_range(20, 10, 1, 0);
        // No boundary runs; dots sit directly at both ends of the window.
        assert_eq!(pages(&items), vec![-1, 9, 10, 11, -1]);
        assert_eq!(items.len(), 2 * 1 + 3 + 2 * 0);
    }

    #[test]
    fn page_item_accessors() {
        assert_eq!(PageItem::Page(3).page(), Some(3));
        assert_eq!(PageItem::Dots.page(), None);
        assert!(PageItem::Dots.is_dots());
        assert!(!PageItem::Page(3).is_dots());
    }
}
