// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tab scopes: ordered snapshots of focusable descendants.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Rect;

/// Direction of a Tab traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TabDirection {
    /// Tab: towards the next stop.
    Forward,
    /// Shift+Tab: towards the previous stop.
    Backward,
}

/// One focusable descendant within a [`TabScope`].
#[derive(Clone, Debug)]
pub struct TabStop<K> {
    /// Identifier for this focusable node.
    pub id: K,
    /// Bounds in the scope's coordinate space, used for reading order.
    pub rect: Rect,
    /// Optional explicit tab-order key; sorts before geometry when present.
    pub order: Option<i32>,
    /// Disabled stops are skipped during traversal.
    pub enabled: bool,
    /// Marks the designated initial-focus target of the container.
    pub autofocus: bool,
}

impl<K> TabStop<K> {
    /// An enabled stop with no explicit order and no autofocus flag.
    #[must_use]
    pub const fn new(id: K, rect: Rect) -> Self {
        Self {
            id,
            rect,
            order: None,
            enabled: true,
            autofocus: false,
        }
    }

    /// Sets an explicit tab-order key.
    #[must_use]
    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }

    /// Marks this stop as the designated initial-focus target.
    #[must_use]
    pub const fn autofocus(mut self) -> Self {
        self.autofocus = true;
        self
    }

    /// Disables this stop.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// A read-only snapshot of the focusable descendants of one container.
///
/// Hosts rebuild the snapshot from the live tree whenever they need a
/// traversal decision; the scope never caches between key presses, which is
/// what keeps dynamic content (items added or removed while an overlay is
/// open) correctly reachable.
#[derive(Clone, Debug)]
pub struct TabScope<'a, K> {
    /// Focusable candidates in the container.
    pub stops: &'a [TabStop<K>],
}

impl<K: Copy + Eq> TabScope<'_, K> {
    /// The designated autofocus stop, regardless of its position in the
    /// scope.
    #[must_use]
    pub fn autofocus_target(&self) -> Option<K> {
        self.stops
            .iter()
            .find(|stop| stop.enabled && stop.autofocus)
            .map(|stop| stop.id)
    }

    /// The first enabled stop in traversal order.
    #[must_use]
    pub fn first(&self) -> Option<K> {
        let order = self.traversal_order();
        order.first().map(|&i| self.stops[i].id)
    }

    /// The last enabled stop in traversal order.
    #[must_use]
    pub fn last(&self) -> Option<K> {
        let order = self.traversal_order();
        order.last().map(|&i| self.stops[i].id)
    }

    /// Indices of enabled stops, sorted by explicit order then reading
    /// order.
    fn traversal_order(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .stops
            .iter()
            .enumerate()
            .filter_map(|(i, stop)| stop.enabled.then_some(i))
            .collect();
        indices.sort_by(|&a, &b| compare_stops(&self.stops[a], &self.stops[b]));
        indices
    }

    /// Steps from `current` in `direction`, wrapping only if `wrap` is set.
    ///
    /// Returns `None` when the scope has no enabled stops, or when the edge
    /// is reached without wrapping. An unknown or absent `current` lands on
    /// the first (forward) or last (backward) stop.
    #[must_use]
    pub fn step(&self, current: Option<K>, direction: TabDirection, wrap: bool) -> Option<K> {
        let order = self.traversal_order();
        if order.is_empty() {
            return None;
        }
        let position = current.and_then(|id| order.iter().position(|&i| self.stops[i].id == id));
        let next = match (direction, position) {
            (TabDirection::Forward, Some(pos)) => {
                if pos + 1 < order.len() {
                    Some(order[pos + 1])
                } else if wrap {
                    Some(order[0])
                } else {
                    None
                }
            }
            (TabDirection::Backward, Some(pos)) => {
                if pos > 0 {
                    Some(order[pos - 1])
                } else if wrap {
                    Some(order[order.len() - 1])
                } else {
                    None
                }
            }
            (TabDirection::Forward, None) => Some(order[0]),
            (TabDirection::Backward, None) => Some(order[order.len() - 1]),
        };
        next.map(|i| self.stops[i].id)
    }
}

/// Tab traversal confined to a scope: always wraps last→first and
/// first→last.
#[must_use]
pub fn scope_tab<K: Copy + Eq>(
    scope: &TabScope<'_, K>,
    current: Option<K>,
    direction: TabDirection,
) -> Option<K> {
    scope.step(current, direction, true)
}

fn compare_stops<K>(a: &TabStop<K>, b: &TabStop<K>) -> Ordering {
    // Honor explicit order first, then fall back to reading order.
    match (a.order, b.order) {
        (Some(ao), Some(bo)) => ao
            .cmp(&bo)
            .then_with(|| compare_rect_reading(&a.rect, &b.rect)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_rect_reading(&a.rect, &b.rect),
    }
}

fn compare_rect_reading(a: &Rect, b: &Rect) -> Ordering {
    const RELATIVE_EPS: f64 = 1e-6;
    let ay = a.y0;
    let by = b.y0;
    if (ay - by).abs() > f64::max(ay.abs(), by.abs()) * RELATIVE_EPS {
        return ay.partial_cmp(&by).unwrap_or(Ordering::Equal);
    }
    a.x0.partial_cmp(&b.x0).unwrap_or(Ordering::Equal)
}
