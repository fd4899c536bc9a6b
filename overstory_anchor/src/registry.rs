// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The overlay registry: per-session measurements and last good positions.
//!
//! A trigger and its floating panel need each other's measurements, but
//! holding direct references in both directions creates ownership cycles.
//! Instead, both sides register against one [`OverlayId`] and write their
//! latest measurement into the registry; position computations read whatever
//! is current. Ids are generational, so a stale id from a torn-down overlay
//! can never alias a reused slot.

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::middleware::{Middleware, PositionInput, PositionState, compute_position};
use crate::placement::Placement;

/// Identifier for one overlay session (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct OverlayId(pub(crate) u32, pub(crate) u32);

impl OverlayId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Most references are a single rect; inline references carry one per line.
type ReferenceRects = SmallVec<[Rect; 1]>;

#[derive(Clone, Debug, Default)]
struct Slot {
    reference: Option<ReferenceRects>,
    floating: Option<Size>,
    position: Option<PositionState>,
}

/// Registry of live overlay sessions.
///
/// Slots are arena-allocated and recycled through a free list with bumped
/// generations, mirroring how long-lived trees hand out node ids.
#[derive(Clone, Debug, Default)]
pub struct OverlayRegistry {
    slots: Vec<Option<Slot>>,
    /// Last generation per slot (persists across frees).
    generations: Vec<u32>,
    free_list: Vec<usize>,
}

impl OverlayRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live overlay sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Returns `true` if no sessions are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Opens a new overlay session with no measurements yet.
    pub fn register(&mut self) -> OverlayId {
        if let Some(idx) = self.free_list.pop() {
            self.generations[idx] += 1;
            self.slots[idx] = Some(Slot::default());
            return OverlayId::new(idx as u32, self.generations[idx]);
        }
        let idx = self.slots.len();
        self.slots.push(Some(Slot::default()));
        self.generations.push(0);
        OverlayId::new(idx as u32, 0)
    }

    /// Closes a session, releasing its slot. Returns `false` for stale ids.
    pub fn deregister(&mut self, id: OverlayId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        true
    }

    /// Returns `true` if `id` names a live session.
    #[must_use]
    pub fn contains(&self, id: OverlayId) -> bool {
        self.slot(id).is_some()
    }

    fn slot(&self, id: OverlayId) -> Option<&Slot> {
        if *self.generations.get(id.idx())? != id.1 {
            return None;
        }
        self.slots.get(id.idx())?.as_ref()
    }

    fn slot_mut(&mut self, id: OverlayId) -> Option<&mut Slot> {
        if *self.generations.get(id.idx())? != id.1 {
            return None;
        }
        self.slots.get_mut(id.idx())?.as_mut()
    }

    /// Records the reference element's client rects, or `None` when it is
    /// currently unmeasurable (detached). Returns `false` for stale ids.
    pub fn set_reference(&mut self, id: OverlayId, rects: Option<&[Rect]>) -> bool {
        let Some(slot) = self.slot_mut(id) else {
            return false;
        };
        slot.reference = rects.map(SmallVec::from_slice);
        true
    }

    /// Records a single-rect reference measurement.
    pub fn set_reference_rect(&mut self, id: OverlayId, rect: Option<Rect>) -> bool {
        match rect {
            Some(rect) => self.set_reference(id, Some(&[rect])),
            None => self.set_reference(id, None),
        }
    }

    /// Records the floating element's size, or `None` while it is unmounted.
    pub fn set_floating(&mut self, id: OverlayId, size: Option<Size>) -> bool {
        let Some(slot) = self.slot_mut(id) else {
            return false;
        };
        slot.floating = size;
        true
    }

    /// The last successfully computed position, if any.
    #[must_use]
    pub fn position(&self, id: OverlayId) -> Option<&PositionState> {
        self.slot(id)?.position.as_ref()
    }

    /// Re-runs the placement pipeline for one session.
    ///
    /// When either side is currently unmeasurable the update is skipped and
    /// the last good position is returned unchanged, so a panel mid-teardown
    /// keeps its place instead of jumping or erroring.
    pub fn reposition(
        &mut self,
        id: OverlayId,
        placement: Placement,
        boundary: Rect,
        pointer: Option<Point>,
        middleware: &[&dyn Middleware],
    ) -> Option<&PositionState> {
        let slot = self.slot_mut(id)?;
        let (Some(reference), Some(floating)) = (&slot.reference, slot.floating) else {
            log::trace!("overlay reposition skipped: measurements incomplete");
            return slot.position.as_ref();
        };
        let input = PositionInput {
            reference,
            floating,
            placement,
            boundary,
            pointer,
        };
        slot.position = Some(compute_position(&input, middleware));
        slot.position.as_ref()
    }
}
