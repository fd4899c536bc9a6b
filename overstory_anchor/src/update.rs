// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auto-update bookkeeping: which overlays need repositioning, and when.
//!
//! The hub does not observe anything itself. The host wires up its real
//! listeners once (window scroll/resize handlers, resize observers on the
//! reference and floating elements, a revision counter over an explicit
//! dependency list) and forwards each occurrence here. The hub answers with
//! the overlays that subscribed to that source; the host then repositions
//! them through the registry. Unsubscribing on teardown removes all
//! interest, so nothing is ever reported for a closed overlay.

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::registry::OverlayId;

bitflags::bitflags! {
    /// Update sources an overlay can subscribe to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct UpdateSources: u8 {
        /// The window (or root scroll container) scrolled.
        const WINDOW_SCROLL    = 0b0000_0001;
        /// The window was resized.
        const WINDOW_RESIZE    = 0b0000_0010;
        /// The reference element changed size.
        const REFERENCE_RESIZE = 0b0000_0100;
        /// The floating element changed size.
        const FLOATING_RESIZE  = 0b0000_1000;
        /// A value in the overlay's explicit dependency list changed.
        const DEPENDENCIES     = 0b0001_0000;
    }
}

impl Default for UpdateSources {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Clone, Debug)]
struct Watch {
    sources: UpdateSources,
    deps_revision: u64,
}

/// Tracks which overlays want repositioning for which update sources.
#[derive(Clone, Debug, Default)]
pub struct UpdateHub {
    watches: HashMap<OverlayId, Watch>,
}

impl UpdateHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of subscribed overlays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.watches.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.watches.is_empty()
    }

    /// Subscribes an overlay to the given sources, replacing any previous
    /// subscription.
    pub fn subscribe(&mut self, id: OverlayId, sources: UpdateSources) {
        self.watches.insert(
            id,
            Watch {
                sources,
                deps_revision: 0,
            },
        );
    }

    /// Removes an overlay's subscription. Returns `false` if it had none.
    pub fn unsubscribe(&mut self, id: OverlayId) -> bool {
        self.watches.remove(&id).is_some()
    }

    /// Returns `true` if the overlay is subscribed.
    #[must_use]
    pub fn is_subscribed(&self, id: OverlayId) -> bool {
        self.watches.contains_key(&id)
    }

    fn affected(&self, source: UpdateSources) -> Vec<OverlayId> {
        let mut ids: Vec<OverlayId> = self
            .watches
            .iter()
            .filter_map(|(id, watch)| watch.sources.intersects(source).then_some(*id))
            .collect();
        // Hash iteration order is arbitrary; report in registration order so
        // hosts reposition deterministically.
        ids.sort_unstable_by_key(|id| (id.0, id.1));
        ids
    }

    /// Overlays to reposition after a window scroll.
    #[must_use]
    pub fn window_scrolled(&self) -> Vec<OverlayId> {
        self.affected(UpdateSources::WINDOW_SCROLL)
    }

    /// Overlays to reposition after a window resize.
    #[must_use]
    pub fn window_resized(&self) -> Vec<OverlayId> {
        self.affected(UpdateSources::WINDOW_RESIZE)
    }

    /// Returns `true` if a resize of `id`'s reference element warrants a
    /// reposition.
    #[must_use]
    pub fn reference_resized(&self, id: OverlayId) -> bool {
        self.watches
            .get(&id)
            .is_some_and(|watch| watch.sources.contains(UpdateSources::REFERENCE_RESIZE))
    }

    /// Returns `true` if a resize of `id`'s floating element warrants a
    /// reposition.
    #[must_use]
    pub fn floating_resized(&self, id: OverlayId) -> bool {
        self.watches
            .get(&id)
            .is_some_and(|watch| watch.sources.contains(UpdateSources::FLOATING_RESIZE))
    }

    /// Reports the current revision of `id`'s dependency list.
    ///
    /// The host computes a revision (counter or hash) over the explicit
    /// dependency values; any identity change bumps it. Returns `true` when
    /// the overlay subscribed to dependency updates and the revision moved.
    pub fn dependencies_changed(&mut self, id: OverlayId, revision: u64) -> bool {
        let Some(watch) = self.watches.get_mut(&id) else {
            return false;
        };
        if !watch.sources.contains(UpdateSources::DEPENDENCIES) {
            return false;
        }
        if watch.deps_revision == revision {
            return false;
        }
        watch.deps_revision = revision;
        true
    }
}
