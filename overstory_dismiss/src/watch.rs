// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dismiss watch: tracked nodes, event kinds, and verdicts.

use smallvec::SmallVec;

bitflags::bitflags! {
    /// Event kinds a [`DismissWatch`] reacts to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InteractionKinds: u8 {
        /// Primary pointer pressed (mouse or pen).
        const POINTER_DOWN = 0b0000_0001;
        /// Primary pointer released.
        const POINTER_UP   = 0b0000_0010;
        /// Touch contact started.
        const TOUCH_START  = 0b0000_0100;
        /// Touch contact ended.
        const TOUCH_END    = 0b0000_1000;
    }
}

impl Default for InteractionKinds {
    /// Overlays dismiss on press, not release, so a drag that ends outside
    /// does not close them.
    fn default() -> Self {
        Self::POINTER_DOWN | Self::TOUCH_START
    }
}

/// One host-resolved interaction to be judged.
///
/// `path` is the root→target chain of node keys for the event target, as
/// produced by the host's hit testing. The two flags carry per-target state
/// the engine cannot know: whether the target is still attached to the tree
/// (elements can be removed between the event and this check), and whether
/// it carries the explicit "ignore outside interactions" marker.
#[derive(Clone, Copy, Debug)]
pub struct Interaction<'a, K> {
    /// The kind of event that occurred. Exactly one bit should be set.
    pub kind: InteractionKinds,
    /// Root→target path of the event target.
    pub path: &'a [K],
    /// Whether the target is still attached to the tree.
    pub attached: bool,
    /// Whether the target opted out of dismissing overlays.
    pub ignored: bool,
}

impl<'a, K> Interaction<'a, K> {
    /// An attached, unmarked interaction of the given kind.
    #[must_use]
    pub const fn new(kind: InteractionKinds, path: &'a [K]) -> Self {
        Self {
            kind,
            path,
            attached: true,
            ignored: false,
        }
    }

    /// Marks the target as detached from the tree.
    #[must_use]
    pub const fn detached(mut self) -> Self {
        self.attached = false;
        self
    }

    /// Marks the target as carrying the ignore marker.
    #[must_use]
    pub const fn ignoring_dismiss(mut self) -> Self {
        self.ignored = true;
        self
    }
}

/// The outcome of judging one interaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Outside every tracked node: the overlay should dismiss.
    Outside,
    /// Inside a tracked node; no dismissal.
    Inside,
    /// The target opted out of dismissing overlays.
    Ignored,
    /// The target left the tree before the check ran; treated as noise.
    Detached,
    /// An event kind this watch does not react to.
    Unwatched,
}

impl Verdict {
    /// Returns `true` if the overlay should dismiss.
    #[must_use]
    pub const fn should_dismiss(self) -> bool {
        matches!(self, Self::Outside)
    }
}

/// Decides whether interactions land outside an overlay.
///
/// The overlay's own root is always tracked. Additional nodes registered via
/// [`DismissWatch::track`] extend the inside region; removing a node with
/// [`DismissWatch::untrack`] shrinks it again (the root cannot be removed).
#[derive(Clone, Debug)]
pub struct DismissWatch<K> {
    root: K,
    extra: SmallVec<[K; 2]>,
    kinds: InteractionKinds,
}

impl<K: Copy + Eq> DismissWatch<K> {
    /// Creates a watch over the overlay rooted at `root`, reacting to the
    /// default event kinds.
    #[must_use]
    pub fn new(root: K) -> Self {
        Self::with_kinds(root, InteractionKinds::default())
    }

    /// Creates a watch reacting to the given event kinds.
    #[must_use]
    pub fn with_kinds(root: K, kinds: InteractionKinds) -> Self {
        Self {
            root,
            extra: SmallVec::new(),
            kinds,
        }
    }

    /// The event kinds this watch reacts to.
    #[must_use]
    pub const fn kinds(&self) -> InteractionKinds {
        self.kinds
    }

    /// Tracks an additional node (for example a portal-mounted panel).
    pub fn track(&mut self, node: K) {
        if node != self.root && !self.extra.contains(&node) {
            self.extra.push(node);
        }
    }

    /// Stops tracking a previously tracked node.
    pub fn untrack(&mut self, node: K) {
        self.extra.retain(|tracked| *tracked != node);
    }

    /// Returns `true` if `node` is the root or a tracked extra.
    #[must_use]
    pub fn is_tracked(&self, node: K) -> bool {
        node == self.root || self.extra.contains(&node)
    }

    /// Judges one interaction.
    ///
    /// The checks run in precedence order: unwatched event kinds first, then
    /// detached targets, then the ignore marker, then containment. An ignored
    /// target never dismisses even when it lies outside every tracked node.
    #[must_use]
    pub fn observe(&self, interaction: &Interaction<'_, K>) -> Verdict {
        if !self.kinds.intersects(interaction.kind) {
            return Verdict::Unwatched;
        }
        if !interaction.attached {
            return Verdict::Detached;
        }
        if interaction.ignored {
            return Verdict::Ignored;
        }
        let inside = interaction.path.iter().any(|node| self.is_tracked(*node));
        if inside { Verdict::Inside } else { Verdict::Outside }
    }
}
