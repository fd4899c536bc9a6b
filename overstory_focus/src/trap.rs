// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trap sessions: confine Tab cycling, then give focus back.

use crate::scope::{TabDirection, TabScope, scope_tab};

/// Delay in milliseconds before restored focus should be applied.
///
/// Restoring immediately can race the host's own focus side effects during
/// overlay teardown; a short deferral lets those settle first.
pub const RETURN_FOCUS_DELAY_MS: u64 = 10;

/// Where initial focus should land when a trap activates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum InitialFocus<K> {
    /// Focus this descendant.
    Stop(K),
    /// No focusable descendant; focus the container itself.
    Container,
}

/// A deferred focus restoration produced by deactivating a trap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FocusRestore<K> {
    /// The previously focused node to restore.
    pub target: K,
    /// How long the host should wait before applying it.
    pub delay_ms: u64,
}

/// One activation of a focus trap on a container.
///
/// The session captures the previously focused node once, at activation.
/// While active it answers Tab key presses against a fresh [`TabScope`]
/// snapshot each time, cycling within the container in both directions. A
/// deactivated session is inert: it answers no more key presses and yields
/// its restore target at most once.
#[derive(Clone, Debug)]
pub struct TrapSession<K> {
    container: K,
    return_to: Option<K>,
    return_focus: bool,
    active: bool,
}

impl<K: Copy + Eq> TrapSession<K> {
    /// Activates a trap on `container`, capturing the node that held focus
    /// at that moment.
    #[must_use]
    pub const fn activate(container: K, previously_focused: Option<K>) -> Self {
        Self {
            container,
            return_to: previously_focused,
            return_focus: true,
            active: true,
        }
    }

    /// Disables focus restoration for this session.
    #[must_use]
    pub const fn without_focus_return(mut self) -> Self {
        self.return_focus = false;
        self
    }

    /// The trapped container.
    #[must_use]
    pub const fn container(&self) -> K {
        self.container
    }

    /// Returns `true` while the trap is confining Tab traversal.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Picks the initial focus target for the freshly activated trap.
    ///
    /// Preference order: the designated autofocus stop (wherever it sits in
    /// the scope), then the first tabbable stop, then the container itself if
    /// the host says it can take focus. A container with nothing focusable is
    /// a configuration problem, reported as a non-fatal diagnostic so the
    /// overlay keeps rendering.
    #[must_use]
    pub fn initial_focus(
        &self,
        scope: &TabScope<'_, K>,
        container_focusable: bool,
    ) -> Option<InitialFocus<K>> {
        if let Some(target) = scope.autofocus_target() {
            return Some(InitialFocus::Stop(target));
        }
        if let Some(first) = scope.first() {
            return Some(InitialFocus::Stop(first));
        }
        if container_focusable {
            return Some(InitialFocus::Container);
        }
        log::warn!("focus trap activated on a container with no focusable descendants");
        None
    }

    /// Answers a Tab key press while active.
    ///
    /// `scope` must be a fresh snapshot of the container's tabbable
    /// descendants; `current` is the node that currently holds focus, if it
    /// is one of them. Traversal wraps at both ends. Inactive sessions return
    /// `None` so a late key event cannot move focus.
    #[must_use]
    pub fn handle_tab(
        &self,
        scope: &TabScope<'_, K>,
        current: Option<K>,
        direction: TabDirection,
    ) -> Option<K> {
        if !self.active {
            return None;
        }
        scope_tab(scope, current, direction)
    }

    /// Deactivates the trap.
    ///
    /// Returns the deferred restore if focus return is enabled, a node was
    /// captured at activation, and the host reports it is still attached to
    /// the tree. Subsequent calls return `None`.
    pub fn deactivate(&mut self, captured_still_attached: bool) -> Option<FocusRestore<K>> {
        if !self.active {
            return None;
        }
        self.active = false;
        let target = self.return_to.take()?;
        if !(self.return_focus && captured_still_attached) {
            return None;
        }
        Some(FocusRestore {
            target,
            delay_ms: RETURN_FOCUS_DELAY_MS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{FocusRestore, InitialFocus, RETURN_FOCUS_DELAY_MS, TrapSession};
    use crate::scope::{TabDirection, TabScope, TabStop};
    use alloc::vec;
    use kurbo::Rect;

    fn row(id: u32, y: f64) -> TabStop<u32> {
        TabStop::new(id, Rect::new(0.0, y, 10.0, y + 10.0))
    }

    #[test]
    fn initial_focus_prefers_the_autofocus_stop() {
        // The autofocus flag wins even when the stop is not first in the
        // scope.
        let stops = vec![row(1, 0.0), row(2, 20.0).autofocus(), row(3, 40.0)];
        let scope = TabScope { stops: &stops };
        let trap = TrapSession::activate(100_u32, None);
        assert_eq!(
            trap.initial_focus(&scope, false),
            Some(InitialFocus::Stop(2))
        );
    }

    #[test]
    fn initial_focus_falls_back_to_first_then_container() {
        let stops = vec![row(1, 0.0), row(2, 20.0)];
        let scope = TabScope { stops: &stops };
        let trap = TrapSession::activate(100_u32, None);
        assert_eq!(
            trap.initial_focus(&scope, false),
            Some(InitialFocus::Stop(1))
        );

        let empty: TabScope<'_, u32> = TabScope { stops: &[] };
        assert_eq!(
            trap.initial_focus(&empty, true),
            Some(InitialFocus::Container)
        );
        // Nothing focusable at all degrades to no initial focus.
        assert_eq!(trap.initial_focus(&empty, false), None);
    }

    #[test]
    fn tab_cycles_within_the_container() {
        let stops = vec![row(1, 0.0), row(2, 20.0), row(3, 40.0)];
        let scope = TabScope { stops: &stops };
        let trap = TrapSession::activate(100_u32, None);

        assert_eq!(
            trap.handle_tab(&scope, Some(3), TabDirection::Forward),
            Some(1)
        );
        assert_eq!(
            trap.handle_tab(&scope, Some(1), TabDirection::Backward),
            Some(3)
        );
    }

    #[test]
    fn scope_changes_between_presses_are_honored() {
        let trap = TrapSession::activate(100_u32, None);

        let before = vec![row(1, 0.0), row(2, 20.0)];
        let scope = TabScope { stops: &before };
        assert_eq!(
            trap.handle_tab(&scope, Some(1), TabDirection::Forward),
            Some(2)
        );

        // An item appeared while the overlay was open; the next press sees
        // it because the host passes a fresh snapshot.
        let after = vec![row(1, 0.0), row(9, 10.0), row(2, 20.0)];
        let scope = TabScope { stops: &after };
        assert_eq!(
            trap.handle_tab(&scope, Some(1), TabDirection::Forward),
            Some(9)
        );
    }

    #[test]
    fn deactivation_restores_the_captured_node_once() {
        let stops = vec![row(1, 0.0)];
        let scope = TabScope { stops: &stops };
        let mut trap = TrapSession::activate(100_u32, Some(50));

        let restore = trap.deactivate(true);
        assert_eq!(
            restore,
            Some(FocusRestore {
                target: 50,
                delay_ms: RETURN_FOCUS_DELAY_MS
            })
        );
        // The session is spent: no more traversal, no second restore.
        assert!(!trap.is_active());
        assert_eq!(trap.handle_tab(&scope, Some(1), TabDirection::Forward), None);
        assert_eq!(trap.deactivate(true), None);
    }

    #[test]
    fn detached_capture_skips_the_restore() {
        let mut trap = TrapSession::activate(100_u32, Some(50));
        assert_eq!(trap.deactivate(false), None);
    }

    #[test]
    fn focus_return_can_be_disabled() {
        let mut trap = TrapSession::activate(100_u32, Some(50)).without_focus_return();
        assert_eq!(trap.deactivate(true), None);
    }

    #[test]
    fn activation_without_prior_focus_restores_nothing() {
        let mut trap = TrapSession::activate(100_u32, None);
        assert_eq!(trap.deactivate(true), None);
    }
}
