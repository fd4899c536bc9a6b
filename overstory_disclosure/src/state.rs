// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controlled/uncontrolled open state.

/// A state change reported by a [`Disclosure`] operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The disclosure went from closed to open.
    Opened,
    /// The disclosure went from open to closed.
    Closed,
}

/// Open/close state with a single ownership rule.
///
/// An *uncontrolled* disclosure owns its boolean: operations mutate it and
/// report the resulting [`Transition`]. A *controlled* disclosure mirrors a
/// value owned by the host; operations report the transition the host should
/// apply but leave the mirrored value untouched until the host confirms it
/// via [`Disclosure::sync`]. Either way, a reported transition means the
/// visible state really changed, never a repeat of the current state.
#[derive(Clone, Debug)]
pub struct Disclosure {
    opened: bool,
    controlled: bool,
}

impl Disclosure {
    /// Creates a disclosure that owns its own state.
    #[must_use]
    pub const fn uncontrolled(initially_open: bool) -> Self {
        Self {
            opened: initially_open,
            controlled: false,
        }
    }

    /// Creates a disclosure mirroring a host-owned value.
    #[must_use]
    pub const fn controlled(opened: bool) -> Self {
        Self {
            opened,
            controlled: true,
        }
    }

    /// The currently visible open state.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.opened
    }

    /// Returns `true` if the host owns the value.
    #[must_use]
    pub const fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Updates the mirrored value from the host.
    ///
    /// Only meaningful for controlled disclosures; uncontrolled ones ignore
    /// it so that internal state stays authoritative.
    pub fn sync(&mut self, opened: bool) {
        if self.controlled {
            self.opened = opened;
        }
    }

    fn transition_to(&mut self, opened: bool) -> Option<Transition> {
        if self.opened == opened {
            return None;
        }
        if !self.controlled {
            self.opened = opened;
        }
        Some(if opened {
            Transition::Opened
        } else {
            Transition::Closed
        })
    }

    /// Requests the open state. Reports `Opened` only if currently closed.
    pub fn open(&mut self) -> Option<Transition> {
        self.transition_to(true)
    }

    /// Requests the closed state. Reports `Closed` only if currently open.
    pub fn close(&mut self) -> Option<Transition> {
        self.transition_to(false)
    }

    /// Flips the state, evaluated against the state at call time.
    pub fn toggle(&mut self) -> Option<Transition> {
        self.transition_to(!self.opened)
    }
}

#[cfg(test)]
mod tests {
    use super::{Disclosure, Transition};

    #[test]
    fn uncontrolled_reports_each_actual_change_once() {
        let mut state = Disclosure::uncontrolled(false);
        assert!(!state.is_open());
        assert_eq!(state.open(), Some(Transition::Opened));
        assert!(state.is_open());
        assert_eq!(state.open(), None);
        assert_eq!(state.close(), Some(Transition::Closed));
        assert_eq!(state.close(), None);
    }

    #[test]
    fn toggle_uses_state_at_call_time() {
        let mut state = Disclosure::uncontrolled(false);
        assert_eq!(state.toggle(), Some(Transition::Opened));
        assert_eq!(state.toggle(), Some(Transition::Closed));
        assert_eq!(state.toggle(), Some(Transition::Opened));
        assert!(state.is_open());
    }

    #[test]
    fn controlled_never_self_mutates() {
        let mut state = Disclosure::controlled(false);
        assert_eq!(state.open(), Some(Transition::Opened));
        // The visible value is still the host's until it syncs.
        assert!(!state.is_open());
        // Host applied the change.
        state.sync(true);
        assert!(state.is_open());
        assert_eq!(state.open(), None);
        assert_eq!(state.close(), Some(Transition::Closed));
        assert!(state.is_open());
    }

    #[test]
    fn sync_is_ignored_when_uncontrolled() {
        let mut state = Disclosure::uncontrolled(true);
        state.sync(false);
        assert!(state.is_open());
    }
}
