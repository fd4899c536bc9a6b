// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Roving arrow-key navigation between siblings.

use crate::scope::{TabDirection, TabScope};

/// Which axis the arrow keys navigate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Up/Down move between siblings; Left/Right are ignored.
    Vertical,
    /// Left/Right move between siblings; Up/Down are ignored.
    Horizontal,
}

/// Text direction, mirroring Left/Right semantics in horizontal groups.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ReadingDirection {
    /// Left-to-right: Right is forward.
    Ltr,
    /// Right-to-left: Left is forward.
    Rtl,
}

/// The arrow key that was pressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
}

/// Configuration for one roving group.
#[derive(Copy, Clone, Debug)]
pub struct RovingOptions {
    /// The navigated axis.
    pub orientation: Orientation,
    /// Mirrors Left/Right in horizontal groups.
    pub direction: ReadingDirection,
    /// Whether navigation wraps at the group's edges.
    pub wrap: bool,
    /// Whether moving focus should also activate (select) the item.
    pub activate_on_focus: bool,
}

impl Default for RovingOptions {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            direction: ReadingDirection::Ltr,
            wrap: true,
            activate_on_focus: false,
        }
    }
}

/// A focus move the host should perform.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RovingMove<K> {
    /// The sibling to focus.
    pub to: K,
    /// Whether the host should also activate the item on focus.
    pub activate: bool,
}

/// Maps an arrow key onto a traversal direction for the given axis.
///
/// Keys on the other axis return `None` so the host can let them fall
/// through (for example to a nested horizontal group inside a vertical
/// menu).
#[must_use]
pub fn resolve_step(
    key: ArrowKey,
    orientation: Orientation,
    direction: ReadingDirection,
) -> Option<TabDirection> {
    match orientation {
        Orientation::Vertical => match key {
            ArrowKey::Down => Some(TabDirection::Forward),
            ArrowKey::Up => Some(TabDirection::Backward),
            ArrowKey::Left | ArrowKey::Right => None,
        },
        Orientation::Horizontal => {
            let forward = match direction {
                ReadingDirection::Ltr => ArrowKey::Right,
                ReadingDirection::Rtl => ArrowKey::Left,
            };
            match key {
                ArrowKey::Up | ArrowKey::Down => None,
                k if k == forward => Some(TabDirection::Forward),
                _ => Some(TabDirection::Backward),
            }
        }
    }
}

/// Computes the roving move for an arrow key press.
///
/// `scope` is the group's sibling snapshot and `current` the focused
/// sibling. Returns `None` when the key is off-axis, the scope is empty, or
/// the edge is reached without `wrap` — in all of which the host leaves
/// focus where it is. The DOM's focus remains the only state; nothing here
/// is remembered between presses.
#[must_use]
pub fn rove<K: Copy + Eq>(
    scope: &TabScope<'_, K>,
    current: K,
    key: ArrowKey,
    options: &RovingOptions,
) -> Option<RovingMove<K>> {
    let step = resolve_step(key, options.orientation, options.direction)?;
    let to = scope.step(Some(current), step, options.wrap)?;
    if to == current {
        // Single-item groups wrap onto themselves; that is not a move.
        return None;
    }
    Some(RovingMove {
        to,
        activate: options.activate_on_focus,
    })
}
