// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation sessions and the scroller that owns them.

use crate::easing::Easing;
use crate::geometry::{ScrollAlign, Span, Viewport, target_offset};

/// The scroll axis a [`Scroller`] drives.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal scrolling.
    X,
    /// Vertical scrolling.
    Y,
}

/// One evaluated animation frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frame {
    /// The scroll offset the host should apply for this frame.
    pub position: f64,
    /// `true` on the terminal frame; the session is over afterwards.
    pub finished: bool,
}

/// A single in-flight scroll animation.
///
/// Pure interpolation state: given a timestamp, [`ScrollAnimation::frame_at`]
/// yields the offset to apply. It holds no cancellation logic of its own —
/// ownership *is* the cancellation mechanism, and [`Scroller`] exercises it
/// by dropping or replacing the session.
#[derive(Clone, Debug)]
pub struct ScrollAnimation {
    start: f64,
    change: f64,
    started_at: u64,
    duration: u64,
    easing: Easing,
}

impl ScrollAnimation {
    /// Creates an animation from `start` moving by `change` over
    /// `duration` milliseconds.
    #[must_use]
    pub const fn new(start: f64, change: f64, started_at: u64, duration: u64, easing: Easing) -> Self {
        Self {
            start,
            change,
            started_at,
            duration,
            easing,
        }
    }

    /// The offset this animation settles on.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.start + self.change
    }

    /// Evaluates the frame for `now`.
    ///
    /// A zero duration completes immediately: the first frame is the target.
    /// Timestamps before `started_at` evaluate as progress zero.
    #[must_use]
    pub fn frame_at(&self, now: u64) -> Frame {
        if self.duration == 0 {
            return Frame {
                position: self.target(),
                finished: true,
            };
        }
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= self.duration {
            return Frame {
                position: self.target(),
                finished: true,
            };
        }
        let t = elapsed as f64 / self.duration as f64;
        Frame {
            position: self.start + self.change * self.easing.apply(t),
            finished: false,
        }
    }
}

/// Drives scroll-into-view animations for one scrollable, one at a time.
///
/// At most one session is live per scroller. Starting a new scroll replaces
/// the previous session outright, so two calls in quick succession settle on
/// the second target rather than a blend of both. User wheel/touch input
/// reported through [`Scroller::interrupt`] aborts a cancelable session
/// without snapping to its target.
#[derive(Clone, Debug)]
pub struct Scroller {
    axis: Axis,
    duration: u64,
    easing: Easing,
    align: ScrollAlign,
    padding: f64,
    cancelable: bool,
    reduced_motion: bool,
    session: Option<ScrollAnimation>,
}

impl Scroller {
    /// Creates a scroller for `axis` with a 250 ms duration, quadratic
    /// easing, and `Start` alignment.
    #[must_use]
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            duration: 250,
            easing: Easing::default(),
            align: ScrollAlign::Start,
            padding: 0.0,
            cancelable: true,
            reduced_motion: false,
            session: None,
        }
    }

    /// Sets the animation duration in milliseconds. Zero jumps immediately.
    #[must_use]
    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the target alignment.
    #[must_use]
    pub fn with_align(mut self, align: ScrollAlign) -> Self {
        self.align = align;
        self
    }

    /// Sets extra padding between the item and the viewport edge.
    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets whether user wheel/touch input aborts the animation.
    #[must_use]
    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// When the environment requests reduced motion, every scroll jumps to
    /// its target on the first tick instead of animating.
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    /// The axis this scroller drives.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    /// Returns `true` while a session is live.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.session.is_some()
    }

    /// Starts scrolling `item` into view, replacing any live session.
    ///
    /// `view` carries the scrollable's current offset and extent on this
    /// scroller's axis; `now` is the session start timestamp.
    pub fn scroll_into_view(&mut self, item: Span, view: Viewport, now: u64) {
        let start = view.offset;
        let change = target_offset(item, view, self.align, self.padding) - start;
        let duration = if self.reduced_motion { 0 } else { self.duration };
        self.session = Some(ScrollAnimation::new(
            start,
            change,
            now,
            duration,
            self.easing,
        ));
    }

    /// Evaluates the next frame, or `None` when no session is live.
    ///
    /// The terminal frame reports `finished` and ends the session, so hosts
    /// can run completion callbacks exactly once.
    pub fn tick(&mut self, now: u64) -> Option<Frame> {
        let frame = self.session.as_ref()?.frame_at(now);
        if frame.finished {
            self.session = None;
        }
        Some(frame)
    }

    /// Aborts the live session, leaving the scroll offset wherever the last
    /// applied frame put it. Idempotent.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Reports real user scroll input (wheel, touch move).
    ///
    /// Aborts the session and returns `true` if this scroller is cancelable;
    /// otherwise the animation keeps running and `false` is returned.
    pub fn interrupt(&mut self) -> bool {
        if self.cancelable && self.session.is_some() {
            self.session = None;
            return true;
        }
        false
    }
}
