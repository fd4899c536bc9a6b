// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover-intent timers: delayed open/close with superseding requests.

/// The delayed operation a [`HoverIntent`] resolves to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Open the overlay.
    Open,
    /// Close the overlay.
    Close,
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    intent: Intent,
    deadline: u64,
}

/// Deadline-based hover intent with independent open and close delays.
///
/// At most one intent is pending at a time: a new open request supersedes a
/// pending close and vice versa. Timestamps are caller-supplied milliseconds
/// (any monotonic origin); the host polls with its timer or frame clock and
/// applies the returned [`Intent`] to its disclosure state. Because the
/// pending deadline lives inside this value, [`HoverIntent::clear`] on
/// teardown structurally prevents anything from firing afterwards.
#[derive(Clone, Debug)]
pub struct HoverIntent {
    open_delay: u64,
    close_delay: u64,
    pending: Option<Pending>,
}

impl HoverIntent {
    /// Creates hover intent with the given delays in milliseconds.
    #[must_use]
    pub const fn new(open_delay: u64, close_delay: u64) -> Self {
        Self {
            open_delay,
            close_delay,
            pending: None,
        }
    }

    /// The configured open delay in milliseconds.
    #[must_use]
    pub const fn open_delay(&self) -> u64 {
        self.open_delay
    }

    /// The configured close delay in milliseconds.
    #[must_use]
    pub const fn close_delay(&self) -> u64 {
        self.close_delay
    }

    fn request(&mut self, intent: Intent, now: u64, delay: u64) -> Option<Intent> {
        if delay == 0 {
            // No delay configured: resolve synchronously and drop whatever
            // was pending.
            self.pending = None;
            return Some(intent);
        }
        self.pending = Some(Pending {
            intent,
            deadline: now.saturating_add(delay),
        });
        None
    }

    /// Schedules an open after the open delay, superseding any pending close.
    ///
    /// With a zero open delay the intent resolves immediately and is
    /// returned; otherwise the caller should poll.
    pub fn request_open(&mut self, now: u64) -> Option<Intent> {
        self.request(Intent::Open, now, self.open_delay)
    }

    /// Schedules a close after the close delay, superseding any pending open.
    pub fn request_close(&mut self, now: u64) -> Option<Intent> {
        self.request(Intent::Close, now, self.close_delay)
    }

    /// Requests the opposite of `currently_open`, respecting the delays.
    pub fn request_toggle(&mut self, currently_open: bool, now: u64) -> Option<Intent> {
        if currently_open {
            self.request_close(now)
        } else {
            self.request_open(now)
        }
    }

    /// The intent currently awaiting its deadline, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Intent> {
        self.pending.map(|p| p.intent)
    }

    /// The deadline of the pending intent, for hosts that schedule a real
    /// timer instead of polling every frame.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.map(|p| p.deadline)
    }

    /// Resolves the pending intent if its deadline has passed.
    ///
    /// Returns the intent at most once; later polls return `None` until a
    /// new request is made.
    pub fn poll(&mut self, now: u64) -> Option<Intent> {
        match self.pending {
            Some(p) if now >= p.deadline => {
                self.pending = None;
                Some(p.intent)
            }
            _ => None,
        }
    }

    /// Drops any pending intent. Idempotent; used on teardown.
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
