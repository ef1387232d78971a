// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=signpost_timing --heading-base-level=0

//! Signpost Timing: host-driven throttling for bursty UI event streams.
//!
//! The crate never reads a clock and never spawns anything. Hosts pass a
//! monotonic timestamp in milliseconds to every call and arm a single platform
//! timer for [`Throttle::deadline`]; when it fires they call [`Throttle::poll`].
//!
//! [`Throttle`] is a **trailing-edge** coalescing queue: the first value pushed
//! into an idle throttle opens a window of fixed length, later values in the same
//! window replace the pending one, and the most recent value is released once
//! when the window closes. Nothing is released at the leading edge.
//!
//! ```rust
//! use signpost_timing::{PushOutcome, Throttle};
//!
//! let mut throttle = Throttle::new(75);
//!
//! // A burst of three values within one window.
//! assert_eq!(throttle.push("a", 1_000), PushOutcome::Scheduled { deadline: 1_075 });
//! assert_eq!(throttle.push("b", 1_020), PushOutcome::Coalesced);
//! assert_eq!(throttle.push("c", 1_050), PushOutcome::Coalesced);
//!
//! // Too early: nothing yet.
//! assert_eq!(throttle.poll(1_060), None);
//!
//! // The window closes and only the latest value comes out.
//! assert_eq!(throttle.poll(1_075), Some("c"));
//! assert_eq!(throttle.poll(2_000), None);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// Milliseconds on the host's monotonic clock.
pub type Millis = u64;

/// What happened to a value handed to [`Throttle::push`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PushOutcome {
    /// The throttle was idle; a new window was opened.
    ///
    /// The host should arm a timer for `deadline` (if it has none pending).
    Scheduled {
        /// When the window closes.
        deadline: Millis,
    },
    /// A window was already open; the value replaced the pending one.
    Coalesced,
}

/// Trailing-edge throttle holding at most one pending value.
///
/// Within a window, only the most recently pushed value survives. The value is
/// released exactly once per window by [`Throttle::poll`], so a burst of any
/// length produces a single release carrying the newest data.
#[derive(Clone, Debug)]
pub struct Throttle<T> {
    window: Millis,
    pending: Option<Pending<T>>,
    released: u64,
}

#[derive(Clone, Debug)]
struct Pending<T> {
    value: T,
    deadline: Millis,
    coalesced: u32,
}

impl<T> Throttle<T> {
    /// Creates an idle throttle with the given window length.
    #[must_use]
    pub const fn new(window: Millis) -> Self {
        Self {
            window,
            pending: None,
            released: 0,
        }
    }

    /// Returns the window length.
    #[must_use]
    pub fn window(&self) -> Millis {
        self.window
    }

    /// Changes the window length. An open window keeps its original deadline.
    pub fn set_window(&mut self, window: Millis) {
        self.window = window;
    }

    /// Offers a value at time `now`.
    pub fn push(&mut self, value: T, now: Millis) -> PushOutcome {
        match &mut self.pending {
            Some(pending) => {
                pending.value = value;
                pending.coalesced = pending.coalesced.saturating_add(1);
                PushOutcome::Coalesced
            }
            None => {
                let deadline = now.saturating_add(self.window);
                self.pending = Some(Pending {
                    value,
                    deadline,
                    coalesced: 0,
                });
                PushOutcome::Scheduled { deadline }
            }
        }
    }

    /// Releases the pending value if its window has closed by `now`.
    pub fn poll(&mut self, now: Millis) -> Option<T> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.deadline <= now);
        if !due {
            return None;
        }
        let pending = self.pending.take()?;
        self.released += 1;
        Some(pending.value)
    }

    /// Releases the pending value immediately, regardless of the deadline.
    pub fn flush(&mut self) -> Option<T> {
        let pending = self.pending.take()?;
        self.released += 1;
        Some(pending.value)
    }

    /// Drops the pending value without releasing it. Returns `true` if one was dropped.
    ///
    /// Hosts call this on teardown so no late release reaches a dead view.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// When the open window closes, if one is open.
    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Returns `true` while a value is waiting for its window to close.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The value that would be released next, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.pending.as_ref().map(|pending| &pending.value)
    }

    /// How many values were replaced in the open window.
    #[must_use]
    pub fn coalesced(&self) -> u32 {
        self.pending.as_ref().map_or(0, |pending| pending.coalesced)
    }

    /// Total number of values released since creation.
    #[must_use]
    pub fn released(&self) -> u64 {
        self.released
    }
}
