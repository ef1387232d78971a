// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Throttled consumer of visibility events producing the active section.

use alloc::string::String;
use alloc::vec::Vec;

use signpost_outline::{AnchorDepth, Listeners, SectionTree};
use signpost_timing::{Millis, PushOutcome, Throttle};

use crate::{AnchorLayout, VisibilityEvent, resolve_active};

/// Tuning for [`ActiveSectionResolver`] and the observer feeding it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Trailing-edge throttle window in milliseconds.
    pub throttle_window_ms: Millis,
    /// Visible fraction an anchor must cross to produce an event.
    pub threshold: f64,
    /// Which anchors are observed and scanned.
    pub depth: AnchorDepth,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            throttle_window_ms: 75,
            threshold: 0.5,
            depth: AnchorDepth::All,
        }
    }
}

impl ResolverConfig {
    /// Sets the throttle window.
    #[must_use]
    pub fn with_throttle_window(mut self, window: Millis) -> Self {
        self.throttle_window_ms = window;
        self
    }

    /// Sets the visibility threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the anchor depth.
    #[must_use]
    pub fn with_depth(mut self, depth: AnchorDepth) -> Self {
        self.depth = depth;
        self
    }
}

/// What happened to an event handed to [`ActiveSectionResolver::offer`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Offer {
    /// Zero intersection ratio; the event carries no positional signal.
    Ignored,
    /// A throttle window opened; arm a timer for `deadline` and call
    /// [`ActiveSectionResolver::poll`] when it fires.
    Scheduled {
        /// When the window closes.
        deadline: Millis,
    },
    /// The event replaced the pending one in the open window.
    Coalesced,
}

/// Turns a stream of visibility events into a single active section slug.
///
/// At most one slug is active at any time. Events are throttled on the trailing
/// edge: within a window only the newest event survives, and resolution runs
/// once when the window closes. Subscribers are notified only when the active
/// value actually changes.
#[derive(Debug)]
pub struct ActiveSectionResolver {
    config: ResolverConfig,
    anchors: Vec<String>,
    throttle: Throttle<VisibilityEvent>,
    active: Option<String>,
    revision: u64,
    resolutions: u64,
    listeners: Listeners<Option<String>>,
}

impl ActiveSectionResolver {
    /// Creates a resolver with no anchors.
    #[must_use]
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            anchors: Vec::new(),
            throttle: Throttle::new(config.throttle_window_ms),
            active: None,
            revision: 0,
            resolutions: 0,
            listeners: Listeners::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Replaces the anchors scanned during resolution, in document order.
    pub fn set_anchors<I, S>(&mut self, anchors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.anchors = anchors.into_iter().map(Into::into).collect();
    }

    /// Loads the anchors of `tree` at the configured depth.
    pub fn set_tree(&mut self, tree: &SectionTree) {
        self.set_anchors(tree.anchors(self.config.depth));
    }

    /// The anchors scanned during resolution.
    #[must_use]
    pub fn anchors(&self) -> &[String] {
        &self.anchors
    }

    /// Offers a visibility event observed at time `now`.
    pub fn offer(&mut self, event: VisibilityEvent, now: Millis) -> Offer {
        if event.intersection_ratio == 0.0 {
            tracing::trace!(id = event.element_id.as_str(), "ignoring zero-ratio event");
            return Offer::Ignored;
        }
        match self.throttle.push(event, now) {
            PushOutcome::Scheduled { deadline } => Offer::Scheduled { deadline },
            PushOutcome::Coalesced => Offer::Coalesced,
        }
    }

    /// Runs resolution if the throttle window has closed by `now`.
    ///
    /// Returns `true` if the active section changed.
    pub fn poll<L>(&mut self, now: Millis, layout: &L) -> bool
    where
        L: AnchorLayout + ?Sized,
    {
        match self.throttle.poll(now) {
            Some(event) => self.resolve(&event, layout),
            None => false,
        }
    }

    /// Runs resolution on the pending event immediately, ignoring the deadline.
    ///
    /// Returns `true` if the active section changed.
    pub fn flush<L>(&mut self, layout: &L) -> bool
    where
        L: AnchorLayout + ?Sized,
    {
        match self.throttle.flush() {
            Some(event) => self.resolve(&event, layout),
            None => false,
        }
    }

    /// When the open throttle window closes, if one is open.
    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.throttle.deadline()
    }

    /// Drops any pending event. Returns `true` if one was dropped.
    pub fn cancel(&mut self) -> bool {
        self.throttle.cancel()
    }

    /// The active section slug, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Sets the active section directly. Setting the current value is a no-op.
    ///
    /// Returns `true` if the value changed.
    pub fn set_active(&mut self, slug: Option<&str>) -> bool {
        if self.active.as_deref() == slug {
            return false;
        }
        self.active = slug.map(String::from);
        self.revision = self.revision.wrapping_add(1);
        tracing::debug!(active = ?self.active, "active section changed");
        self.listeners.notify(&self.active);
        true
    }

    /// Clears the active section, pending events, and anchors.
    pub fn reset(&mut self) {
        self.cancel();
        self.anchors.clear();
        self.set_active(None);
    }

    /// Monotonic counter bumped whenever the active section changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of times resolution has run.
    #[must_use]
    pub fn resolutions(&self) -> u64 {
        self.resolutions
    }

    /// Mutable access to the change listeners. Listeners receive the new value.
    pub fn listeners_mut(&mut self) -> &mut Listeners<Option<String>> {
        &mut self.listeners
    }

    fn resolve<L>(&mut self, event: &VisibilityEvent, layout: &L) -> bool
    where
        L: AnchorLayout + ?Sized,
    {
        self.resolutions += 1;
        let Some(picked) = resolve_active(&self.anchors, event.bounding_top, layout) else {
            return false;
        };
        tracing::debug!(
            trigger = event.element_id.as_str(),
            picked,
            "resolved active section"
        );
        let picked = String::from(picked);
        self.set_active(Some(&picked))
    }
}

impl Default for ActiveSectionResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}
