// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor registration on a shared intersection source and threshold filtering.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// Read-only geometry of rendered anchors.
pub trait AnchorLayout {
    /// Current top edge of the anchor `id` relative to the viewport, or `None`
    /// if no such anchor has been rendered.
    fn anchor_top(&self, id: &str) -> Option<f64>;

    /// Returns `true` if the anchor `id` exists.
    fn has_anchor(&self, id: &str) -> bool {
        self.anchor_top(id).is_some()
    }
}

/// The platform's single shared intersection-detection facility.
///
/// On the web this wraps one `IntersectionObserver`; `watch` and `unwatch` map to
/// `observe` and `unobserve` on it.
pub trait IntersectionSource {
    /// Starts delivering notifications for `id` around `threshold`.
    fn watch(&mut self, id: &str, threshold: f64);

    /// Stops delivering notifications for `id`.
    fn unwatch(&mut self, id: &str);
}

/// A visibility notification for one anchor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityEvent {
    /// Anchor id (the section slug).
    pub element_id: String,
    /// Visible fraction of the anchor, `0.0..=1.0`.
    pub intersection_ratio: f64,
    /// Top edge of the anchor's bounding box when the notification was taken.
    pub bounding_top: f64,
}

impl VisibilityEvent {
    /// Creates an event.
    #[must_use]
    pub fn new(element_id: impl Into<String>, intersection_ratio: f64, bounding_top: f64) -> Self {
        Self {
            element_id: element_id.into(),
            intersection_ratio,
            bounding_top,
        }
    }
}

#[derive(Clone, Debug)]
struct Registration {
    threshold: f64,
    // `None` until the first notification arrives.
    above: Option<bool>,
}

impl Registration {
    fn is_above(&self, ratio: f64) -> bool {
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

/// Registry of observed anchors sharing one [`IntersectionSource`].
///
/// Raw notifications are passed through [`ViewportObserver::process`], which
/// forwards the first notification for each anchor and afterwards only those
/// that cross the anchor's threshold. Notifications for unregistered ids are
/// dropped. Events for different anchors carry no ordering guarantee.
#[derive(Clone, Debug, Default)]
pub struct ViewportObserver {
    registrations: HashMap<String, Registration>,
}

impl ViewportObserver {
    /// Creates an observer with no registrations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the anchor `id`.
    ///
    /// Returns `false` and does nothing if the anchor is not rendered yet; callers
    /// register after the document has been rendered. Observing an id that is
    /// already registered with the same threshold is a no-op.
    pub fn observe<L, S>(&mut self, id: &str, threshold: f64, layout: &L, source: &mut S) -> bool
    where
        L: AnchorLayout + ?Sized,
        S: IntersectionSource + ?Sized,
    {
        let present = layout.has_anchor(id);
        self.register(id, threshold, present, source)
    }

    /// Like [`ViewportObserver::observe`], for hosts that provide both layout and
    /// the intersection source.
    pub fn observe_in<H>(&mut self, id: &str, threshold: f64, host: &mut H) -> bool
    where
        H: AnchorLayout + IntersectionSource + ?Sized,
    {
        let present = host.has_anchor(id);
        self.register(id, threshold, present, host)
    }

    fn register<S>(&mut self, id: &str, threshold: f64, present: bool, source: &mut S) -> bool
    where
        S: IntersectionSource + ?Sized,
    {
        if !present {
            tracing::warn!(id, "not observing missing anchor");
            return false;
        }
        if let Some(existing) = self.registrations.get_mut(id) {
            if existing.threshold == threshold {
                return true;
            }
            source.unwatch(id);
            source.watch(id, threshold);
            existing.threshold = threshold;
            existing.above = None;
            return true;
        }
        source.watch(id, threshold);
        self.registrations.insert(
            String::from(id),
            Registration {
                threshold,
                above: None,
            },
        );
        true
    }

    /// Removes the registration for `id`. Returns `false` if it was not registered.
    pub fn unobserve<S>(&mut self, id: &str, source: &mut S) -> bool
    where
        S: IntersectionSource + ?Sized,
    {
        if self.registrations.remove(id).is_none() {
            return false;
        }
        source.unwatch(id);
        true
    }

    /// Removes every registration. Returns how many were released.
    pub fn disconnect<S>(&mut self, source: &mut S) -> usize
    where
        S: IntersectionSource + ?Sized,
    {
        let ids: Vec<String> = self.registrations.drain().map(|(id, _)| id).collect();
        for id in &ids {
            source.unwatch(id);
        }
        ids.len()
    }

    /// Filters a raw notification down to a threshold crossing.
    pub fn process(&mut self, event: VisibilityEvent) -> Option<VisibilityEvent> {
        let registration = self.registrations.get_mut(event.element_id.as_str())?;
        let above = registration.is_above(event.intersection_ratio);
        if registration.above == Some(above) {
            return None;
        }
        registration.above = Some(above);
        Some(event)
    }

    /// Returns `true` if `id` is registered.
    #[must_use]
    pub fn is_observing(&self, id: &str) -> bool {
        self.registrations.contains_key(id)
    }

    /// Number of registered anchors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}
