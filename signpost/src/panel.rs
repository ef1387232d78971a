// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sidebar width driven by a drag handle.

use kurbo::Point;
use signpost_event_state::capture::{ListenerRegistry, PointerCapability, PointerId};
use signpost_event_state::drag::DragTracker;

use crate::PanelConfig;

/// A resizable, collapsible sidebar controlled by one drag handle.
///
/// Horizontal drag displacement is added to the width captured at press time
/// and clamped to the configured range. An inverted range collapses to
/// `min_width`; a NaN minimum reads as `0.0` and a NaN maximum as unbounded.
/// Releasing below [`PanelConfig::collapse_below`] collapses the panel; any
/// later press expands it again from the minimum width.
#[derive(Debug)]
pub struct PanelHandle<E> {
    config: PanelConfig,
    min_width: f64,
    max_width: f64,
    tracker: DragTracker<E>,
    width: f64,
    start_width: f64,
    raw_width: f64,
    collapsed: bool,
}

impl<E: PartialEq> PanelHandle<E> {
    /// Creates an unbound handle at the configured initial width.
    #[must_use]
    pub fn new(config: PanelConfig) -> Self {
        let (min_width, max_width) = width_range(&config);
        let width = if config.width.is_nan() {
            min_width
        } else {
            config.width.clamp(min_width, max_width)
        };
        Self {
            config,
            min_width,
            max_width,
            tracker: DragTracker::new(),
            width,
            start_width: width,
            raw_width: width,
            collapsed: false,
        }
    }

    /// Binds the handle element. See [`DragTracker::retarget`].
    pub fn bind<R>(&mut self, element: Option<E>, registry: &mut R)
    where
        R: ListenerRegistry<E> + ?Sized,
    {
        self.tracker.retarget(element, registry);
    }

    /// Detaches every listener.
    pub fn release<R>(&mut self, registry: &mut R)
    where
        R: ListenerRegistry<E> + ?Sized,
    {
        self.tracker.release(registry);
    }

    /// Forwards a press. Returns `true` if a resize started.
    pub fn pointer_down<C>(
        &mut self,
        element: &E,
        pointer: PointerId,
        position: Point,
        capability: &mut C,
    ) -> bool
    where
        C: PointerCapability + ?Sized,
    {
        if !self.tracker.pointer_down(element, pointer, position, capability) {
            return false;
        }
        if self.collapsed {
            self.collapsed = false;
            self.width = self.min_width;
        }
        self.start_width = self.width;
        self.raw_width = self.width;
        true
    }

    /// Forwards a move. Returns the new width if it was accepted.
    pub fn pointer_move(&mut self, pointer: PointerId, position: Point) -> Option<f64> {
        let details = self.tracker.pointer_move(pointer, position)?;
        self.raw_width = self.start_width + details.total.x;
        self.width = self.raw_width.clamp(self.min_width, self.max_width);
        Some(self.width)
    }

    /// Forwards a release. Returns `true` if the drag ended.
    pub fn pointer_up(&mut self, pointer: PointerId) -> bool {
        if self.tracker.pointer_up(pointer).is_none() {
            return false;
        }
        if self.raw_width < self.config.collapse_below {
            tracing::debug!(width = self.raw_width, "sidebar collapsed by drag");
            self.collapsed = true;
        }
        true
    }

    /// Forwards a platform cancel; the resize continues.
    pub fn pointer_cancel<C>(&mut self, capability: &mut C)
    where
        C: PointerCapability + ?Sized,
    {
        self.tracker.pointer_cancel(capability);
    }

    /// Current width, ignoring collapse.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Width to lay out: `0.0` when collapsed.
    #[must_use]
    pub fn visible_width(&self) -> f64 {
        if self.collapsed { 0.0 } else { self.width }
    }

    /// Returns `true` if the panel is collapsed.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// Returns `true` while the handle is being dragged.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// The bound handle element, if any.
    #[must_use]
    pub fn element(&self) -> Option<&E> {
        self.tracker.target()
    }
}

/// Orders the configured bounds so `clamp` never sees `min > max` or NaN.
fn width_range(config: &PanelConfig) -> (f64, f64) {
    let min = if config.min_width.is_nan() {
        0.0
    } else {
        config.min_width
    };
    let max = if config.max_width.is_nan() {
        f64::INFINITY
    } else {
        config.max_width
    };
    (min, max.max(min))
}
