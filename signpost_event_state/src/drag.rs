// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag tracking: movement deltas, running totals, and direction of travel.
//!
//! ## Usage
//!
//! 1) Bind a [`DragTracker`] to an element with [`DragTracker::retarget`].
//! 2) Forward `pointerdown` to [`DragTracker::pointer_down`]; the tracker releases
//!    the implicit pointer capture and enters the dragging state.
//! 3) Forward every `pointermove` to [`DragTracker::pointer_move`]; each accepted
//!    move yields one [`DragDetails`] and invokes the `on_drag` callback once.
//! 4) Forward `pointercancel` to [`DragTracker::pointer_cancel`] (the default is
//!    suppressed and the drag continues) and `pointerup` to
//!    [`DragTracker::pointer_up`] to return to idle.
//! 5) On teardown call [`DragTracker::release`].
//!
//! Deltas are measured from the previous sample, not from the start, and the
//! totals are the running sum of those deltas.
//!
//! ## Minimal example
//!
//! ```
//! use core::num::NonZeroU64;
//! use kurbo::Point;
//! use signpost_event_state::capture::{ListenerRegistry, PointerCapability, PointerId};
//! use signpost_event_state::drag::DragTracker;
//!
//! struct Host;
//! impl PointerCapability for Host {
//!     fn suppress_capture(&mut self, _pointer: PointerId) {}
//!     fn suppress_default_cancel(&mut self) {}
//! }
//! impl ListenerRegistry<&'static str> for Host {
//!     fn attach(&mut self, _element: &&'static str) {}
//!     fn detach(&mut self, _element: &&'static str) {}
//! }
//!
//! let mut host = Host;
//! let pointer = NonZeroU64::new(1).unwrap();
//! let mut tracker = DragTracker::new();
//! tracker.retarget(Some("handle"), &mut host);
//!
//! assert!(tracker.pointer_down(&"handle", pointer, Point::new(0.0, 0.0), &mut host));
//! let details = tracker.pointer_move(pointer, Point::new(3.0, 0.0)).unwrap();
//! assert_eq!(details.delta.x, 3.0);
//! assert_eq!(details.direction_x, 1);
//!
//! let total = tracker.pointer_up(pointer).unwrap();
//! assert_eq!(total.x, 3.0);
//! assert!(!tracker.is_dragging());
//! ```

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};

use crate::capture::{ListenerRegistry, PointerCapability, PointerId};

/// One drag sample as reported to consumers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragDetails {
    /// Pointer position of this sample.
    pub position: Point,
    /// Displacement accumulated since the gesture started.
    pub total: Vec2,
    /// Displacement since the previous sample.
    pub delta: Vec2,
    /// Sign of the latest nonzero X delta: `-1`, `0` (no X movement yet) or `1`.
    pub direction_x: i8,
    /// Sign of the latest nonzero Y delta: `-1`, `0` (no Y movement yet) or `1`.
    pub direction_y: i8,
}

/// Tracks drag state for move event processing
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Start position of the drag operation
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during drag
    pub last_pos: Option<Point>,
    total: Vec2,
    direction_x: i8,
    direction_y: i8,
}

impl DragState {
    /// Start tracking a new drag operation from the given position.
    ///
    /// Totals and directions from any previous gesture are discarded.
    pub fn start(&mut self, pos: Point) {
        *self = Self {
            start_pos: Some(pos),
            last_pos: Some(pos),
            ..Self::default()
        };
    }

    /// Feeds a new position and returns the resulting sample.
    ///
    /// Returns `None` when no drag is active.
    pub fn update(&mut self, pos: Point) -> Option<DragDetails> {
        self.start_pos?;
        let last = self.last_pos.replace(pos).unwrap_or(pos);
        let delta = pos - last;
        self.total += delta;
        self.direction_x = sign_or(delta.x, self.direction_x);
        self.direction_y = sign_or(delta.y, self.direction_y);
        Some(DragDetails {
            position: pos,
            total: self.total,
            delta,
            direction_x: self.direction_x,
            direction_y: self.direction_y,
        })
    }

    /// Accumulated displacement, or `None` when no drag is active.
    pub fn total(&self) -> Option<Vec2> {
        self.start_pos.map(|_| self.total)
    }

    /// Get total offset from drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

fn sign_or(value: f64, previous: i8) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        previous
    }
}

type DragCallback = Box<dyn FnMut(&DragDetails)>;

/// `Idle → Dragging → Idle` state machine for one tracked element.
///
/// Only one gesture is tracked at a time: a second press while dragging is
/// ignored, and move/up events from other pointers are ignored.
pub struct DragTracker<E> {
    target: Option<E>,
    pointer: Option<PointerId>,
    state: DragState,
    on_drag: Option<DragCallback>,
}

impl<E: PartialEq> DragTracker<E> {
    /// Creates an unbound, idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: None,
            pointer: None,
            state: DragState::default(),
            on_drag: None,
        }
    }

    /// Installs the callback invoked synchronously for every accepted move.
    pub fn set_on_drag(&mut self, on_drag: impl FnMut(&DragDetails) + 'static) {
        self.on_drag = Some(Box::new(on_drag));
    }

    /// Binds the tracker to `target`, moving listeners from the old element.
    ///
    /// Listeners on the previous element are always detached before new ones are
    /// attached. Re-binding the same element is a no-op, and `None` simply unbinds.
    /// Any in-progress gesture ends.
    pub fn retarget<R>(&mut self, target: Option<E>, registry: &mut R)
    where
        R: ListenerRegistry<E> + ?Sized,
    {
        if self.target == target {
            return;
        }
        if let Some(old) = self.target.take() {
            registry.detach(&old);
        }
        self.reset_gesture();
        if let Some(new) = &target {
            registry.attach(new);
        }
        self.target = target;
    }

    /// Detaches all listeners and unbinds. Used on teardown.
    pub fn release<R>(&mut self, registry: &mut R)
    where
        R: ListenerRegistry<E> + ?Sized,
    {
        self.retarget(None, registry);
    }

    /// The element currently bound, if any.
    #[must_use]
    pub fn target(&self) -> Option<&E> {
        self.target.as_ref()
    }

    /// Handles a press on `element`. Returns `true` if a drag started.
    ///
    /// Presses on other elements, presses while unbound, and presses while a
    /// gesture is already in progress are ignored.
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
        if self.target.as_ref() != Some(element) || self.pointer.is_some() {
            return false;
        }
        capability.suppress_capture(pointer);
        self.pointer = Some(pointer);
        self.state.start(position);
        tracing::trace!(pointer = pointer.get(), "drag started");
        true
    }

    /// Handles a move of `pointer` to `position`.
    ///
    /// Returns the new sample and notifies the `on_drag` callback, or returns
    /// `None` while idle or for a different pointer.
    pub fn pointer_move(&mut self, pointer: PointerId, position: Point) -> Option<DragDetails> {
        if self.pointer != Some(pointer) {
            return None;
        }
        let details = self.state.update(position)?;
        if let Some(on_drag) = &mut self.on_drag {
            on_drag(&details);
        }
        Some(details)
    }

    /// Handles a release. Returns the gesture's total displacement if it ended.
    pub fn pointer_up(&mut self, pointer: PointerId) -> Option<Vec2> {
        if self.pointer != Some(pointer) {
            return None;
        }
        let total = self.state.total();
        self.reset_gesture();
        tracing::trace!(pointer = pointer.get(), "drag ended");
        total
    }

    /// Handles a platform pointer-cancel on the bound element.
    ///
    /// The default behavior is suppressed and the gesture keeps going; it only
    /// ends on [`DragTracker::pointer_up`], re-targeting, or release.
    pub fn pointer_cancel<C>(&mut self, capability: &mut C)
    where
        C: PointerCapability + ?Sized,
    {
        if self.target.is_some() {
            capability.suppress_default_cancel();
        }
    }

    /// Returns `true` between an accepted press and the matching release.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer.is_some()
    }

    /// Displacement accumulated in the current gesture, if dragging.
    #[must_use]
    pub fn total(&self) -> Option<Vec2> {
        self.state.total()
    }

    fn reset_gesture(&mut self) {
        self.pointer = None;
        self.state.end();
    }
}

impl<E: PartialEq> Default for DragTracker<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for DragTracker<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragTracker")
            .field("target", &self.target)
            .field("pointer", &self.pointer)
            .field("state", &self.state)
            .field("on_drag", &self.on_drag.is_some())
            .finish()
    }
}
