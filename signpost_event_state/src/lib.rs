// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=signpost_event_state --heading-base-level=0

//! Signpost Event State: pointer drag tracking for navigation UI.
//!
//! This crate turns raw pointer events into normalized drag deltas for a single
//! tracked element, such as the handle of a collapsible sidebar. It is split in
//! two layers:
//!
//! - `drag::DragState`: pure bookkeeping. Start at a position, feed positions,
//!   get per-sample deltas, running totals, and the direction of travel.
//! - `drag::DragTracker`: the `Idle → Dragging → Idle` state machine bound to
//!   one element, including listener re-targeting and the platform overrides
//!   needed to keep a drag alive.
//!
//! Platform specifics live behind two small traits in [`capture`]:
//! [`capture::PointerCapability`] (release implicit pointer capture, suppress the
//! default `pointercancel` behavior) and [`capture::ListenerRegistry`] (attach and
//! detach the tracker's listeners on an element). Each UI toolkit implements
//! them once.
//!
//! ## Drag Operations
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use signpost_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 10.0));
//!
//! let details = drag.update(Point::new(15.0, 12.0)).unwrap();
//! assert_eq!(details.delta.x, 5.0);
//! assert_eq!(details.total.y, 2.0);
//! assert_eq!(details.direction_x, 1);
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag tracking (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod capture;
#[cfg(feature = "drag")]
pub mod drag;
