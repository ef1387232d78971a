// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=signpost_scrollspy --heading-base-level=0

//! Signpost Scrollspy: which section is the reader looking at?
//!
//! ## Overview
//!
//! This crate turns per-anchor visibility notifications into a single
//! authoritative **active section**. It does not touch the DOM itself; the host
//! provides geometry through [`AnchorLayout`] and forwards platform intersection
//! notifications as [`VisibilityEvent`]s.
//!
//! ## Pipeline
//!
//! 1) [`ViewportObserver`] keeps one registration per anchor on a single shared
//!    [`IntersectionSource`] and filters raw notifications down to threshold
//!    crossings (default threshold `0.5`).
//! 2) [`ActiveSectionResolver`] throttles those events on the trailing edge
//!    (default window 75 ms), drops zero-ratio events, and when the window
//!    closes runs [`resolve_active`] on the most recent event.
//! 3) The resolved slug is published through [`signpost_outline::Listeners`];
//!    setting the current value again is a no-op.
//!
//! ## Resolution
//!
//! Anchors are scanned in document order starting from the first. The candidate
//! advances while the triggering anchor's top is at or below the scanned
//! anchor's top and stops at the first anchor positioned lower, so the result is
//! the last anchor at or above the triggering one.
//!
//! ```rust
//! use signpost_scrollspy::{AnchorLayout, resolve_active};
//!
//! struct Tops;
//! impl AnchorLayout for Tops {
//!     fn anchor_top(&self, id: &str) -> Option<f64> {
//!         match id {
//!             "intro" => Some(-400.0),
//!             "install" => Some(-20.0),
//!             "usage" => Some(300.0),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let anchors = ["intro", "install", "usage"];
//! assert_eq!(resolve_active(&anchors, -20.0, &Tops), Some("install"));
//! assert_eq!(resolve_active(&anchors, 300.0, &Tops), Some("usage"));
//! ```
//!
//! ## Deep links
//!
//! [`deep_link`] performs the one-time scroll to a URL fragment on load. It
//! bypasses the throttle and degrades to doing nothing when the anchor is absent.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fragment;
mod observer;
mod resolve;
mod resolver;

pub use fragment::{AnchorScroller, DeepLink, deep_link, parse_fragment};
pub use observer::{AnchorLayout, IntersectionSource, ViewportObserver, VisibilityEvent};
pub use resolve::resolve_active;
pub use resolver::{ActiveSectionResolver, Offer, ResolverConfig};
