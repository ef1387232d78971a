// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=signpost --heading-base-level=0

//! Signpost: a headless documentation-page navigator.
//!
//! ## Overview
//!
//! [`DocNavigator`] owns the state behind a documentation page with a sidebar
//! table of contents:
//!
//! - the [`SectionTree`] of the loaded [`Document`],
//! - one viewport observation per rendered anchor,
//! - the throttled active-section resolver,
//! - expand/collapse state for top-level branches,
//! - the mobile overlay flag and the current URL fragment,
//! - a resizable sidebar driven by a [`PanelHandle`].
//!
//! The host renders, forwards platform events, and arms a timer for
//! [`DocNavigator::next_deadline`]. Everything DOM-shaped goes through the traits
//! re-exported here: [`AnchorLayout`], [`IntersectionSource`], [`AnchorScroller`],
//! [`ListenerRegistry`], and [`PointerCapability`].
//!
//! ## Example
//!
//! ```rust
//! use signpost::{
//!     AnchorLayout, AnchorScroller, DocNavigator, Document, IntersectionSource,
//!     NavigatorConfig, Section, VisibilityEvent,
//! };
//!
//! #[derive(Default)]
//! struct Page {
//!     scrolled: Vec<String>,
//! }
//! impl AnchorLayout for Page {
//!     fn anchor_top(&self, id: &str) -> Option<f64> {
//!         match id {
//!             "intro" => Some(-300.0),
//!             "install" => Some(40.0),
//!             _ => None,
//!         }
//!     }
//! }
//! impl IntersectionSource for Page {
//!     fn watch(&mut self, _id: &str, _threshold: f64) {}
//!     fn unwatch(&mut self, _id: &str) {}
//! }
//! impl AnchorScroller for Page {
//!     fn scroll_into_view(&mut self, id: &str) {
//!         self.scrolled.push(id.into());
//!     }
//! }
//!
//! let mut page = Page::default();
//! let mut nav = DocNavigator::<u32>::new(NavigatorConfig::default());
//! let document = Document {
//!     sections: vec![
//!         Section::new("intro", "Introduction"),
//!         Section::new("install", "Installation"),
//!     ],
//!     content: "<h1 id=\"intro\">…</h1>".into(),
//!     translation_missing: false,
//! };
//! let report = nav.load(document, Some("#install"), &mut page).unwrap();
//! assert_eq!(report.observed, 2);
//! assert_eq!(page.scrolled, ["install"]);
//!
//! nav.on_intersection(VisibilityEvent::new("install", 0.8, 40.0), 1_000);
//! assert!(nav.poll(1_075, &page));
//! assert_eq!(nav.active(), Some("install"));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod document;
mod navigator;
mod panel;
mod toc;

pub use config::{NavigatorConfig, PanelConfig};
pub use document::{ContentPane, Document, Lifecycle};
pub use navigator::{DocNavigator, LoadReport};
pub use panel::PanelHandle;
pub use toc::TocRow;

pub use signpost_event_state::capture::{ListenerRegistry, PointerCapability, PointerId};
pub use signpost_outline::{
    AnchorDepth, ExpansionChange, Section, SectionTree, SubscriptionId, TreeError,
};
pub use signpost_scrollspy::{
    AnchorLayout, AnchorScroller, IntersectionSource, Offer, ResolverConfig, VisibilityEvent,
};
pub use signpost_timing::Millis;
