// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Signpost Outline: the static shape of a document and the open/closed state of its TOC.
//!
//! This crate holds the _data_ side of a documentation navigator:
//!
//! - [`Section`] / [`SectionTree`]: the hierarchical heading model of a document,
//!   validated so every slug is unique. Slugs double as anchor ids and URL fragments.
//! - [`ExpansionStore`]: which top-level branches of the table of contents are open.
//! - [`Listeners`]: a small explicit subscription list used by the stores in this
//!   workspace so presenters can follow state without a reactivity runtime.
//!
//! It does not render anything and does not know about scroll positions; the
//! `signpost_scrollspy` crate consumes the anchors produced here.
//!
//! ## Minimal example
//!
//! ```rust
//! use signpost_outline::{AnchorDepth, ExpansionStore, Section, SectionTree};
//!
//! let tree = SectionTree::new(vec![
//!     Section::new("intro", "Introduction"),
//!     Section::new("install", "Installation").with_children(vec![
//!         Section::new("install-npm", "npm"),
//!         Section::new("install-yarn", "yarn"),
//!     ]),
//! ])
//! .unwrap();
//!
//! // Anchors come out in document order.
//! let anchors: Vec<&str> = tree.anchors(AnchorDepth::All).collect();
//! assert_eq!(anchors, ["intro", "install", "install-npm", "install-yarn"]);
//!
//! // Branches start collapsed and flip on toggle.
//! let mut expansion = ExpansionStore::new();
//! assert!(!expansion.is_expanded("Installation"));
//! expansion.toggle("Installation");
//! assert!(expansion.is_expanded("Installation"));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`Section`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod expansion;
mod listeners;
mod section;

pub use expansion::{ExpansionChange, ExpansionStore};
pub use listeners::{Listeners, SubscriptionId};
pub use section::{AnchorDepth, Anchors, Section, SectionTree, Sections, TreeError};
