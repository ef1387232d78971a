// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use signpost_outline::Section;

/// A loaded document as delivered by the external loading pipeline.
///
/// `content` is already-rendered markup; the navigator never parses it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    /// Top-level sections in document order.
    pub sections: Vec<Section>,
    /// Rendered content.
    pub content: String,
    /// `true` when the document is shown in a fallback language because no
    /// translation exists for the reader's language.
    #[cfg_attr(feature = "serde", serde(default))]
    pub translation_missing: bool,
}

/// Where a navigator is in its mount/unmount lifecycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Mounted, waiting for the document.
    #[default]
    Loading,
    /// Document loaded and anchors observed.
    Ready,
    /// Loading failed; nothing is observed.
    Failed,
    /// Torn down; every registration has been released.
    Unmounted,
}

/// What the main content pane should show.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ContentPane<'a> {
    /// Still loading.
    Loading,
    /// Loading failed.
    Failed,
    /// The rendered document.
    Ready {
        /// Rendered content.
        content: &'a str,
        /// Show the "not available in your language" notice.
        translation_missing: bool,
    },
}
