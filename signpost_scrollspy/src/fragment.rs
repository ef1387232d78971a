// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! URL fragment handling and the one-time deep-link scroll.

use crate::AnchorLayout;

/// Scrolls rendered anchors into view.
pub trait AnchorScroller {
    /// Aligns the top of anchor `id` with the top of the viewport.
    fn scroll_into_view(&mut self, id: &str);
}

/// Outcome of [`deep_link`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeepLink<'a> {
    /// The page was opened without a fragment.
    NoFragment,
    /// The anchor was scrolled into view.
    Scrolled(&'a str),
    /// The fragment names no rendered anchor; nothing was scrolled.
    MissingAnchor(&'a str),
}

/// Extracts the anchor id from a location hash or a full URL.
///
/// Accepts `"#install"`, `"install"`, or `"https://host/docs#install"`.
/// Returns `None` for an empty fragment.
///
/// ```
/// use signpost_scrollspy::parse_fragment;
///
/// assert_eq!(parse_fragment("#install"), Some("install"));
/// assert_eq!(parse_fragment("/docs/guide#usage"), Some("usage"));
/// assert_eq!(parse_fragment("#"), None);
/// assert_eq!(parse_fragment(""), None);
/// ```
#[must_use]
pub fn parse_fragment(fragment: &str) -> Option<&str> {
    let id = fragment
        .split_once('#')
        .map_or(fragment, |(_, after)| after);
    (!id.is_empty()).then_some(id)
}

/// Scrolls the anchor named by `fragment` into view, bypassing any throttling.
///
/// Runs once when a document finishes loading. A missing anchor is logged and
/// skipped rather than treated as an error.
pub fn deep_link<'a, H>(fragment: Option<&'a str>, host: &mut H) -> DeepLink<'a>
where
    H: AnchorLayout + AnchorScroller + ?Sized,
{
    let Some(id) = fragment.and_then(parse_fragment) else {
        return DeepLink::NoFragment;
    };
    if !host.has_anchor(id) {
        tracing::warn!(id, "deep link target has no anchor; skipping scroll");
        return DeepLink::MissingAnchor(id);
    }
    host.scroll_into_view(id);
    DeepLink::Scrolled(id)
}
