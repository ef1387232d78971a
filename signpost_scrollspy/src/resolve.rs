// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::AnchorLayout;

/// Picks the active anchor for a visibility event whose anchor top is `event_top`.
///
/// `anchors` must be in document order. The candidate starts at the first anchor
/// and advances to each anchor whose top is at or above `event_top`, stopping at
/// the first anchor positioned strictly below it. Anchors the layout does not
/// know are skipped.
///
/// Returns `None` only when `anchors` is empty.
pub fn resolve_active<'a, S, L>(anchors: &'a [S], event_top: f64, layout: &L) -> Option<&'a str>
where
    S: AsRef<str>,
    L: AnchorLayout + ?Sized,
{
    let mut candidate = anchors.first()?.as_ref();
    for anchor in anchors {
        let anchor = anchor.as_ref();
        let Some(top) = layout.anchor_top(anchor) else {
            continue;
        };
        if event_top < top {
            break;
        }
        candidate = anchor;
    }
    Some(candidate)
}
