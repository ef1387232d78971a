// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat table-of-contents projection for presenters.

use alloc::vec::Vec;

use signpost_outline::{ExpansionStore, Section, SectionTree};

/// One entry of the rendered table of contents.
///
/// Rows come out in document order: each top-level section, followed by its
/// children. Only the first two levels are projected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TocRow<'a> {
    /// Anchor slug; link target is `#slug`.
    pub slug: &'a str,
    /// Display title.
    pub title: &'a str,
    /// `0` for top-level rows, `1` for their children.
    pub depth: usize,
    /// Top-level row with children; clicking it toggles expansion.
    pub is_branch: bool,
    /// Branch is expanded. Always `false` for leaves.
    pub expanded: bool,
    /// Row should be laid out. Children of collapsed branches are hidden.
    pub visible: bool,
    /// Row is the active section. At most one row has this set.
    pub active: bool,
    /// Branch whose subtree holds the active section.
    pub contains_active: bool,
    /// Row matches the current URL fragment.
    pub linked: bool,
}

pub(crate) fn rows<'a>(
    tree: &'a SectionTree,
    expansion: &ExpansionStore,
    active: Option<&str>,
    fragment: Option<&str>,
) -> Vec<TocRow<'a>> {
    let mut out = Vec::with_capacity(tree.len());
    for top in tree.sections() {
        let expanded = top.is_branch() && expansion.is_expanded(&top.title);
        out.push(TocRow {
            is_branch: top.is_branch(),
            expanded,
            contains_active: top.is_branch()
                && active.is_some_and(|slug| slug != top.slug && top.find(slug).is_some()),
            ..row(top, 0, true, active, fragment)
        });
        for child in &top.children {
            out.push(row(child, 1, expanded, active, fragment));
        }
    }
    out
}

fn row<'a>(
    section: &'a Section,
    depth: usize,
    visible: bool,
    active: Option<&str>,
    fragment: Option<&str>,
) -> TocRow<'a> {
    TocRow {
        slug: &section.slug,
        title: &section.title,
        depth,
        is_branch: false,
        expanded: false,
        visible,
        active: active == Some(section.slug.as_str()),
        contains_active: false,
        linked: fragment == Some(section.slug.as_str()),
    }
}
