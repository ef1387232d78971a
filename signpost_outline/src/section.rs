// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Document sections and the validated tree that owns them.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashSet;
use smallvec::SmallVec;

/// A heading in the document hierarchy.
///
/// The `slug` is the stable identity of a section: it is the id of the rendered
/// anchor element and the URL fragment that links to it. The `title` is the
/// human-readable label shown in the table of contents.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Section {
    /// Unique anchor id / URL fragment.
    pub slug: String,
    /// Display title.
    pub title: String,
    /// Nested sections in document order.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<Section>,
}

impl Section {
    /// Creates a leaf section.
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Replaces the children of this section.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Returns `true` if this section has nested sections.
    #[must_use]
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// Finds `slug` in this section or any of its descendants.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&Self> {
        if self.slug == slug {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(slug))
    }
}

/// Error returned when a list of sections does not form a valid tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeError {
    /// A section has an empty slug and could not be used as an anchor.
    EmptySlug {
        /// Title of the offending section.
        title: String,
    },
    /// Two sections share the same slug.
    DuplicateSlug {
        /// The repeated slug.
        slug: String,
    },
}

impl fmt::Display for TreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySlug { title } => write!(f, "section {title:?} has an empty slug"),
            Self::DuplicateSlug { slug } => write!(f, "slug {slug:?} is used more than once"),
        }
    }
}

impl core::error::Error for TreeError {}

/// Which anchors of a tree take part in observation and scanning.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorDepth {
    /// Only top-level sections.
    TopLevel,
    /// Every section, parents before children.
    #[default]
    All,
}

/// An immutable, validated sequence of top-level sections.
///
/// Slugs are unique across the whole tree. The model itself is recursive, though
/// table-of-contents rendering only gives meaning to the first two levels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionTree {
    sections: Vec<Section>,
    len: usize,
}

impl SectionTree {
    /// Validates `sections` and builds a tree.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptySlug`] for a section without a slug and
    /// [`TreeError::DuplicateSlug`] if a slug appears twice anywhere in the tree.
    pub fn new(sections: Vec<Section>) -> Result<Self, TreeError> {
        let len = validate(&sections)?;
        Ok(Self { sections, len })
    }

    /// Returns the top-level sections.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the total number of sections at every depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Iterates every section in document order together with its depth (top level is `0`).
    pub fn iter(&self) -> Sections<'_> {
        Sections::new(&self.sections)
    }

    /// Iterates anchor slugs in document order.
    pub fn anchors(&self, depth: AnchorDepth) -> Anchors<'_> {
        Anchors {
            inner: self.iter(),
            depth,
        }
    }

    /// Looks up a section by slug at any depth.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&Section> {
        self.sections.iter().find_map(|section| section.find(slug))
    }

    /// Returns `true` if a section with `slug` exists.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.get(slug).is_some()
    }

    /// Returns the top-level section that is `slug` or contains it.
    #[must_use]
    pub fn top_level_of(&self, slug: &str) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| section.find(slug).is_some())
    }
}

/// Checks slugs and returns the total section count.
fn validate(sections: &[Section]) -> Result<usize, TreeError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (_, section) in Sections::new(sections) {
        if section.slug.is_empty() {
            return Err(TreeError::EmptySlug {
                title: section.title.clone(),
            });
        }
        if !seen.insert(section.slug.as_str()) {
            return Err(TreeError::DuplicateSlug {
                slug: section.slug.clone(),
            });
        }
    }
    Ok(seen.len())
}

/// Pre-order iterator over a section slice, yielding `(depth, section)`.
#[derive(Clone, Debug)]
pub struct Sections<'a> {
    stack: SmallVec<[(usize, core::slice::Iter<'a, Section>); 4]>,
}

impl<'a> Sections<'a> {
    fn new(sections: &'a [Section]) -> Self {
        let mut stack = SmallVec::new();
        stack.push((0, sections.iter()));
        Self { stack }
    }
}

impl<'a> Iterator for Sections<'a> {
    type Item = (usize, &'a Section);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            let depth = top.0;
            match top.1.next() {
                Some(section) => {
                    if section.is_branch() {
                        self.stack.push((depth + 1, section.children.iter()));
                    }
                    return Some((depth, section));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

/// Iterator over anchor slugs, see [`SectionTree::anchors`].
#[derive(Clone, Debug)]
pub struct Anchors<'a> {
    inner: Sections<'a>,
    depth: AnchorDepth,
}

impl<'a> Iterator for Anchors<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.depth {
            AnchorDepth::All => self.inner.next().map(|(_, s)| s.slug.as_str()),
            AnchorDepth::TopLevel => self
                .inner
                .by_ref()
                .find(|(depth, _)| *depth == 0)
                .map(|(_, s)| s.slug.as_str()),
        }
    }
}
