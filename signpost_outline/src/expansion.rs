// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Open/closed state for table-of-contents branches.
//!
//! ## Usage
//!
//! 1) Create an empty store when the navigator mounts; every branch starts collapsed.
//! 2) Call [`ExpansionStore::toggle`] when the user clicks a branch header.
//! 3) Query [`ExpansionStore::is_expanded`] while rendering to decide which
//!    child lists are visible.
//!
//! Branches are independent: opening one never closes another.
//!
//! ```
//! use signpost_outline::ExpansionStore;
//!
//! let mut store = ExpansionStore::new();
//! store.toggle("Installation");
//! store.toggle("API");
//! assert!(store.is_expanded("Installation"));
//! assert!(store.is_expanded("API"));
//!
//! store.toggle("Installation");
//! assert!(!store.is_expanded("Installation"));
//! ```

use alloc::string::String;

use hashbrown::HashMap;

use crate::Listeners;

/// Notification sent to subscribers after a branch changes state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionChange {
    /// The branch key (a top-level section title).
    pub key: String,
    /// The new state.
    pub expanded: bool,
}

/// Per-branch expanded flags keyed by top-level section title.
///
/// A key that was never touched reads as collapsed. Unknown keys are never an
/// error; toggling one starts from the implicit `false`.
#[derive(Debug, Default)]
pub struct ExpansionStore {
    flags: HashMap<String, bool>,
    revision: u64,
    listeners: Listeners<ExpansionChange>,
}

impl ExpansionStore {
    /// Creates a store with every branch collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the flag for `key` and returns the new state.
    pub fn toggle(&mut self, key: &str) -> bool {
        let expanded = !self.is_expanded(key);
        self.write(key, expanded);
        expanded
    }

    /// Returns `true` if `key` is expanded. Absent keys are collapsed.
    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    /// Sets the flag for `key`. Setting the current value is a no-op.
    pub fn set_expanded(&mut self, key: &str, expanded: bool) {
        if self.is_expanded(key) == expanded {
            return;
        }
        self.write(key, expanded);
    }

    /// Collapses every branch.
    pub fn collapse_all(&mut self) {
        let open: alloc::vec::Vec<String> = self
            .flags
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(key, _)| key.clone())
            .collect();
        for key in open {
            self.write(&key, false);
        }
    }

    /// Iterates the keys that are currently expanded, in no particular order.
    pub fn expanded_keys(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(key, _)| key.as_str())
    }

    /// Monotonic counter bumped on every effective change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Mutable access to the change listeners.
    pub fn listeners_mut(&mut self) -> &mut Listeners<ExpansionChange> {
        &mut self.listeners
    }

    fn write(&mut self, key: &str, expanded: bool) {
        match self.flags.get_mut(key) {
            Some(flag) => *flag = expanded,
            None => {
                self.flags.insert(String::from(key), expanded);
            }
        }
        self.revision = self.revision.wrapping_add(1);
        self.listeners.notify(&ExpansionChange {
            key: String::from(key),
            expanded,
        });
    }
}
