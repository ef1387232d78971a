// Copyright 2025 the Signpost Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit change subscriptions.
//!
//! Stores own a [`Listeners`] list and call [`Listeners::notify`] after each
//! effective change. Presenters register callbacks instead of relying on an
//! implicit reactivity runtime.

use alloc::boxed::Box;
use core::fmt;

use smallvec::SmallVec;

/// Handle returned by [`Listeners::subscribe`], used to unsubscribe later.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Callback<E> = Box<dyn FnMut(&E)>;

/// An ordered list of change callbacks.
///
/// Callbacks run synchronously, in subscription order, on the thread that
/// mutated the store.
pub struct Listeners<E> {
    next_id: u64,
    entries: SmallVec<[(SubscriptionId, Callback<E>); 2]>,
}

impl<E> Listeners<E> {
    /// Creates an empty listener list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: SmallVec::new(),
        }
    }

    /// Registers `callback` and returns its handle.
    pub fn subscribe(&mut self, callback: impl FnMut(&E) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Removes a callback. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(index) = self.entries.iter().position(|(entry, _)| *entry == id) else {
            return false;
        };
        self.entries.remove(index);
        true
    }

    /// Invokes every callback with `event`.
    pub fn notify(&mut self, event: &E) {
        for (_, callback) in &mut self.entries {
            callback(event);
        }
    }

    /// Drops all callbacks.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}
