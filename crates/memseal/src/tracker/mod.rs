// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Per-page protection-state bookkeeping.

use memseal_abi::Pfn;
use spin::Mutex;

#[cfg(any(test, feature = "std"))]
use std::collections::BTreeSet;

#[cfg(not(any(test, feature = "std")))]
use alloc::collections::BTreeSet;

/// Which pages are currently believed to be secured.
///
/// A page's flag reflects the last successfully completed lock/unlock
/// call that covered it; the coordinator never updates it before the
/// monitor has accepted a request. Pure bookkeeping, no I/O.
///
/// Reads take the tracker's own lock, so collaborators may query at any
/// time, also while a transition is in flight on another thread. Every
/// page starts out not secured.
pub struct ProtectionTracker {
    secured: Mutex<BTreeSet<Pfn>>,
}

impl ProtectionTracker {
    /// Create an empty tracker.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            secured: Mutex::new(BTreeSet::new()),
        }
    }

    /// Flag `pages` as secured.
    pub fn mark_secured(&self, pages: impl IntoIterator<Item = Pfn>) {
        let mut secured = self.secured.lock();
        secured.extend(pages);
    }

    /// Flag `pages` as no longer secured.
    pub fn mark_unsecured(&self, pages: impl IntoIterator<Item = Pfn>) {
        let mut secured = self.secured.lock();
        for page in pages {
            secured.remove(&page);
        }
    }

    /// Whether `page` is currently secured.
    #[must_use]
    pub fn is_secured(&self, page: Pfn) -> bool {
        self.secured.lock().contains(&page)
    }

    /// Number of pages currently secured.
    #[must_use]
    pub fn secured_pages(&self) -> usize {
        self.secured.lock().len()
    }
}

impl Default for ProtectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tracker_test;
