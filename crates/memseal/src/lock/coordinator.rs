// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright 2026 Tobias Sarnowski

//! Transition orchestration under the global serialization lock.

use super::chunks::ChunkTable;
use super::types::TransitionError;
use crate::platform::{MemoryVisibility, SecureMonitor};
use crate::tracker::ProtectionTracker;
use log::{debug, warn};
use memseal_abi::protocol::{CMD_MEM_PROTECT_LOCK_V2, SVC_MEMORY_PROTECTION};
use memseal_abi::{LockRequest, MemoryRegion};
use spin::Mutex;
use zerocopy::IntoBytes;

/// Orchestrates secure/unsecure transitions of region lists.
///
/// All transitions system-wide serialize on this coordinator's lock: at
/// most one lock/unlock sequence is in flight at any time, across all
/// callers and all buffers. The monitor's lock protocol is not reentrant,
/// so strict mutual exclusion wins over throughput here.
///
/// A failure on one region stops the list immediately: earlier regions
/// keep their applied state, later regions are left untouched, and
/// nothing is rolled back.
pub struct LockCoordinator<M, V> {
    monitor: M,
    visibility: V,
    tracker: ProtectionTracker,
    transition_lock: Mutex<()>,
}

impl<M: SecureMonitor, V: MemoryVisibility> LockCoordinator<M, V> {
    /// Create a coordinator over the given platform services. No page
    /// starts out secured.
    pub fn new(monitor: M, visibility: V) -> Self {
        Self {
            monitor,
            visibility,
            tracker: ProtectionTracker::new(),
            transition_lock: Mutex::new(()),
        }
    }

    /// Transition every region in `regions`, in order, to secure.
    ///
    /// On success all covered pages are marked secured. On error, see the
    /// stop-immediately contract on [`LockCoordinator`].
    pub fn secure(&self, regions: &[MemoryRegion]) -> Result<(), TransitionError> {
        self.transition(regions, true)
    }

    /// Transition every region in `regions`, in order, back to general
    /// accessibility.
    pub fn unsecure(&self, regions: &[MemoryRegion]) -> Result<(), TransitionError> {
        self.transition(regions, false)
    }

    /// Per-page protection state, updated only by successful transitions.
    #[must_use]
    pub fn tracker(&self) -> &ProtectionTracker {
        &self.tracker
    }

    fn transition(&self, regions: &[MemoryRegion], lock: bool) -> Result<(), TransitionError> {
        let _guard = self.transition_lock.lock();
        debug!(
            "{} {} regions",
            if lock { "locking" } else { "unlocking" },
            regions.len()
        );
        for (index, region) in regions.iter().enumerate() {
            self.transition_region(*region, lock).map_err(|err| {
                warn!("region {index}: {err}");
                err
            })?;
        }
        Ok(())
    }

    fn transition_region(&self, region: MemoryRegion, lock: bool) -> Result<(), TransitionError> {
        let table = ChunkTable::build(region)?;

        // The monitor reads the table from memory, not from the request:
        // flush it out and hand over its physical address.
        self.visibility.flush_range(table.as_bytes());
        let request = LockRequest::new(
            self.visibility.physical_address(table.as_bytes()),
            table.chunk_count(),
            lock,
        );
        self.monitor.invoke(
            SVC_MEMORY_PROTECTION,
            CMD_MEM_PROTECT_LOCK_V2,
            request.as_bytes(),
        )?;

        // State changes only after the monitor accepted the request.
        if lock {
            self.tracker.mark_secured(region.pages());
        } else {
            self.tracker.mark_unsecured(region.pages());
        }
        debug!(
            "{} {} chunks at {}",
            if lock { "locked" } else { "unlocked" },
            table.chunk_count(),
            region.base()
        );
        Ok(())
    }
}
